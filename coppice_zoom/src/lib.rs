// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Zoom: a zoom-to-fit viewport transform engine.
//!
//! [`ZoomView`] owns the uniform scale and translation offset a host applies
//! to its content root. The host implements [`ZoomScene`] to answer geometry
//! queries about its nodes; the engine computes fit transforms, animates
//! them on a circle ease-out, and reports lifecycle moments through
//! subscription emitters. Nothing here renders or lays out; the host reads
//! the transform back each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use coppice_zoom::{ZoomScene, ZoomView};
//!
//! struct Scene;
//!
//! impl ZoomScene for Scene {
//!     type NodeId = ();
//!
//!     fn origin_in_root(&self, (): ()) -> Option<Point> {
//!         Some(Point::new(400.0, 300.0))
//!     }
//!     fn node_size(&self, (): ()) -> Option<Size> {
//!         Some(Size::new(200.0, 150.0))
//!     }
//!     fn node_actual_size(&self, (): ()) -> Option<Size> {
//!         Some(Size::new(200.0, 150.0))
//!     }
//! }
//!
//! let mut scene = Scene;
//! let mut view = ZoomView::new();
//! view.set_view_size(Size::new(1000.0, 600.0));
//!
//! // The 200x150 node fits at 4x (the height binds).
//! view.zoom_to_node_with(&mut scene, (), false);
//! assert_eq!(view.scale(), 4.0);
//!
//! view.reset_zoom_with(true);
//! view.advance(Duration::from_secs(1), &mut scene);
//! assert_eq!(view.scale(), 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable either the `std` or the
//! `libm` feature for the real-number math.

#![no_std]

extern crate alloc;

// The fit math uses the inherent `f64::powf`, which lives in std.
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("coppice_zoom requires either the `std` or the `libm` feature");

mod scene;
mod view;

pub use scene::ZoomScene;
pub use view::{ZoomView, ZoomViewDebugInfo};
