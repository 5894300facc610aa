// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Timing: host-agnostic easing, tween, and timer primitives.
//!
//! The Coppice controllers model "animation" the way cooperative UI runtimes
//! do: as values interpolated over wall-clock time, with completion observed
//! later on the same thread. This crate provides the three pieces they need:
//!
//! - [`Easing`]: the interpolation curves used by navigation and zoom.
//! - [`Timeline`]: a keyed set of scalar tweens. Starting a tween for a key
//!   that already has one **replaces** it (last-writer-wins), and
//!   [`Timeline::cancel`] drops one outright; neither reports completion
//!   for the displaced tween.
//! - [`TimerQueue`]: one-shot deadlines for completion tracking that is not
//!   tied to any single tween.
//!
//! Nothing here spawns threads or reads clocks. The host owns time: it calls
//! [`Timeline::advance`] / [`TimerQueue::advance`] with a monotonic
//! [`Duration`] of its choosing, then samples values and reacts to the keys
//! reported as finished.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use coppice_timing::{Easing, Timeline, Tween};
//!
//! let mut timeline = Timeline::new();
//! timeline.begin(
//!     "slide",
//!     Tween {
//!         from: 0.0,
//!         to: 100.0,
//!         delay: Duration::ZERO,
//!         duration: Duration::from_secs(1),
//!         easing: Easing::Linear,
//!     },
//! );
//!
//! let finished = timeline.advance(Duration::from_millis(500));
//! assert!(finished.is_empty());
//! assert_eq!(timeline.value(&"slide"), Some(50.0));
//!
//! let finished = timeline.advance(Duration::from_secs(1));
//! assert_eq!(finished, vec!["slide"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable either the `std` or the
//! `libm` feature for the floating-point functions the easing curves need.

#![no_std]

extern crate alloc;

// The easing curves use the inherent `f64` math methods, which live in std.
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("coppice_timing requires either the `std` or the `libm` feature");

mod easing;
mod timeline;
mod timer;

pub use easing::Easing;
pub use timeline::{Timeline, TimelineDebugInfo, Tween};
pub use timer::TimerQueue;
