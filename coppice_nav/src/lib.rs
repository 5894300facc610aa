// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Nav: the navigation half of a paginated panel.
//!
//! `coppice_paging` decides where items sit on an infinite page strip; this
//! crate decides which page is visible and how it gets there. The central
//! type is [`Pager`], a headless controller that composes:
//!
//! - animated page transitions with a per-item back ease-out cascade,
//!   completion events, and last-writer-wins retargeting;
//! - input trigger modes ([`TriggerMode`]) gating which input channel
//!   (arrow keys, mouse buttons, or a horizontal swipe) may drive
//!   navigation;
//! - opt-in free dragging of individual items, with z-order raising,
//!   edge-of-container page flipping, and cross-page release compensation.
//!
//! The host owns the views, routes input (in container coordinates), drives
//! time through [`Pager::advance`], and reads one rectangle per item back
//! out each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use coppice_nav::Pager;
//!
//! let mut pager = Pager::new();
//! pager.set_container_size(Size::new(1000.0, 600.0));
//! for _ in 0..19 {
//!     pager.push_item(Size::new(200.0, 150.0));
//! }
//! pager.relayout();
//! assert_eq!(pager.page_count(), 3);
//!
//! pager.navigate_to_page(1, true);
//! assert!(pager.is_navigating());
//! pager.advance(Duration::from_secs(1));
//! assert!(!pager.is_navigating());
//! assert_eq!(pager.item_translation_x(0), Some(-1000.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod pager;
mod triggers;

pub use drag::{DragSession, EDGE_FLIP_ZONE, EdgeZone, edge_zone};
pub use pager::{Pager, PagerDebugInfo};
pub use triggers::{ArrowKey, PointerButton, SwipeDirection, SwipeTracker, TriggerMode};
