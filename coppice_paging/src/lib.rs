// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Paging: greedy row/page packing and page-strip arrangement.
//!
//! This crate turns a flat, ordered collection of item sizes into a plan of
//! rows and fixed-capacity pages, then assigns each item a slot rectangle on
//! an infinite horizontal strip where consecutive pages sit one container
//! width apart. It is the layout half of a paginated panel; navigation (which
//! page is visible, and how the transition animates) lives in `coppice_nav`.
//!
//! Like the rest of the Coppice family, this crate is headless: items are
//! just the indices `0..len`, the host owns the actual views and feeds their
//! sizes in, and nothing here knows about rendering or input.
//!
//! ## Packing policy
//!
//! - Items accumulate into a row while the running width plus the next item
//!   (including horizontal margins) stays strictly below the container
//!   width.
//! - An item that does not fit closes the row and starts the next one. The
//!   first item of a row is always placed, even when it is wider than the
//!   container: the row simply overflows and is never clipped.
//! - Rows group into pages of a fixed row capacity (the panel default is 2);
//!   the last page takes the remainder.
//!
//! The plan is recomputed wholesale whenever the container or the item set
//! changes; there is no incremental path. That is a deliberate
//! correctness-over-performance tradeoff for desktop-scale item counts.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use coppice_paging::PagePlan;
//!
//! let sizes = vec![Size::new(200.0, 150.0); 19];
//! let margin = Insets::uniform(5.0);
//! let plan = PagePlan::compute(1000.0, margin, &sizes, 2);
//!
//! // 4 items per row (the 5th would reach 1050), 5 rows, 3 pages.
//! assert_eq!(plan.page_count(), 3);
//! assert_eq!(plan.row_count(), 5);
//!
//! let slots = plan.arrange(Size::new(1000.0, 600.0), margin, &sizes);
//! assert_eq!(slots.len(), 19);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod plan;

pub use plan::{Page, PagePlan, Row};
