// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item drag sessions.
//!
//! A [`DragSession`] is ephemeral: created when a press lands on an item
//! while free dragging is enabled, consumed on release, and dropped by the
//! next layout pass. While active it overrides the item's margin offset;
//! page navigation leaves the dragged item alone.

use kurbo::{Insets, Point, Vec2};

/// Width of the strip along each container edge that triggers a page flip
/// while an item is being dragged.
pub const EDGE_FLIP_ZONE: f64 = 50.0;

/// Edge of the container the pointer is hovering during a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeZone {
    /// Within [`EDGE_FLIP_ZONE`] of the left edge.
    Left,
    /// Within [`EDGE_FLIP_ZONE`] of the right edge.
    Right,
}

/// Returns the edge zone the pointer is in, if any.
///
/// `x` is the pointer's horizontal position in container coordinates.
#[must_use]
pub fn edge_zone(x: f64, container_width: f64) -> Option<EdgeZone> {
    if x < EDGE_FLIP_ZONE {
        Some(EdgeZone::Left)
    } else if x > container_width - EDGE_FLIP_ZONE {
        Some(EdgeZone::Right)
    } else {
        None
    }
}

/// State captured when a press starts a free drag on an item.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    /// Index of the dragged item.
    pub item: usize,
    /// The item's margin offset at press time.
    pub origin_margin: Insets,
    /// The page that was current at press time.
    pub origin_page: usize,
    /// Pointer position at press time, in container coordinates.
    pub origin_pointer: Point,
}

impl DragSession {
    /// Margin offset for the current pointer position: the origin margin
    /// shifted by the pointer displacement since press.
    #[must_use]
    pub fn margin_for(&self, pointer: Point) -> Insets {
        let delta: Vec2 = pointer - self.origin_pointer;
        Insets {
            x0: self.origin_margin.x0 + delta.x,
            y0: self.origin_margin.y0 + delta.y,
            x1: self.origin_margin.x1,
            y1: self.origin_margin.y1,
        }
    }

    /// Margin correction applied on release so the item stays put visually
    /// when the current page changed mid-drag.
    ///
    /// Navigation shifts every item by one container width per page; the
    /// dragged item was excluded, so its margin absorbs the difference.
    #[must_use]
    pub fn release_compensation(&self, current_page: usize, container_width: f64) -> f64 {
        (current_page as f64 - self.origin_page as f64) * container_width
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point};

    use super::{DragSession, EdgeZone, edge_zone};

    fn session() -> DragSession {
        DragSession {
            item: 3,
            origin_margin: Insets::ZERO,
            origin_page: 1,
            origin_pointer: Point::new(400.0, 300.0),
        }
    }

    #[test]
    fn margin_tracks_pointer_displacement() {
        let s = session();
        let margin = s.margin_for(Point::new(430.0, 280.0));
        assert_eq!(margin.x0, 30.0);
        assert_eq!(margin.y0, -20.0);
        assert_eq!(margin.x1, 0.0);
        assert_eq!(margin.y1, 0.0);
    }

    #[test]
    fn margin_preserves_origin_offsets() {
        let mut s = session();
        s.origin_margin = Insets::new(12.0, -4.0, 1.0, 2.0);
        let margin = s.margin_for(Point::new(410.0, 310.0));
        assert_eq!(margin.x0, 22.0);
        assert_eq!(margin.y0, 6.0);
        assert_eq!(margin.x1, 1.0);
        assert_eq!(margin.y1, 2.0);
    }

    #[test]
    fn compensation_is_page_delta_times_container_width() {
        let s = session();
        assert_eq!(s.release_compensation(1, 1000.0), 0.0);
        assert_eq!(s.release_compensation(3, 1000.0), 2000.0);
        assert_eq!(s.release_compensation(0, 1000.0), -1000.0);
    }

    #[test]
    fn edge_zones_are_fifty_units_wide() {
        assert_eq!(edge_zone(10.0, 1000.0), Some(EdgeZone::Left));
        assert_eq!(edge_zone(49.9, 1000.0), Some(EdgeZone::Left));
        assert_eq!(edge_zone(50.0, 1000.0), None);
        assert_eq!(edge_zone(500.0, 1000.0), None);
        assert_eq!(edge_zone(950.0, 1000.0), None);
        assert_eq!(edge_zone(950.1, 1000.0), Some(EdgeZone::Right));
        assert_eq!(edge_zone(999.0, 1000.0), Some(EdgeZone::Right));
    }
}
