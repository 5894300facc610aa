// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input trigger modes and the page-level swipe tracker.

use kurbo::Point;

/// Which input channel is authorized to drive page navigation.
///
/// Modes are mutually exclusive and configured externally; the panel ignores
/// input that does not belong to the active mode. Programmatic navigation
/// works in every mode, including [`TriggerMode::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Input never navigates.
    #[default]
    None,
    /// Left/right arrow keys navigate to the previous/next page.
    ArrowKeys,
    /// Left button press navigates to the previous page, right button press
    /// to the next.
    MouseClick,
    /// A horizontal drag across the panel commits a page change on release
    /// when it exceeds one twentieth of the container width.
    MouseDrag,
}

/// Pointer button identity, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
}

/// Arrow key identity, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    /// Navigates to the previous page in [`TriggerMode::ArrowKeys`].
    Left,
    /// Navigates to the next page in [`TriggerMode::ArrowKeys`].
    Right,
}

/// Direction committed by a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Displacement was negative: content pushed left, go forward.
    Next,
    /// Displacement was positive: content pushed right, go back.
    Previous,
}

/// Tracks a press-move-release sequence for drag-to-navigate.
///
/// The tracker records the signed horizontal displacement between press and
/// the latest move; it never moves any element. On release the displacement
/// is compared against a threshold and at most one navigation direction is
/// committed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    origin: Option<Point>,
    displacement: f64,
}

impl SwipeTracker {
    /// Begins tracking from a press position.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.displacement = 0.0;
    }

    /// Records a move while the button is held. No-op before a press.
    pub fn update(&mut self, pos: Point) {
        if let Some(origin) = self.origin {
            self.displacement = pos.x - origin.x;
        }
    }

    /// Current signed horizontal displacement.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Ends tracking and returns the committed direction, if any.
    ///
    /// Commits when `|displacement| > threshold`; the sign picks the
    /// direction. A release without a prior press commits nothing.
    pub fn release(&mut self, threshold: f64) -> Option<SwipeDirection> {
        let _ = self.origin.take()?;
        let displacement = self.displacement;
        self.displacement = 0.0;
        if displacement.abs() > threshold {
            if displacement < 0.0 {
                Some(SwipeDirection::Next)
            } else {
                Some(SwipeDirection::Previous)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{SwipeDirection, SwipeTracker};

    #[test]
    fn short_swipe_commits_nothing() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(100.0, 0.0));
        swipe.update(Point::new(130.0, 0.0));
        assert_eq!(swipe.release(50.0), None);
    }

    #[test]
    fn negative_displacement_commits_next() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(500.0, 0.0));
        swipe.update(Point::new(420.0, 10.0));
        assert_eq!(swipe.release(50.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn positive_displacement_commits_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(100.0, 0.0));
        swipe.update(Point::new(260.0, -5.0));
        assert_eq!(swipe.release(50.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn displacement_at_threshold_does_not_commit() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(0.0, 0.0));
        swipe.update(Point::new(-50.0, 0.0));
        assert_eq!(swipe.release(50.0), None, "strictly greater than");
    }

    #[test]
    fn release_without_press_is_inert() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.release(50.0), None);
    }

    #[test]
    fn release_resets_state_for_the_next_gesture() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(0.0, 0.0));
        swipe.update(Point::new(-200.0, 0.0));
        assert_eq!(swipe.release(50.0), Some(SwipeDirection::Next));

        // A stale displacement must not leak into the next release.
        assert_eq!(swipe.release(50.0), None);

        swipe.press(Point::new(0.0, 0.0));
        assert_eq!(swipe.displacement(), 0.0);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.update(Point::new(300.0, 0.0));
        assert_eq!(swipe.displacement(), 0.0);
    }

    #[test]
    fn only_the_latest_move_counts() {
        let mut swipe = SwipeTracker::default();
        swipe.press(Point::new(0.0, 0.0));
        swipe.update(Point::new(-300.0, 0.0));
        swipe.update(Point::new(-20.0, 0.0));
        assert_eq!(swipe.release(50.0), None, "displacement is not cumulative");
    }
}
