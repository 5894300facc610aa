// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport transform engine.

use core::time::Duration;

use coppice_events::Emitter;
use coppice_timing::{Easing, Timeline, TimerQueue, Tween};
use kurbo::{Point, Size, Vec2};

use crate::scene::ZoomScene;

#[cfg(feature = "std")]
#[inline]
fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Animated channels of the viewport transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZoomChannel {
    Scale,
    OffsetX,
    OffsetY,
}

/// The largest scale that fits `target` entirely inside `view`.
///
/// `None` for degenerate or non-finite extents; never returns an infinite
/// or NaN factor.
fn fit_scale(view: Size, target: Size) -> Option<f64> {
    for extent in [view.width, view.height, target.width, target.height] {
        if !extent.is_finite() || extent <= 0.0 {
            return None;
        }
    }
    let scale = (view.width / target.width).min(view.height / target.height);
    scale.is_finite().then_some(scale)
}

/// Offset that centers `target` (placed at `origin`, scaled by `scale`)
/// inside `view`.
fn fit_offset(view: Size, origin: Point, target: Size, scale: f64) -> Vec2 {
    let slack_x = view.width - scale * target.width;
    let slack_y = view.height - scale * target.height;
    Vec2::new(
        -(origin.x * scale - slack_x / 2.0),
        -(origin.y * scale - slack_y / 2.0),
    )
}

/// A zoomable viewport over host-owned content.
///
/// `ZoomView` models the transform a host applies to its content root: a
/// uniform scale and a translation offset. It never draws or lays anything
/// out; the host reads [`ZoomView::scale`] and [`ZoomView::offset`] back
/// each frame and applies them itself.
///
/// The flagship operation is [`ZoomView::zoom_to_node`]: given a scene
/// query ([`ZoomScene`]) and a node id, it computes the scale that fits the
/// node inside the view and the offset that centers it there, then either
/// applies both instantly or tweens scale and offset concurrently on a
/// circle ease-out.
///
/// ## Events
///
/// Animated transitions fire the zoom-starting emitter when they begin.
/// Completion differs by operation: plain [`ZoomView::zoom`] and
/// [`ZoomView::reset_zoom`] complete when the scale tween finishes, while an
/// animated fit completes on a one-shot timer armed for the configured
/// duration, so its completion (and the target node's callbacks, if it
/// wants them) fires even if the fit is retargeted mid-flight. Instant
/// operations fire no events at all, and discard any in-flight transition
/// along with its pending completion.
///
/// The host drives time by calling [`ZoomView::advance`] with a monotonic
/// clock, the same cooperative model as the rest of the Coppice family.
#[derive(Debug)]
pub struct ZoomView<Id> {
    scale: f64,
    offset: Vec2,
    view: Size,
    target_scale: f64,
    target_offset: Vec2,
    timeline: Timeline<ZoomChannel>,
    fit_timer: TimerQueue<()>,
    fit_pending: bool,
    fit_notify: Option<Id>,
    duration: Duration,
    animated_by_default: bool,
    zoom_starting_event: Emitter<()>,
    zoom_completed_event: Emitter<()>,
}

impl<Id: Copy> ZoomView<Id> {
    /// Creates a view at identity transform with the default configuration:
    /// 0.5 s animation duration, animated by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            view: Size::ZERO,
            target_scale: 1.0,
            target_offset: Vec2::ZERO,
            timeline: Timeline::new(),
            fit_timer: TimerQueue::new(),
            fit_pending: false,
            fit_notify: None,
            duration: Duration::from_millis(500),
            animated_by_default: true,
            zoom_starting_event: Emitter::new(),
            zoom_completed_event: Emitter::new(),
        }
    }

    // --- state ---

    /// The current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The current translation offset, applied after scaling.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the view extent. In-flight transitions keep their targets; the
    /// host typically follows a resize with a fresh fit.
    pub fn set_view_size(&mut self, size: Size) {
        self.view = size;
    }

    /// The current view extent.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Returns `true` while an animated transition is in flight.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        !self.timeline.is_idle() || self.fit_pending
    }

    // --- configuration ---

    /// Sets the animated transition duration.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// The animated transition duration.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.duration
    }

    /// Sets whether the duration-less operation forms animate.
    pub fn set_zoom_animated(&mut self, animated: bool) {
        self.animated_by_default = animated;
    }

    /// Whether the duration-less operation forms animate.
    #[must_use]
    pub fn zoom_animated(&self) -> bool {
        self.animated_by_default
    }

    // --- events ---

    /// Fired when an animated transition begins.
    pub fn zoom_starting(&mut self) -> &mut Emitter<()> {
        &mut self.zoom_starting_event
    }

    /// Fired when an animated transition completes.
    pub fn zoom_completed(&mut self) -> &mut Emitter<()> {
        &mut self.zoom_completed_event
    }

    // --- operations ---

    /// Zooms to an absolute scale factor with the default animation setting.
    pub fn zoom(&mut self, factor: f64) {
        self.zoom_with(factor, self.animated_by_default);
    }

    /// Zooms to an absolute scale factor.
    ///
    /// The offset is left alone. Instant zooms apply silently, dropping any
    /// in-flight transition; animated zooms fire zoom-starting now and
    /// zoom-completed when the scale tween finishes. Non-finite or
    /// non-positive factors are ignored.
    pub fn zoom_with(&mut self, factor: f64, animated: bool) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if animated {
            self.zoom_starting_event.emit(&());
            self.begin_scale(factor);
        } else {
            self.settle();
            self.scale = factor;
            self.target_scale = factor;
        }
    }

    /// Returns to identity transform with the default animation setting.
    pub fn reset_zoom(&mut self) {
        self.reset_zoom_with(self.animated_by_default);
    }

    /// Returns to identity transform: scale `1`, offset `(0, 0)`.
    pub fn reset_zoom_with(&mut self, animated: bool) {
        if animated {
            self.zoom_starting_event.emit(&());
            self.begin_scale(1.0);
            self.begin_offset(Vec2::ZERO);
        } else {
            self.settle();
            self.scale = 1.0;
            self.target_scale = 1.0;
            self.offset = Vec2::ZERO;
            self.target_offset = Vec2::ZERO;
        }
    }

    /// Fits `node` into the view with the default animation setting.
    pub fn zoom_to_node<S>(&mut self, scene: &mut S, node: Id)
    where
        S: ZoomScene<NodeId = Id>,
    {
        self.zoom_to_node_with(scene, node, self.animated_by_default);
    }

    /// Fits `node` into the view: scale becomes the largest factor that
    /// contains the node's rendered size, and the offset centers it.
    ///
    /// A node that is unknown, unplaced, or degenerate (zero-sized) is
    /// silently skipped; the transform is never corrupted.
    ///
    /// The animated form additionally compensates for the node's own scale:
    /// a node reporting a local scale other than `1` has its size multiplied
    /// by that scale, and a nested-zoomable node at level `L` by
    /// `1 / fit_factor^L` instead, so fitting a viewport-within-a-viewport
    /// converges rather than compounding. If the node wants zoom
    /// notifications its started/completed hooks fire in lockstep with the
    /// view's own events.
    pub fn zoom_to_node_with<S>(&mut self, scene: &mut S, node: Id, animated: bool)
    where
        S: ZoomScene<NodeId = Id>,
    {
        if animated {
            self.fit_node_animated(scene, node);
        } else {
            self.fit_node_instant(scene, node);
        }
    }

    fn fit_node_instant<S>(&mut self, scene: &S, node: Id)
    where
        S: ZoomScene<NodeId = Id>,
    {
        let Some(origin) = scene.origin_in_root(node) else {
            return;
        };
        let Some(size) = scene.node_actual_size(node) else {
            return;
        };
        let Some(scale) = fit_scale(self.view, size) else {
            return;
        };
        self.settle();
        self.scale = scale;
        self.target_scale = scale;
        self.offset = fit_offset(self.view, origin, size, scale);
        self.target_offset = self.offset;
    }

    fn fit_node_animated<S>(&mut self, scene: &mut S, node: Id)
    where
        S: ZoomScene<NodeId = Id>,
    {
        let Some(origin) = scene.origin_in_root(node) else {
            return;
        };
        let Some(mut size) = scene.node_actual_size(node) else {
            return;
        };

        let local_scale = scene.node_local_scale(node);
        if local_scale != 1.0 {
            let compensation = if let Some(level) = scene.nesting_level(node) {
                let Some(fit) = self.scale_factor_for(scene, node) else {
                    return;
                };
                1.0 / pow(fit, f64::from(level))
            } else {
                local_scale
            };
            if !compensation.is_finite() || compensation <= 0.0 {
                return;
            }
            size = Size::new(size.width * compensation, size.height * compensation);
        }

        let Some(scale) = fit_scale(self.view, size) else {
            return;
        };
        let offset = fit_offset(self.view, origin, size, scale);

        self.zoom_starting_event.emit(&());
        self.begin_scale(scale);
        self.begin_offset(offset);

        self.fit_pending = true;
        self.fit_timer.schedule_after((), self.duration);
        self.fit_notify = None;
        if scene.wants_zoom_notifications(node) {
            scene.notify_zoom_started(node);
            self.fit_notify = Some(node);
        }
    }

    // --- fit factor queries ---

    /// The scale that would fit the node's configured size into the view.
    ///
    /// Independent of the current zoom. `None` for unknown nodes or
    /// degenerate extents.
    #[must_use]
    pub fn scale_factor_for<S>(&self, scene: &S, node: Id) -> Option<f64>
    where
        S: ZoomScene<NodeId = Id>,
    {
        fit_scale(self.view, scene.node_size(node)?)
    }

    /// The scale that would fit the node's rendered size into the view.
    #[must_use]
    pub fn actual_scale_factor_for<S>(&self, scene: &S, node: Id) -> Option<f64>
    where
        S: ZoomScene<NodeId = Id>,
    {
        fit_scale(self.view, scene.node_actual_size(node)?)
    }

    // --- time ---

    /// Moves the animation clock to `now`, sampling in-flight channels and
    /// delivering deferred completion notifications.
    pub fn advance<S>(&mut self, now: Duration, scene: &mut S)
    where
        S: ZoomScene<NodeId = Id>,
    {
        let finished = self.timeline.advance(now);
        if let Some(value) = self.timeline.value(&ZoomChannel::Scale) {
            self.scale = value;
        }
        if let Some(value) = self.timeline.value(&ZoomChannel::OffsetX) {
            self.offset.x = value;
        }
        if let Some(value) = self.timeline.value(&ZoomChannel::OffsetY) {
            self.offset.y = value;
        }
        for channel in finished {
            match channel {
                ZoomChannel::Scale => {
                    self.scale = self.target_scale;
                    // A pending fit owns its completion; see the timer below.
                    if !self.fit_pending {
                        self.zoom_completed_event.emit(&());
                    }
                }
                ZoomChannel::OffsetX => self.offset.x = self.target_offset.x,
                ZoomChannel::OffsetY => self.offset.y = self.target_offset.y,
            }
        }

        for () in self.fit_timer.advance(now) {
            self.fit_pending = false;
            if let Some(node) = self.fit_notify.take() {
                scene.notify_zoom_completed(node);
            }
            self.zoom_completed_event.emit(&());
        }
    }

    /// Drops in-flight tweens and any pending fit completion. An instant
    /// operation supersedes whatever was animating; the superseded
    /// transition never completes.
    fn settle(&mut self) {
        self.timeline.clear();
        self.fit_timer.cancel(&());
        self.fit_pending = false;
        self.fit_notify = None;
    }

    fn begin_scale(&mut self, to: f64) {
        self.timeline.begin(
            ZoomChannel::Scale,
            Tween {
                from: self.scale,
                to,
                delay: Duration::ZERO,
                duration: self.duration,
                easing: Easing::CircleOut,
            },
        );
        self.target_scale = to;
    }

    fn begin_offset(&mut self, to: Vec2) {
        for (channel, from, target) in [
            (ZoomChannel::OffsetX, self.offset.x, to.x),
            (ZoomChannel::OffsetY, self.offset.y, to.y),
        ] {
            self.timeline.begin(
                channel,
                Tween {
                    from,
                    to: target,
                    delay: Duration::ZERO,
                    duration: self.duration,
                    easing: Easing::CircleOut,
                },
            );
        }
        self.target_offset = to;
    }

    /// Snapshot of the view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomViewDebugInfo {
        ZoomViewDebugInfo {
            scale: self.scale,
            offset: self.offset,
            view: self.view,
            in_flight: self.timeline.len(),
            fit_pending: self.fit_pending,
        }
    }
}

impl<Id: Copy> Default for ZoomView<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`ZoomView`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomViewDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current translation offset.
    pub offset: Vec2,
    /// View extent.
    pub view: Size,
    /// Number of in-flight transform tweens.
    pub in_flight: usize,
    /// Whether an animated fit is awaiting its completion timer.
    pub fit_pending: bool,
}
