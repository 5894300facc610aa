// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use coppice_events::Emitter;
use coppice_paging::PagePlan;
use coppice_timing::{Easing, Timeline, Tween};
use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::drag::{DragSession, EdgeZone, edge_zone};
use crate::triggers::{ArrowKey, PointerButton, SwipeDirection, SwipeTracker, TriggerMode};

/// Fraction of the navigation duration separating consecutive items in the
/// animated cascade.
const STAGGER_FRACTION: f64 = 0.008;

/// Fraction of the container width a swipe must exceed to commit.
const SWIPE_THRESHOLD_FRACTION: f64 = 1.0 / 20.0;

#[derive(Clone, Copy, Debug)]
struct ItemState {
    size: Size,
    /// Free-drag offset; zero until a drag moves the item.
    margin: Insets,
    translate_x: f64,
    z: u32,
}

#[derive(Clone, Copy, Debug)]
struct Flight {
    target_tx: f64,
    remaining: usize,
}

/// A paginated panel: packing plan, navigation state machine, input trigger
/// interpretation, and per-item free dragging in one cooperative controller.
///
/// `Pager` is headless. The host owns the actual item views; it feeds in
/// sizes, the container extent, and pointer/keyboard input (in container
/// coordinates), drives time via [`Pager::advance`], and reads back one
/// rectangle per item via [`Pager::item_rect`] each frame.
///
/// ## Model
///
/// - A layout pass ([`Pager::relayout`]) recomputes the page plan and slot
///   rectangles wholesale, clamps the current page index into the new plan,
///   and drops any in-flight navigation or drag session.
/// - Navigation translates every item horizontally by one container width
///   per page. Animated transitions use a back ease-out cascade: item *k*'s
///   tween starts `k × 0.008 × duration` late. Completion is counted per
///   item; when every driven tween has finished the panel returns to idle
///   and the navigation-completed event fires.
/// - A new navigation while one is in flight simply retargets every item's
///   tween (last-writer-wins); an instant navigation drops them all.
///   Opening a drag mid-flight detaches the dragged item's tween without
///   completing it.
/// - An item being dragged is excluded from driven translation; on release
///   its margin absorbs any page changes that happened mid-drag, and the
///   transition is replayed with the duration forced to zero so only the
///   dragged item settles visibly.
///
/// All state is single-thread-only; mutation happens through `&mut self` on
/// the UI-owning thread.
#[derive(Debug)]
pub struct Pager {
    items: Vec<ItemState>,
    container: Size,
    plan: PagePlan,
    slots: Vec<Rect>,
    dirty: bool,
    current_page: usize,
    flight: Option<Flight>,
    timeline: Timeline<usize>,
    max_z: u32,
    drag: Option<DragSession>,
    swipe: SwipeTracker,

    item_margin: Insets,
    nav_duration: Duration,
    trigger_mode: TriggerMode,
    animated_by_default: bool,
    allow_item_drag: bool,
    rows_per_page: usize,

    navigating_event: Emitter<()>,
    navigated_event: Emitter<()>,
    drag_started_event: Emitter<usize>,
    drag_completed_event: Emitter<usize>,
}

impl Pager {
    /// Creates an empty pager with the default configuration: 5-unit item
    /// margins, 0.75 s navigation duration, 2 rows per page, animated
    /// navigation, no input trigger, free dragging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            container: Size::ZERO,
            plan: PagePlan::default(),
            slots: Vec::new(),
            dirty: true,
            current_page: 0,
            flight: None,
            timeline: Timeline::new(),
            max_z: 0,
            drag: None,
            swipe: SwipeTracker::default(),
            item_margin: Insets::uniform(5.0),
            nav_duration: Duration::from_millis(750),
            trigger_mode: TriggerMode::default(),
            animated_by_default: true,
            allow_item_drag: false,
            rows_per_page: PagePlan::DEFAULT_ROWS_PER_PAGE,
            navigating_event: Emitter::new(),
            navigated_event: Emitter::new(),
            drag_started_event: Emitter::new(),
            drag_completed_event: Emitter::new(),
        }
    }

    // --- items and container ---

    /// Appends an item with the given size and returns its index.
    ///
    /// New items take the current maximum z-order; scene order is z
    /// assignment order until a drag raises an item.
    pub fn push_item(&mut self, size: Size) -> usize {
        self.items.push(ItemState {
            size,
            margin: Insets::ZERO,
            translate_x: 0.0,
            z: self.max_z,
        });
        self.dirty = true;
        self.items.len() - 1
    }

    /// Replaces the size of an existing item. Out-of-range indices are
    /// ignored.
    pub fn set_item_size(&mut self, item: usize, size: Size) {
        if let Some(state) = self.items.get_mut(item) {
            state.size = size;
            self.dirty = true;
        }
    }

    /// Removes every item.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.dirty = true;
    }

    /// Number of items in the panel.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sets the container extent. The plan is recomputed on the next layout
    /// pass.
    pub fn set_container_size(&mut self, size: Size) {
        if self.container != size {
            self.container = size;
            self.dirty = true;
        }
    }

    /// The current container extent.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    // --- configuration ---

    /// Sets the margin added around every item when packing and spacing.
    pub fn set_item_margin(&mut self, margin: Insets) {
        self.item_margin = margin;
        self.dirty = true;
    }

    /// The configured item margin.
    #[must_use]
    pub fn item_margin(&self) -> Insets {
        self.item_margin
    }

    /// Sets the animated navigation duration.
    pub fn set_navigation_duration(&mut self, duration: Duration) {
        self.nav_duration = duration;
    }

    /// The animated navigation duration.
    #[must_use]
    pub fn navigation_duration(&self) -> Duration {
        self.nav_duration
    }

    /// Selects which input channel may drive navigation.
    pub fn set_trigger_mode(&mut self, mode: TriggerMode) {
        self.trigger_mode = mode;
    }

    /// The active trigger mode.
    #[must_use]
    pub fn trigger_mode(&self) -> TriggerMode {
        self.trigger_mode
    }

    /// Sets whether input-triggered navigation animates.
    pub fn set_navigation_animated(&mut self, animated: bool) {
        self.animated_by_default = animated;
    }

    /// Whether input-triggered navigation animates.
    #[must_use]
    pub fn navigation_animated(&self) -> bool {
        self.animated_by_default
    }

    /// Enables or disables free dragging of individual items.
    pub fn set_allow_item_drag(&mut self, allow: bool) {
        self.allow_item_drag = allow;
    }

    /// Whether free item dragging is enabled.
    #[must_use]
    pub fn allow_item_drag(&self) -> bool {
        self.allow_item_drag
    }

    /// Sets the page row capacity. Values below 1 are clamped to 1.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.dirty = true;
    }

    /// The page row capacity.
    #[must_use]
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    // --- events ---

    /// Fired when a navigation transition begins.
    pub fn navigating(&mut self) -> &mut Emitter<()> {
        &mut self.navigating_event
    }

    /// Fired when a navigation transition completes.
    pub fn navigated(&mut self) -> &mut Emitter<()> {
        &mut self.navigated_event
    }

    /// Fired with the item index when a free drag starts.
    pub fn drag_started(&mut self) -> &mut Emitter<usize> {
        &mut self.drag_started_event
    }

    /// Fired with the item index when a free drag ends.
    pub fn drag_completed(&mut self) -> &mut Emitter<usize> {
        &mut self.drag_completed_event
    }

    // --- layout ---

    /// Recomputes the page plan and slot rectangles from the current item
    /// set and container extent.
    ///
    /// The current page index is clamped into the new plan, any drag session
    /// is dropped, in-flight navigation state is discarded, and every item's
    /// translation snaps to the (clamped) current page without firing
    /// navigation events.
    pub fn relayout(&mut self) {
        let sizes: Vec<Size> = self.items.iter().map(|item| item.size).collect();
        self.plan = PagePlan::compute(
            self.container.width,
            self.item_margin,
            &sizes,
            self.rows_per_page,
        );
        self.slots = self.plan.arrange(self.container, self.item_margin, &sizes);
        self.dirty = false;

        self.current_page = self.current_page.min(self.plan.last_page_index());
        self.drag = None;
        self.flight = None;
        self.timeline.clear();

        let tx = -(self.current_page as f64) * self.container.width;
        for item in &mut self.items {
            item.translate_x = tx;
        }
    }

    fn ensure_layout(&mut self) {
        if self.dirty {
            self.relayout();
        }
    }

    /// The current page plan. Stale if items or the container changed since
    /// the last layout pass.
    #[must_use]
    pub fn plan(&self) -> &PagePlan {
        &self.plan
    }

    /// Number of pages in the current plan.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.plan.page_count()
    }

    /// The active page index.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns `true` while a navigation transition is in flight.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.flight.is_some()
    }

    /// The item currently being dragged, if any.
    #[must_use]
    pub fn dragging_item(&self) -> Option<usize> {
        self.drag.map(|session| session.item)
    }

    /// The on-screen rectangle for an item: its arranged slot shifted by its
    /// margin offset and current navigation translation.
    #[must_use]
    pub fn item_rect(&self, item: usize) -> Option<Rect> {
        let state = self.items.get(item)?;
        let slot = self.slots.get(item)?;
        Some(*slot + Vec2::new(state.margin.x0 + state.translate_x, state.margin.y0))
    }

    /// An item's current horizontal navigation translation.
    #[must_use]
    pub fn item_translation_x(&self, item: usize) -> Option<f64> {
        self.items.get(item).map(|state| state.translate_x)
    }

    /// An item's current z-order.
    #[must_use]
    pub fn item_z(&self, item: usize) -> Option<u32> {
        self.items.get(item).map(|state| state.z)
    }

    /// An item's current margin offset.
    #[must_use]
    pub fn item_margin_offset(&self, item: usize) -> Option<Insets> {
        self.items.get(item).map(|state| state.margin)
    }

    // --- navigation ---

    /// Navigates to `index`, clamped into the current plan.
    ///
    /// Fires the navigation-starting event, then drives every item that is
    /// not mid-drag toward `−index × container width`. When `animated`, each
    /// item gets a back ease-out tween delayed by the cascade stagger and
    /// completion fires once all of them finish; otherwise translations are
    /// set immediately and completion fires synchronously.
    pub fn navigate_to_page(&mut self, index: usize, animated: bool) {
        self.ensure_layout();
        let index = index.min(self.plan.last_page_index());
        self.navigating_event.emit(&());

        let target = -(index as f64) * self.container.width;
        let stagger = self.nav_duration.mul_f64(STAGGER_FRACTION);
        let mut delay = Duration::ZERO;
        let mut driven = 0_usize;
        let dragging = self.drag.map(|session| session.item);

        for item in 0..self.items.len() {
            if dragging == Some(item) {
                continue;
            }
            if animated {
                self.timeline.begin(
                    item,
                    Tween {
                        from: self.items[item].translate_x,
                        to: target,
                        delay,
                        duration: self.nav_duration,
                        easing: Easing::NAV,
                    },
                );
                delay += stagger;
                driven += 1;
            } else {
                self.items[item].translate_x = target;
            }
        }

        self.current_page = index;
        if animated {
            self.flight = Some(Flight {
                target_tx: target,
                remaining: driven,
            });
        } else {
            // Tweens from a superseded transition must not resurface the
            // translations just written.
            self.timeline.clear();
            self.flight = None;
            self.navigated_event.emit(&());
        }
    }

    /// Navigates one page forward with the default animation setting.
    ///
    /// A no-op (no events) when already on the last page.
    pub fn navigate_to_next(&mut self) {
        self.ensure_layout();
        if self.current_page < self.plan.last_page_index() {
            self.navigate_to_page(self.current_page + 1, self.animated_by_default);
        }
    }

    /// Navigates one page back with the default animation setting.
    ///
    /// A no-op (no events) when already on the first page.
    pub fn navigate_to_previous(&mut self) {
        self.ensure_layout();
        if self.current_page > 0 {
            self.navigate_to_page(self.current_page - 1, self.animated_by_default);
        }
    }

    /// Moves the animation clock to `now`, sampling in-flight translations
    /// and firing the navigation-completed event when the last driven item
    /// settles.
    pub fn advance(&mut self, now: Duration) {
        self.ensure_layout();
        let finished = self.timeline.advance(now);
        for item in 0..self.items.len() {
            if let Some(value) = self.timeline.value(&item) {
                self.items[item].translate_x = value;
            }
        }
        if let Some(flight) = &mut self.flight {
            for &item in &finished {
                if let Some(state) = self.items.get_mut(item) {
                    state.translate_x = flight.target_tx;
                }
                flight.remaining = flight.remaining.saturating_sub(1);
            }
            if flight.remaining == 0 {
                self.flight = None;
                self.navigated_event.emit(&());
            }
        }
    }

    // --- panel-level input (container coordinates) ---

    /// Handles a pointer press on the panel background.
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton) {
        self.ensure_layout();
        match self.trigger_mode {
            TriggerMode::MouseClick => match button {
                PointerButton::Left => self.navigate_to_previous(),
                PointerButton::Right => self.navigate_to_next(),
            },
            TriggerMode::MouseDrag => self.swipe.press(pos),
            TriggerMode::None | TriggerMode::ArrowKeys => {}
        }
    }

    /// Handles a pointer move over the panel while `primary_pressed` reports
    /// the primary button state. Swipe tracking records displacement only;
    /// no element moves.
    pub fn pointer_move(&mut self, pos: Point, primary_pressed: bool) {
        if self.trigger_mode == TriggerMode::MouseDrag && primary_pressed {
            self.swipe.update(pos);
        }
    }

    /// Handles a pointer release on the panel, committing a swipe navigation
    /// when the tracked displacement exceeds one twentieth of the container
    /// width.
    pub fn pointer_up(&mut self, _pos: Point) {
        self.ensure_layout();
        if self.trigger_mode != TriggerMode::MouseDrag {
            return;
        }
        let threshold = self.container.width * SWIPE_THRESHOLD_FRACTION;
        match self.swipe.release(threshold) {
            Some(SwipeDirection::Next) => self.navigate_to_next(),
            Some(SwipeDirection::Previous) => self.navigate_to_previous(),
            None => {}
        }
    }

    /// Handles an arrow key press.
    pub fn key_down(&mut self, key: ArrowKey) {
        self.ensure_layout();
        if self.trigger_mode != TriggerMode::ArrowKeys {
            return;
        }
        match key {
            ArrowKey::Left => self.navigate_to_previous(),
            ArrowKey::Right => self.navigate_to_next(),
        }
    }

    // --- per-item input (container coordinates) ---

    /// Handles a pointer press on an item.
    ///
    /// When free dragging is enabled this raises the item above the current
    /// z maximum, opens a drag session, and fires the drag-started event.
    pub fn item_pointer_down(&mut self, item: usize, pos: Point) {
        self.ensure_layout();
        if !self.allow_item_drag || item >= self.items.len() {
            return;
        }
        self.max_z += 1;
        self.items[item].z = self.max_z;
        self.drag = Some(DragSession {
            item,
            origin_margin: self.items[item].margin,
            origin_page: self.current_page,
            origin_pointer: pos,
        });
        // A tween from the current transition no longer drives this item;
        // the in-flight count follows it out.
        if self.timeline.cancel(&item) {
            if let Some(flight) = &mut self.flight {
                flight.remaining = flight.remaining.saturating_sub(1);
            }
            if self.flight.is_some_and(|flight| flight.remaining == 0) {
                self.flight = None;
                self.navigated_event.emit(&());
            }
        }
        self.drag_started_event.emit(&item);
    }

    /// Handles a pointer move on an item while dragging.
    ///
    /// The item's margin follows the pointer displacement since press.
    /// Hovering within 50 units of the container's left or right edge flips
    /// to the previous or next page, provided no navigation is in flight.
    pub fn item_pointer_move(&mut self, item: usize, pos: Point, primary_pressed: bool) {
        if !self.allow_item_drag || !primary_pressed {
            return;
        }
        let Some(session) = self.drag else {
            return;
        };
        if session.item != item {
            return;
        }
        self.items[item].margin = session.margin_for(pos);

        if self.flight.is_none() {
            match edge_zone(pos.x, self.container.width) {
                Some(EdgeZone::Left) => self.navigate_to_previous(),
                Some(EdgeZone::Right) => self.navigate_to_next(),
                None => {}
            }
        }
    }

    /// Handles a pointer release on an item, ending its drag session.
    ///
    /// The margin absorbs any page changes that happened mid-drag, so the
    /// item lands where the pointer left it relative to the new page. The
    /// navigation to the current page is then replayed with the duration
    /// forced to zero, letting every other item snap while the dragged item
    /// keeps its dropped position.
    pub fn item_pointer_up(&mut self, item: usize) {
        let Some(session) = self.drag else {
            return;
        };
        if session.item != item {
            return;
        }
        let compensation = session.release_compensation(self.current_page, self.container.width);
        if let Some(state) = self.items.get_mut(item) {
            state.margin.x0 += compensation;
        }
        self.drag = None;
        self.drag_completed_event.emit(&item);

        let configured = self.nav_duration;
        self.nav_duration = Duration::ZERO;
        self.navigate_to_page(self.current_page, true);
        self.nav_duration = configured;
    }

    /// Snapshot of the pager state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PagerDebugInfo {
        PagerDebugInfo {
            items: self.items.len(),
            container: self.container,
            page_count: self.plan.page_count(),
            current_page: self.current_page,
            navigating: self.flight.is_some(),
            dragging_item: self.drag.map(|session| session.item),
            trigger_mode: self.trigger_mode,
            dirty: self.dirty,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`Pager`].
#[derive(Clone, Copy, Debug)]
pub struct PagerDebugInfo {
    /// Number of items.
    pub items: usize,
    /// Container extent.
    pub container: Size,
    /// Pages in the current plan.
    pub page_count: usize,
    /// Active page index.
    pub current_page: usize,
    /// Whether a navigation transition is in flight.
    pub navigating: bool,
    /// Item currently being dragged, if any.
    pub dragging_item: Option<usize>,
    /// Active input trigger mode.
    pub trigger_mode: TriggerMode,
    /// Whether the plan is stale.
    pub dirty: bool,
}
