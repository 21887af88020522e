//! Knob engine: the orchestrating core.
//!
//! [`KnobEngine`] owns the range model and every derived piece of state.
//! All mutations enter as [`KnobCommand`]s through [`KnobEngine::submit`],
//! are applied one at a time in arrival order, and fan out semantic
//! events to the registered observers.
//!
//! ```text
//!  setters ─┐                      ┌──────────────────────────┐
//!  pointer ─┼─▶ PendingQueue ────▶ │        KnobEngine        │ ──▶ Subscribers
//!  Mailbox ─┘        ▲             │ Range · Proximity · Angle│        │
//!                    │             └──────────────────────────┘        │
//!                    └──────────────────── Mailbox ◀───────────────────┘
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::{KnobConfig, MAX_DECIMALS, ProximityProfile};
use crate::control::angle::{AngleMapping, BAR_START_ANGLE, pointer_theta};
use crate::control::proximity::{Proximity, evaluate};
use crate::control::range::{RangeModel, Reclamp};
use crate::error::{Error, Result};
use crate::gradient::{self, GradientStop, ReorderOptions};

use super::commands::KnobCommand;
use super::events::{EventSource, KnobEvent, KnobEventKind, KnobId};
use super::gesture::{GestureTracker, SampleOutcome};
use super::lifecycle::Lifecycle;
use super::ports::{KnobObserver, Mailbox, SubscriptionId, Subscribers};
use super::queue::PendingQueue;
use super::view::{KnobView, format_value, printf_pattern};

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    extrema_visible: bool,
    target_value_always_visible: bool,
    tag_visible: bool,
    selected: bool,
    disabled: bool,
    drag_disabled: bool,
}

// ───────────────────────────────────────────────────────────────
// KnobEngine
// ───────────────────────────────────────────────────────────────

/// One knob's value/state engine.
#[derive(Debug)]
pub struct KnobEngine {
    source: EventSource,
    range: RangeModel,
    mapping: AngleMapping,
    decimals: u8,
    proximity: ProximityProfile,
    /// Stops as supplied, in logical `0..1` space.
    gradient_stops: Vec<GradientStop>,
    fallback_stops: Vec<GradientStop>,
    reorder: ReorderOptions,
    /// Derived from the three fields above.
    reordered: Vec<GradientStop>,
    unit: String,
    flags: Flags,
    gesture: GestureTracker,
    lifecycle: Lifecycle,
    pending: PendingQueue,
    subscribers: Subscribers,
    mailbox: Mailbox,
}

impl Default for KnobEngine {
    fn default() -> Self {
        Self::new(KnobConfig::default())
    }
}

impl KnobEngine {
    /// Build an engine from `config`.
    ///
    /// Starts `Ready` unless `config.deferred_init` is set.  Config values
    /// are applied immediately in either case; only later mutations are
    /// queued while initializing.
    pub fn new(config: KnobConfig) -> Self {
        let lifecycle = if config.deferred_init.unwrap_or(false) {
            Lifecycle::Initializing
        } else {
            Lifecycle::Ready
        };
        let source = EventSource {
            id: KnobId::next(),
            label: config.label.as_deref().map(Arc::from),
        };
        let range = RangeModel::new();
        let mut engine = Self {
            source,
            mapping: AngleMapping::new(range.min(), range.max()),
            range,
            decimals: config.decimals(),
            proximity: ProximityProfile::default(),
            gradient_stops: gradient::DEFAULT_STOPS.to_vec(),
            fallback_stops: gradient::DEFAULT_STOPS.to_vec(),
            reorder: ReorderOptions::default(),
            reordered: Vec::new(),
            unit: String::new(),
            flags: Flags::default(),
            gesture: GestureTracker::new(),
            lifecycle,
            pending: PendingQueue::new(),
            subscribers: Subscribers::new(),
            mailbox: Mailbox::new(),
        };
        engine.apply_config(config);
        info!(
            "{} | created in {:?}, range=[{}, {}]",
            engine.source,
            engine.lifecycle,
            engine.range.min(),
            engine.range.max()
        );
        engine
    }

    /// Build an engine that queues mutations until [`mark_ready`](Self::mark_ready).
    pub fn deferred(mut config: KnobConfig) -> Self {
        config.deferred_init = Some(true);
        Self::new(config)
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Leave `Initializing` and replay every queued command in order.
    /// Returns how many commands were applied.
    pub fn mark_ready(&mut self) -> usize {
        debug_assert!(!self.lifecycle.is_ready(), "mark_ready called twice");
        if self.lifecycle.is_ready() {
            warn!("{} | mark_ready on a ready engine ignored", self.source);
            return 0;
        }
        self.lifecycle = Lifecycle::Ready;
        let queued = self.pending.len();
        let applied = self.drain();
        info!(
            "{} | ready, {} queued commands replayed ({} applied)",
            self.source, queued, applied
        );
        applied
    }

    /// Commands waiting for the engine to become ready.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    // ── Subscriptions ─────────────────────────────────────────

    /// Receive every event.
    pub fn subscribe(&mut self, observer: impl KnobObserver + 'static) -> SubscriptionId {
        self.subscribers.add(None, Box::new(observer))
    }

    /// Receive events of one kind only.
    pub fn subscribe_kind(
        &mut self,
        kind: KnobEventKind,
        observer: impl KnobObserver + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(Some(kind), Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ── Command entry point ───────────────────────────────────

    /// Apply `command` (or queue it while initializing).
    pub fn submit(&mut self, command: KnobCommand) {
        self.pending.push(command);
        if !self.lifecycle.is_ready() {
            debug!(
                "{} | initializing, command queued ({} pending)",
                self.source,
                self.pending.len()
            );
            return;
        }
        self.drain();
    }

    pub fn set_min(&mut self, value: f64) {
        self.submit(KnobCommand::SetMin(value));
    }

    pub fn set_max(&mut self, value: f64) {
        self.submit(KnobCommand::SetMax(value));
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.submit(KnobCommand::SetRange { min, max });
    }

    pub fn set_current(&mut self, value: f64) {
        self.submit(KnobCommand::SetCurrent(value));
    }

    pub fn set_target(&mut self, value: f64) {
        self.submit(KnobCommand::SetTarget(value));
    }

    pub fn set_decimals(&mut self, decimals: u8) {
        self.submit(KnobCommand::SetDecimals(decimals));
    }

    pub fn set_proximity(&mut self, profile: ProximityProfile) {
        self.submit(KnobCommand::SetProximity(profile));
    }

    /// Shorthand for `set_proximity(ProximityProfile::Custom(factor))`.
    pub fn set_proximity_factor(&mut self, factor: f64) {
        self.set_proximity(ProximityProfile::Custom(factor));
    }

    pub fn set_gradient_stops(&mut self, stops: Vec<GradientStop>) {
        self.submit(KnobCommand::SetGradientStops(stops));
    }

    pub fn set_fallback_stops(&mut self, stops: Vec<GradientStop>) {
        self.submit(KnobCommand::SetFallbackStops(stops));
    }

    pub fn set_sort_reordered_stops(&mut self, sort: bool) {
        self.submit(KnobCommand::SetSortReorderedStops(sort));
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.submit(KnobCommand::SetUnit(unit.into()));
    }

    pub fn set_extrema_visible(&mut self, visible: bool) {
        self.submit(KnobCommand::SetExtremaVisible(visible));
    }

    pub fn set_target_value_always_visible(&mut self, visible: bool) {
        self.submit(KnobCommand::SetTargetValueAlwaysVisible(visible));
    }

    pub fn set_tag_visible(&mut self, visible: bool) {
        self.submit(KnobCommand::SetTagVisible(visible));
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.submit(KnobCommand::SetSelected(selected));
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.submit(KnobCommand::SetDisabled(disabled));
    }

    pub fn set_drag_disabled(&mut self, disabled: bool) {
        self.submit(KnobCommand::SetDragDisabled(disabled));
    }

    /// Pointer sample as a raw angle in degrees.
    pub fn on_pointer_angle(&mut self, theta: f64) {
        self.submit(KnobCommand::PointerAngle(theta));
    }

    /// Pointer sample as an offset from the knob centre (y down).
    pub fn on_pointer_position(&mut self, dx: f64, dy: f64) {
        self.submit(KnobCommand::PointerPosition { dx, dy });
    }

    /// Pointer released: commits the dragged target.
    pub fn on_gesture_end(&mut self) {
        self.submit(KnobCommand::GestureEnd);
    }

    /// Parse `text` as the new target and commit it.
    ///
    /// Leading/trailing whitespace is ignored.  Infinities clamp to the
    /// range like any other value; text that is not a number (or is NaN)
    /// leaves the knob untouched.
    pub fn submit_target_text(&mut self, text: &str) -> Result<()> {
        let value = match text.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => {
                warn!("{} | rejected target text {:?}", self.source, text);
                return Err(Error::InvalidNumber);
            }
        };
        self.submit(KnobCommand::CommitTarget(value));
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn id(&self) -> KnobId {
        self.source.id
    }

    pub fn source(&self) -> &EventSource {
        &self.source
    }

    pub fn min(&self) -> f64 {
        self.range.min()
    }

    pub fn max(&self) -> f64 {
        self.range.max()
    }

    pub fn current(&self) -> f64 {
        self.range.current()
    }

    pub fn target(&self) -> f64 {
        self.range.target()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn proximity(&self) -> ProximityProfile {
        self.proximity
    }

    /// Fresh proximity evaluation of the present state.
    pub fn evaluate(&self) -> Proximity {
        let s = self.range.snapshot();
        evaluate(s.current, s.target, s.min, s.max, self.proximity.factor())
    }

    pub fn is_adjusted(&self) -> bool {
        self.evaluate().is_adjusted
    }

    pub fn angle_step(&self) -> f64 {
        self.mapping.angle_step()
    }

    /// Rotation of the target indicator.
    pub fn indicator_angle(&self) -> f64 {
        self.mapping.indicator_angle(self.range.target())
    }

    /// Sweep of the current-value bar.
    pub fn bar_length(&self) -> f64 {
        self.mapping.arc_length(self.range.current())
    }

    pub fn gradient_stops(&self) -> &[GradientStop] {
        &self.gradient_stops
    }

    pub fn reordered_stops(&self) -> &[GradientStop] {
        &self.reordered
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_disabled(&self) -> bool {
        self.flags.disabled
    }

    pub fn is_drag_disabled(&self) -> bool {
        self.flags.drag_disabled
    }

    pub fn is_selected(&self) -> bool {
        self.flags.selected
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> KnobView {
        let s = self.range.snapshot();
        let adjusted = self.is_adjusted();
        KnobView {
            source: self.source.clone(),
            current_text: format_value(s.current, self.decimals),
            target_text: format_value(s.target, self.decimals),
            min_text: format_value(s.min, self.decimals),
            max_text: format_value(s.max, self.decimals),
            unit: self.unit.clone(),
            format_pattern: printf_pattern(self.decimals),
            indicator_angle: self.mapping.indicator_angle(s.target),
            bar_start_angle: BAR_START_ANGLE,
            bar_length: self.mapping.arc_length(s.current),
            stops: self.reordered.clone(),
            adjusted,
            target_text_visible: self.flags.target_value_always_visible || !adjusted,
            extrema_visible: self.flags.extrema_visible,
            tag_visible: self.flags.tag_visible,
            selected: self.flags.selected,
            disabled: self.flags.disabled,
            interactive: !self.pointer_gated(),
        }
    }

    // ── Internal: processing ──────────────────────────────────

    /// Apply queued commands until the queue is empty, including any that
    /// observers post along the way.
    fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.pending.pop() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, command: KnobCommand) {
        match command {
            KnobCommand::SetMin(v) => {
                let moved = self.range.set_min(v);
                self.bounds_changed(moved);
            }
            KnobCommand::SetMax(v) => {
                let moved = self.range.set_max(v);
                self.bounds_changed(moved);
            }
            KnobCommand::SetRange { min, max } => {
                let moved = self.range.set_range(min, max);
                self.bounds_changed(moved);
            }
            KnobCommand::SetCurrent(v) => {
                let stored = self.range.set_current(v);
                debug!("{} | current={}", self.source, stored);
                self.emit_proximity();
            }
            KnobCommand::SetTarget(v) => {
                let stored = self.range.set_target(v);
                debug!("{} | target={}", self.source, stored);
                self.emit_proximity();
            }
            KnobCommand::CommitTarget(v) => {
                let stored = self.range.set_target(v);
                debug!("{} | target={} (committed)", self.source, stored);
                self.emit_proximity();
                self.emit_target_set();
            }
            KnobCommand::SetDecimals(d) => {
                self.decimals = d.min(MAX_DECIMALS);
                debug!("{} | decimals={}", self.source, self.decimals);
            }
            KnobCommand::SetProximity(profile) => {
                self.proximity = profile;
                debug!("{} | proximity={:?}", self.source, profile);
            }
            KnobCommand::SetGradientStops(stops) => {
                self.gradient_stops = stops;
                self.refresh_stops();
            }
            KnobCommand::SetFallbackStops(stops) => {
                self.fallback_stops = stops;
                self.refresh_stops();
            }
            KnobCommand::SetSortReorderedStops(sort) => {
                self.reorder.sort_output = sort;
                self.refresh_stops();
            }
            KnobCommand::SetUnit(unit) => self.unit = unit,
            KnobCommand::SetExtremaVisible(b) => self.flags.extrema_visible = b,
            KnobCommand::SetTargetValueAlwaysVisible(b) => {
                self.flags.target_value_always_visible = b;
            }
            KnobCommand::SetTagVisible(b) => self.flags.tag_visible = b,
            KnobCommand::SetSelected(b) => self.flags.selected = b,
            KnobCommand::SetDisabled(b) => {
                self.flags.disabled = b;
                self.gating_changed();
            }
            KnobCommand::SetDragDisabled(b) => {
                self.flags.drag_disabled = b;
                self.gating_changed();
            }
            KnobCommand::PointerAngle(theta) => self.pointer_sample(Some(theta)),
            KnobCommand::PointerPosition { dx, dy } => self.pointer_sample(pointer_theta(dx, dy)),
            KnobCommand::GestureEnd => self.gesture_end(),
        }
    }

    /// A bound moved: rebuild the mapping, then emit for every dependent
    /// value the cascade pushed back into range (current first).
    fn bounds_changed(&mut self, moved: Reclamp) {
        self.mapping = AngleMapping::new(self.range.min(), self.range.max());
        debug!(
            "{} | range=[{}, {}]",
            self.source,
            self.range.min(),
            self.range.max()
        );
        if moved.current.is_some() {
            self.emit_proximity();
        }
        if moved.target.is_some() {
            self.emit_proximity();
        }
    }

    fn refresh_stops(&mut self) {
        self.reordered =
            gradient::reorder_with(&self.gradient_stops, &self.fallback_stops, self.reorder);
        debug!(
            "{} | {} gradient stops reordered",
            self.source,
            self.reordered.len()
        );
    }

    // ── Internal: pointer ─────────────────────────────────────

    fn pointer_gated(&self) -> bool {
        self.flags.disabled || self.flags.drag_disabled
    }

    fn gating_changed(&mut self) {
        if self.pointer_gated() && self.gesture.is_dragging() {
            warn!("{} | gesture voided, knob no longer interactive", self.source);
            self.gesture.cancel();
        }
    }

    fn pointer_sample(&mut self, theta: Option<f64>) {
        let outcome = self.gesture.sample(self.pointer_gated());
        if !outcome.accepted() {
            if outcome == (SampleOutcome::Blocked { first: true }) {
                warn!(
                    "{} | pointer input ignored (disabled={}, drag_disabled={})",
                    self.source, self.flags.disabled, self.flags.drag_disabled
                );
            }
            return;
        }
        if outcome == SampleOutcome::Started {
            debug!("{} | gesture started", self.source);
        }

        let Some(theta) = theta.filter(|t| t.is_finite()) else {
            warn!("{} | pointer sample without a usable angle ignored", self.source);
            return;
        };
        let stored = self.range.set_target(self.mapping.value_for_theta(theta));
        debug!("{} | theta={:.1} target={}", self.source, theta, stored);
        self.emit_proximity();
    }

    fn gesture_end(&mut self) {
        match self.gesture.release() {
            Some(samples) => {
                debug!("{} | gesture committed after {} samples", self.source, samples);
                self.emit_target_set();
            }
            None => debug!("{} | release without a live gesture", self.source),
        }
    }

    // ── Internal: events ──────────────────────────────────────

    fn emit_proximity(&mut self) {
        let source = self.source.clone();
        let current = self.range.current();
        let event = if self.is_adjusted() {
            KnobEvent::Adjusted { source, current }
        } else {
            KnobEvent::Adjusting { source, current }
        };
        self.emit(&event);
    }

    fn emit_target_set(&mut self) {
        let event = KnobEvent::TargetSet {
            source: self.source.clone(),
            target: self.range.target(),
        };
        self.emit(&event);
    }

    /// Fan out to observers, then collect what they posted.
    fn emit(&mut self, event: &KnobEvent) {
        self.subscribers.dispatch(event, &mut self.mailbox);
        self.pending.extend(self.mailbox.take_commands());
        for id in self.mailbox.take_cancelled() {
            self.subscribers.remove(id);
        }
    }

    // ── Internal: configuration ───────────────────────────────

    /// Apply in order: range, decimals/profile, current, target, stops, flags.
    fn apply_config(&mut self, config: KnobConfig) {
        match (config.min, config.max) {
            (Some(min), Some(max)) => {
                self.range.set_range(min, max);
            }
            (Some(min), None) => {
                self.range.set_min(min);
            }
            (None, Some(max)) => {
                self.range.set_max(max);
            }
            (None, None) => {}
        }
        self.mapping = AngleMapping::new(self.range.min(), self.range.max());

        self.decimals = config.decimals();
        self.proximity = config.proximity.unwrap_or_default();

        if let Some(current) = config.current {
            self.range.set_current(current);
        }
        if let Some(target) = config.target {
            self.range.set_target(target);
        }

        if let Some(stops) = config.gradient_stops {
            self.gradient_stops = stops;
        }
        if let Some(stops) = config.fallback_stops {
            self.fallback_stops = stops;
        }
        self.reorder.sort_output = config.sort_reordered_stops.unwrap_or(false);
        self.refresh_stops();

        if let Some(unit) = config.unit {
            self.unit = unit;
        }
        let d = Flags::default();
        self.flags = Flags {
            extrema_visible: config.extrema_visible.unwrap_or(d.extrema_visible),
            target_value_always_visible: config
                .target_value_always_visible
                .unwrap_or(d.target_value_always_visible),
            tag_visible: config.tag_visible.unwrap_or(d.tag_visible),
            selected: config.selected.unwrap_or(d.selected),
            disabled: config.disabled.unwrap_or(d.disabled),
            drag_disabled: config.drag_disabled.unwrap_or(d.drag_disabled),
        };
    }
}
