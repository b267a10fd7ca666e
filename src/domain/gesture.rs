// SPDX-License-Identifier: MPL-2.0
//! Press / hold / drag disambiguation for a single switch control.
//!
//! The recognizer is a pure state machine. It never owns a timer: a press
//! hands back a [`HoldTicket`], the caller schedules whatever deferred
//! callback it likes, and reports the ticket back through
//! [`GestureRecognizer::hold_elapsed`]. Tickets from finished or cancelled
//! interactions no longer match and are ignored.
//!
//! Outcomes of one interaction are mutually exclusive:
//!
//! - short press without movement: [`Intent::Tap`]
//! - short press with movement: nothing
//! - hold, then horizontal drag: [`Intent::IntensityDragStart`], a stream of
//!   [`Intent::IntensityDragUpdate`], then [`Intent::IntensityDragEnd`]
//! - hold, then release in place: [`Intent::IntensityDragStart`] followed by
//!   [`Intent::LongPressOpenDetail`]

use super::newtypes::{Intensity, LongPressDelay, MoveThreshold};
use std::time::Instant;

/// Thresholds driving the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureConfig {
    pub long_press: LongPressDelay,
    pub move_threshold: MoveThreshold,
}

/// Token identifying one armed hold timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoldTicket(u64);

/// What an interaction means for the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Tap,
    IntensityDragStart,
    IntensityDragUpdate(Intensity),
    IntensityDragEnd(Intensity),
    LongPressOpenDetail,
}

/// Coarse phase, exposed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Pressing,
    AdjustingIntensity,
}

#[derive(Debug, Clone, Copy, Default)]
enum Phase {
    #[default]
    Idle,
    Pressing {
        start_x: f32,
        last_x: f32,
        started_at: Instant,
        /// Set once the pointer strayed beyond the threshold. Never reset.
        moved: bool,
        base: Intensity,
        ticket: HoldTicket,
    },
    Adjusting {
        start_x: f32,
        /// Pointer position when the hold fired.
        anchor_x: f32,
        base: Intensity,
        value: Intensity,
        dragged: bool,
    },
}

/// Gesture state machine for one switch control.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    phase: Phase,
    issued: u64,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Replaces the thresholds. Takes effect from the next press.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Pressing { .. } => GesturePhase::Pressing,
            Phase::Adjusting { .. } => GesturePhase::AdjustingIntensity,
        }
    }

    /// Live intensity while adjusting.
    #[must_use]
    pub fn preview(&self) -> Option<Intensity> {
        match self.phase {
            Phase::Adjusting { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Starts an interaction. `base` is the switch intensity drags are
    /// measured from.
    ///
    /// Returns the ticket for the hold timer, or `None` when an interaction
    /// is already in progress (the press is ignored).
    pub fn press(&mut self, x: f32, at: Instant, base: Intensity) -> Option<HoldTicket> {
        if !matches!(self.phase, Phase::Idle) || !x.is_finite() {
            tracing::trace!(x, "press ignored");
            return None;
        }

        self.issued = self.issued.wrapping_add(1);
        let ticket = HoldTicket(self.issued);
        self.phase = Phase::Pressing {
            start_x: x,
            last_x: x,
            started_at: at,
            moved: false,
            base,
            ticket,
        };
        tracing::trace!(x, ?ticket, "pressing");
        Some(ticket)
    }

    /// Reports that the hold timer for `ticket` elapsed.
    pub fn hold_elapsed(&mut self, ticket: HoldTicket) -> Option<Intent> {
        match self.phase {
            Phase::Pressing {
                start_x,
                last_x,
                base,
                ticket: armed,
                ..
            } if armed == ticket => {
                self.enter_adjusting(start_x, last_x, base);
                Some(Intent::IntensityDragStart)
            }
            _ => {
                tracing::trace!(?ticket, "stale hold ticket");
                None
            }
        }
    }

    /// Feeds a pointer movement. `width` is the control width in the same
    /// unit as `x`.
    pub fn moved(&mut self, x: f32, width: f32) -> Option<Intent> {
        if !x.is_finite() || !width.is_finite() || width <= 0.0 {
            tracing::trace!(x, width, "move ignored");
            return None;
        }

        let threshold = self.config.move_threshold;
        match &mut self.phase {
            Phase::Idle => None,
            Phase::Pressing {
                start_x,
                last_x,
                moved,
                ..
            } => {
                *last_x = x;
                if !*moved && threshold.is_exceeded_by(x - *start_x) {
                    *moved = true;
                    tracing::trace!("tap disqualified by movement");
                }
                None
            }
            Phase::Adjusting {
                start_x,
                anchor_x,
                base,
                value,
                dragged,
            } => {
                if !*dragged {
                    if !threshold.is_exceeded_by(x - *anchor_x) {
                        return None;
                    }
                    *dragged = true;
                }
                let dx = x - *start_x;
                let delta = (dx / width * 100.0).round();
                // Saturating float-to-int cast; Intensity clamps anyway
                #[allow(clippy::cast_possible_truncation)]
                let next = base.offset(delta as i64);
                *value = next;
                Some(Intent::IntensityDragUpdate(next))
            }
        }
    }

    /// Ends the interaction.
    ///
    /// A release stamped at or after the hold delay counts as a hold even if
    /// the timer callback has not been delivered yet.
    pub fn release(&mut self, at: Instant) -> Option<Intent> {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => {
                tracing::trace!("release without press ignored");
                None
            }
            Phase::Pressing {
                start_x,
                last_x,
                started_at,
                moved,
                base,
                ..
            } => {
                let held = at.saturating_duration_since(started_at);
                if held >= self.config.long_press.as_duration() {
                    self.enter_adjusting(start_x, last_x, base);
                    return self.release(at);
                }
                if moved {
                    None
                } else {
                    Some(Intent::Tap)
                }
            }
            Phase::Adjusting { value, dragged, .. } => {
                if dragged {
                    Some(Intent::IntensityDragEnd(value))
                } else {
                    Some(Intent::LongPressOpenDetail)
                }
            }
        }
    }

    /// Abandons the interaction without an intent.
    ///
    /// Returns true when something was in progress.
    pub fn cancel(&mut self) -> bool {
        let active = !matches!(self.phase, Phase::Idle);
        if active {
            tracing::trace!("gesture cancelled");
        }
        self.phase = Phase::Idle;
        active
    }

    fn enter_adjusting(&mut self, start_x: f32, anchor_x: f32, base: Intensity) {
        tracing::trace!(%base, "adjusting intensity");
        self.phase = Phase::Adjusting {
            start_x,
            anchor_x,
            base,
            value: base,
            dragged: false,
        };
    }
}
