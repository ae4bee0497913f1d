// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta normalization.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::input::{DeltaMode, Modifiers, WheelEvent};

/// Scale of the high-resolution dialect: one notch reports 120.
pub const BASE_DELTA_MULTIPLIER: f64 = 1.0 / 120.0;

/// Scale applied to pixel-mode standard deltas.
pub const PIXEL_DELTA_MULTIPLIER: f64 = 1.0 / 30.0;

/// Normalized wheel motion, in wheel units, per axis.
///
/// Positive values scroll towards the end of the content. `None` means the
/// event carried nothing for that axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Horizontal motion.
    pub x: Option<f64>,
    /// Vertical motion.
    pub y: Option<f64>,
}

/// Normalizes a wheel event into per-axis wheel units.
///
/// Returns `None` when ctrl is held: that wheel is a zoom gesture and must not
/// scroll.
///
/// - High-resolution deltas are negated and divided by 120. Results whose
///   magnitude is below `1 / wheel_step` snap to `±1 / wheel_step` so that a
///   fine trackpad still moves at least one unit per event.
/// - Standard deltas are scaled by `1/30` in pixel mode (by 1 otherwise) and
///   clamped into `[-1, 1]`.
#[must_use]
pub fn normalize_wheel(event: &WheelEvent, wheel_step: f64) -> Option<WheelDelta> {
    if event.modifiers.contains(Modifiers::CTRL) {
        return None;
    }
    let min_step = 1.0 / wheel_step;
    Some(WheelDelta {
        x: normalize_axis(event.wheel_delta_x, event.delta_x, event.delta_mode, min_step),
        y: normalize_axis(event.wheel_delta_y, event.delta_y, event.delta_mode, min_step),
    })
}

fn normalize_axis(
    wheel_delta: Option<f64>,
    delta: Option<f64>,
    mode: Option<DeltaMode>,
    min_step: f64,
) -> Option<f64> {
    if let Some(wheel_delta) = wheel_delta.filter(|v| *v != 0.0) {
        let scaled = -wheel_delta * BASE_DELTA_MULTIPLIER;
        if -min_step < scaled && scaled < min_step {
            Some(scaled.signum() * min_step)
        } else {
            Some(scaled)
        }
    } else if let Some(delta) = delta.filter(|v| *v != 0.0) {
        let factor = if mode == Some(DeltaMode::Pixel) {
            PIXEL_DELTA_MULTIPLIER
        } else {
            1.0
        };
        Some((delta * factor).clamp(-1.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn high_resolution_notches() {
        let delta = normalize_wheel(&WheelEvent::wheel_delta(0.0, -240.0), 50.0).unwrap();
        assert_eq!(delta.x, None);
        assert_eq!(delta.y, Some(2.0));

        let delta = normalize_wheel(&WheelEvent::wheel_delta(120.0, 0.0), 50.0).unwrap();
        assert_eq!(delta.x, Some(-1.0));
        assert_eq!(delta.y, None);
    }

    #[test]
    fn tiny_high_resolution_deltas_snap_to_min_step() {
        // -1/120 is below 1/50 in magnitude.
        let delta = normalize_wheel(&WheelEvent::wheel_delta(0.0, -1.0), 50.0).unwrap();
        assert!(approx(delta.y.unwrap(), 0.02));

        let delta = normalize_wheel(&WheelEvent::wheel_delta(0.0, 1.0), 50.0).unwrap();
        assert!(approx(delta.y.unwrap(), -0.02));
    }

    #[test]
    fn standard_deltas_are_clamped() {
        let delta = normalize_wheel(&WheelEvent::delta(0.0, 1.0, DeltaMode::Line), 50.0).unwrap();
        assert_eq!(delta.y, Some(1.0));

        let delta = normalize_wheel(&WheelEvent::delta(-3.0, 0.5, DeltaMode::Line), 50.0).unwrap();
        assert_eq!(delta.x, Some(-1.0));
        assert_eq!(delta.y, Some(0.5));
    }

    #[test]
    fn pixel_mode_is_scaled() {
        let delta = normalize_wheel(&WheelEvent::delta(0.0, 15.0, DeltaMode::Pixel), 50.0).unwrap();
        assert!(approx(delta.y.unwrap(), 0.5));

        let delta = normalize_wheel(&WheelEvent::delta(0.0, 100.0, DeltaMode::Pixel), 50.0).unwrap();
        assert_eq!(delta.y, Some(1.0));
    }

    #[test]
    fn missing_mode_is_not_pixels() {
        let event = WheelEvent {
            delta_y: Some(1.0),
            ..WheelEvent::default()
        };
        assert_eq!(normalize_wheel(&event, 50.0).unwrap().y, Some(1.0));
    }

    #[test]
    fn high_resolution_wins_over_standard() {
        let event = WheelEvent {
            wheel_delta_y: Some(-120.0),
            delta_y: Some(-1.0),
            delta_mode: Some(DeltaMode::Line),
            ..WheelEvent::default()
        };
        assert_eq!(normalize_wheel(&event, 50.0).unwrap().y, Some(1.0));
    }

    #[test]
    fn zero_high_resolution_falls_back_to_standard() {
        let event = WheelEvent {
            wheel_delta_y: Some(0.0),
            delta_y: Some(-1.0),
            ..WheelEvent::default()
        };
        assert_eq!(normalize_wheel(&event, 50.0).unwrap().y, Some(-1.0));
    }

    #[test]
    fn empty_event_has_no_deltas() {
        assert_eq!(
            normalize_wheel(&WheelEvent::default(), 50.0),
            Some(WheelDelta::default())
        );
    }

    #[test]
    fn ctrl_wheel_is_ignored() {
        let event = WheelEvent::wheel_delta(0.0, -240.0).with_modifiers(Modifiers::CTRL);
        assert_eq!(normalize_wheel(&event, 50.0), None);
    }
}
