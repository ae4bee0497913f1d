// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// Reasons an [`InertiaConfig`](crate::InertiaConfig) is rejected by
/// [`InertiaConfig::validate`](crate::InertiaConfig::validate).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `wheel_step` is zero, which leaves no minimum wheel step.
    #[error("`wheel_step` must be non-zero")]
    ZeroWheelStep,
    /// A duration is negative.
    #[error("`{field}` must not be negative, got {value}")]
    NegativeDuration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `inertia_duration` is zero or negative.
    #[error("`inertia_duration` must be positive, got {0}")]
    NonPositiveInertiaDuration(f64),
}
