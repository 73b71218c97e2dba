// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: content size, zoom limits, zoom steps and policies.

use kurbo::Size;

use crate::modes::{PinchAnchor, SmallContentPolicy, WheelAnchor};

/// Width of the default world map image, in content pixels.
pub const DEFAULT_CONTENT_WIDTH: f64 = 4096.0;
/// Height of the default world map image, in content pixels.
pub const DEFAULT_CONTENT_HEIGHT: f64 = 3044.0;
/// Default upper zoom limit.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomDirection {
    /// Magnify the content.
    In,
    /// Shrink the content.
    Out,
}

/// One discrete zoom step, as produced by a wheel notch or a key press.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomStep {
    /// Multiply the scale: `scale *= zoom_in` or `scale *= zoom_out`.
    Factor {
        /// Factor applied when zooming in; must be greater than `1`.
        zoom_in: f64,
        /// Factor applied when zooming out; must be in `(0, 1)`.
        zoom_out: f64,
    },
    /// Add or subtract a fixed amount: `scale ± step`.
    Additive(f64),
}

impl ZoomStep {
    /// Symmetric multiplicative step: `factor` in, `1 / factor` out.
    #[must_use]
    pub fn symmetric(factor: f64) -> Self {
        Self::Factor {
            zoom_in: factor,
            zoom_out: 1.0 / factor,
        }
    }

    /// Returns the unclamped scale after one step from `scale`.
    #[must_use]
    pub fn apply(self, scale: f64, direction: ZoomDirection) -> f64 {
        match (self, direction) {
            (Self::Factor { zoom_in, .. }, ZoomDirection::In) => scale * zoom_in,
            (Self::Factor { zoom_out, .. }, ZoomDirection::Out) => scale * zoom_out,
            (Self::Additive(step), ZoomDirection::In) => scale + step,
            (Self::Additive(step), ZoomDirection::Out) => scale - step,
        }
    }

    fn is_valid(self) -> bool {
        match self {
            Self::Factor { zoom_in, zoom_out } => {
                zoom_in.is_finite()
                    && zoom_out.is_finite()
                    && zoom_in > 1.0
                    && zoom_out > 0.0
                    && zoom_out < 1.0
            }
            Self::Additive(step) => step.is_finite() && step > 0.0,
        }
    }
}

/// Reasons a [`ViewerConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Content must have a finite, strictly positive width and height.
    #[error("content size must be finite and positive, got {width}x{height}")]
    InvalidContentSize {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// The zoom ceiling must be finite and strictly positive.
    #[error("max scale must be finite and positive, got {0}")]
    InvalidMaxScale(f64),
    /// A zoom step would not move the scale in the requested direction.
    #[error("{which} zoom step is invalid: {step:?}")]
    InvalidZoomStep {
        /// `"wheel"` or `"key"`.
        which: &'static str,
        /// Offending step.
        step: ZoomStep,
    },
}

/// Static configuration of a [`crate::ViewportEngine`].
///
/// The defaults describe the world map viewer: a 4096×3044 image, a zoom
/// ceiling of `3`, 10% steps for wheel and keyboard, and the simplest
/// policies (pin small content, zoom at the cursor, scale-only pinch).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Native size of the content in content pixels.
    pub content_size: Size,
    /// Upper zoom limit.
    pub max_scale: f64,
    /// Step applied per wheel notch.
    pub wheel_step: ZoomStep,
    /// Step applied per zoom key press.
    pub key_step: ZoomStep,
    /// Clamp behavior for content smaller than the viewport.
    pub small_content: SmallContentPolicy,
    /// Focal point of wheel zoom.
    pub wheel_anchor: WheelAnchor,
    /// Translation behavior during a pinch.
    pub pinch_anchor: PinchAnchor,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            content_size: Size::new(DEFAULT_CONTENT_WIDTH, DEFAULT_CONTENT_HEIGHT),
            max_scale: DEFAULT_MAX_SCALE,
            wheel_step: ZoomStep::Factor {
                zoom_in: 1.1,
                zoom_out: 0.9,
            },
            key_step: ZoomStep::symmetric(1.1),
            small_content: SmallContentPolicy::default(),
            wheel_anchor: WheelAnchor::default(),
            pinch_anchor: PinchAnchor::default(),
        }
    }
}

impl ViewerConfig {
    /// Sets the native content size.
    #[must_use]
    pub fn with_content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self
    }

    /// Sets the upper zoom limit.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets the wheel zoom step.
    #[must_use]
    pub fn with_wheel_step(mut self, step: ZoomStep) -> Self {
        self.wheel_step = step;
        self
    }

    /// Sets the keyboard zoom step.
    #[must_use]
    pub fn with_key_step(mut self, step: ZoomStep) -> Self {
        self.key_step = step;
        self
    }

    /// Sets the small-content clamp policy.
    #[must_use]
    pub fn with_small_content(mut self, policy: SmallContentPolicy) -> Self {
        self.small_content = policy;
        self
    }

    /// Sets the wheel zoom anchor.
    #[must_use]
    pub fn with_wheel_anchor(mut self, anchor: WheelAnchor) -> Self {
        self.wheel_anchor = anchor;
        self
    }

    /// Sets the pinch anchor.
    #[must_use]
    pub fn with_pinch_anchor(mut self, anchor: PinchAnchor) -> Self {
        self.pinch_anchor = anchor;
        self
    }

    /// Checks that every numeric field is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.content_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidContentSize { width, height });
        }
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }
        if !self.wheel_step.is_valid() {
            return Err(ConfigError::InvalidZoomStep {
                which: "wheel",
                step: self.wheel_step,
            });
        }
        if !self.key_step.is_valid() {
            return Err(ConfigError::InvalidZoomStep {
                which: "key",
                step: self.key_step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ConfigError, ViewerConfig, ZoomDirection, ZoomStep};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ViewerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_content() {
        let cfg = ViewerConfig::default().with_content_size(Size::new(0.0, 100.0));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidContentSize { .. })
        ));

        let cfg = ViewerConfig::default().with_content_size(Size::new(f64::NAN, 100.0));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidContentSize { .. })
        ));
    }

    #[test]
    fn rejects_bad_max_scale_and_steps() {
        let cfg = ViewerConfig::default().with_max_scale(f64::INFINITY);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidMaxScale(f64::INFINITY))
        );

        let bad = ZoomStep::Factor {
            zoom_in: 0.5,
            zoom_out: 0.9,
        };
        let cfg = ViewerConfig::default().with_wheel_step(bad);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidZoomStep {
                which: "wheel",
                step: bad,
            })
        );

        let cfg = ViewerConfig::default().with_key_step(ZoomStep::Additive(-0.1));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidZoomStep { which: "key", .. })
        ));
    }

    #[test]
    fn zoom_steps_move_scale_in_direction() {
        let factor = ZoomStep::symmetric(2.0);
        assert_eq!(factor.apply(1.0, ZoomDirection::In), 2.0);
        assert_eq!(factor.apply(1.0, ZoomDirection::Out), 0.5);

        let additive = ZoomStep::Additive(0.25);
        assert_eq!(additive.apply(1.0, ZoomDirection::In), 1.25);
        assert_eq!(additive.apply(1.0, ZoomDirection::Out), 0.75);
    }
}
