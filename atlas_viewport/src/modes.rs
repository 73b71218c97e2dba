// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the clamp positions content that is smaller than the viewport on an axis.
///
/// With the cover-fit minimum scale computed by [`crate::Layout::measure`]
/// content never ends up smaller than the viewport, except through rounding
/// or a `max_scale` below the measured minimum; this policy picks the result
/// for those cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SmallContentPolicy {
    /// Pin the content to the viewport origin (translation `0`).
    #[default]
    Pin,
    /// Center the content inside the viewport on that axis.
    Recenter,
}

/// Focal point used by wheel zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WheelAnchor {
    /// Keep the content point under the pointer fixed.
    #[default]
    Cursor,
    /// Zoom about the viewport center regardless of pointer position.
    Center,
}

/// How translation follows a two-finger pinch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinchAnchor {
    /// Only the scale changes; translation is left to the clamp.
    ///
    /// Content may appear to drift away from the fingers during the pinch.
    #[default]
    None,
    /// Keep the content point under the midpoint of the two touches fixed.
    Centroid,
}
