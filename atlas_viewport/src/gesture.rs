// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture sessions: the anchors captured when a drag or pinch starts.
//!
//! A session stores absolute anchors rather than running deltas, so each move
//! recomputes the transform from the values captured at gesture start. That
//! keeps a session valid across resizes and avoids accumulating rounding error.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use atlas_viewport::GestureSession;
//!
//! let session = GestureSession::drag(Point::new(10.0, 20.0), Vec2::new(-5.0, 0.0));
//! assert!(session.is_dragging());
//!
//! // Pointer moved by (15, 5): translation follows from the anchors.
//! let t = session.drag_translation(Point::new(25.0, 25.0)).unwrap();
//! assert_eq!(t, Vec2::new(10.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// The single active gesture of an engine, if any.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One pointer (mouse or single touch) is panning the content.
    Dragging {
        /// Pointer position when the drag started.
        anchor_pointer: Point,
        /// Translation when the drag started.
        anchor_translation: Vec2,
    },
    /// Two touches are zooming the content.
    Pinching {
        /// Distance between the touches at pinch start.
        ///
        /// `None` while the touches coincide; the next move with a nonzero
        /// distance becomes the anchor instead of zooming.
        anchor_distance: Option<f64>,
        /// Scale when the anchor distance was measured.
        anchor_scale: f64,
    },
}

impl GestureSession {
    /// Opens a drag session.
    #[must_use]
    pub fn drag(anchor_pointer: Point, anchor_translation: Vec2) -> Self {
        Self::Dragging {
            anchor_pointer,
            anchor_translation,
        }
    }

    /// Opens a pinch session from the two touch points.
    #[must_use]
    pub fn pinch(a: Point, b: Point, anchor_scale: f64) -> Self {
        Self::Pinching {
            anchor_distance: usable_distance(a, b),
            anchor_scale,
        }
    }

    /// Returns `true` when no gesture is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }

    /// Translation implied by the pointer now being at `pointer`.
    ///
    /// Returns `None` unless a drag is active.
    #[must_use]
    pub fn drag_translation(&self, pointer: Point) -> Option<Vec2> {
        match *self {
            Self::Dragging {
                anchor_pointer,
                anchor_translation,
            } => Some(anchor_translation + (pointer - anchor_pointer)),
            _ => None,
        }
    }

    /// Unclamped scale implied by the touches now being at `a` and `b`.
    ///
    /// Touches closed to a point give `0.0` and an overflowing ratio gives
    /// `f64::MAX`; callers clamp. Returns `None` unless a pinch is active with
    /// a measured anchor distance, or when the current distance is not finite.
    #[must_use]
    pub fn pinch_scale(&self, a: Point, b: Point) -> Option<f64> {
        match *self {
            Self::Pinching {
                anchor_distance: Some(anchor),
                anchor_scale,
            } => {
                let distance = a.distance(b);
                if !distance.is_finite() {
                    return None;
                }
                let scale = anchor_scale * (distance / anchor);
                Some(if scale.is_infinite() { f64::MAX } else { scale })
            }
            _ => None,
        }
    }

    /// Measures the anchor distance of a pinch opened on coincident touches.
    ///
    /// Returns `true` if the anchors were (re)measured by this call, in which
    /// case the move must not zoom.
    pub fn remeasure_pinch(&mut self, a: Point, b: Point, current_scale: f64) -> bool {
        match self {
            Self::Pinching {
                anchor_distance,
                anchor_scale,
            } if anchor_distance.is_none() => match usable_distance(a, b) {
                Some(distance) => {
                    *anchor_distance = Some(distance);
                    *anchor_scale = current_scale;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Ends whatever gesture is active.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

fn usable_distance(a: Point, b: Point) -> Option<f64> {
    let distance = a.distance(b);
    (distance.is_finite() && distance > 0.0).then_some(distance)
}
