// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::ZoomDirection;

/// Keyboard zoom commands recognized by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// `+` or `=`.
    ZoomIn,
    /// `-` or `_`.
    ZoomOut,
}

impl KeyCommand {
    /// Maps a typed character to a command; every other key is ignored.
    #[must_use]
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            '+' | '=' => Some(Self::ZoomIn),
            '-' | '_' => Some(Self::ZoomOut),
            _ => None,
        }
    }

    /// Zoom direction of this command.
    #[must_use]
    pub fn direction(self) -> ZoomDirection {
        match self {
            Self::ZoomIn => ZoomDirection::In,
            Self::ZoomOut => ZoomDirection::Out,
        }
    }
}

impl ZoomDirection {
    /// Interprets the vertical delta of a wheel event.
    ///
    /// Scrolling up (negative delta) zooms in. A zero or non-finite delta
    /// carries no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}
