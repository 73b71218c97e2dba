// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=atlas_viewport --heading-base-level=0

//! Atlas Viewport: a headless pan/zoom engine for a fixed-size image.
//!
//! The engine lets a user explore a large image (a world map, typically)
//! through a smaller viewport. It reconciles five input sources into one
//! transform:
//! - Mouse wheel zoom, anchored at the cursor.
//! - Keyboard zoom (`+`/`=`, `-`/`_`), anchored at the viewport center.
//! - Mouse drag panning.
//! - Single-touch drag panning.
//! - Two-finger pinch zoom.
//!
//! After every input the transform is clamped so the image always covers
//! the viewport: the scale never drops below the cover-fit minimum derived
//! from the viewport and image aspect ratios, never exceeds the configured
//! ceiling, and the translation never exposes empty space.
//!
//! It does **not** render anything or listen to platform events. Callers
//! forward their events to [`ViewportEngine`] and apply
//! [`ViewportEngine::current_transform`] (for example via
//! [`ViewTransform::to_affine`]) when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use atlas_viewport::{ViewerConfig, ViewportEngine};
//!
//! // 4096x3044 map by default.
//! let mut engine = ViewportEngine::new(ViewerConfig::default()).unwrap();
//! engine.set_viewport_size(Size::new(1024.0, 768.0));
//!
//! // One wheel notch up over the viewport center.
//! engine.on_wheel(Point::new(512.0, 384.0), -1.0);
//!
//! let t = engine.current_transform();
//! let layout = engine.layout().unwrap();
//! assert!(t.scale > layout.min_scale);
//! ```
//!
//! ## Gestures
//!
//! At most one gesture is active at a time. Starting a drag or a pinch ends
//! whatever was active; touch handlers take the full list of active touches
//! and switch between drag and pinch as fingers come and go:
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use atlas_viewport::{ViewTransform, ViewerConfig, ViewportEngine};
//!
//! let mut engine = ViewportEngine::new(ViewerConfig::default()).unwrap();
//! engine.set_viewport_size(Size::new(1024.0, 768.0));
//! engine.set_transform(ViewTransform::new(1.0, Vec2::new(-200.0, -200.0)));
//!
//! engine.on_touch_start(&[Point::new(10.0, 10.0)]);
//! engine.on_touch_move(&[Point::new(30.0, 10.0)]);
//! assert_eq!(engine.current_transform().translation, Vec2::new(-180.0, -200.0));
//!
//! engine.on_touch_start(&[Point::new(30.0, 10.0), Point::new(130.0, 10.0)]);
//! assert!(engine.session().is_pinching());
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and translation is expressed in viewport pixels.
//! - Policies that viewers disagree on are explicit configuration:
//!   [`SmallContentPolicy`], [`WheelAnchor`] and [`PinchAnchor`].
//! - Numeric failures never surface as errors. Degenerate sizes and
//!   non-finite candidates are dropped and the last valid state is kept.
//! - Rotation and inertial panning are out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod gesture;
mod input;
mod modes;
mod state;

pub use config::{
    ConfigError, DEFAULT_CONTENT_HEIGHT, DEFAULT_CONTENT_WIDTH, DEFAULT_MAX_SCALE, ViewerConfig,
    ZoomDirection, ZoomStep,
};
pub use engine::{ViewportDebugInfo, ViewportEngine};
pub use gesture::GestureSession;
pub use input::KeyCommand;
pub use modes::{PinchAnchor, SmallContentPolicy, WheelAnchor};
pub use state::{Layout, ViewTransform, clamp};
