// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, ViewerConfig, ZoomDirection, ZoomStep};
use crate::gesture::GestureSession;
use crate::input::KeyCommand;
use crate::modes::{PinchAnchor, WheelAnchor};
use crate::state::{Layout, ViewTransform, clamp};

/// Pan/zoom engine for one viewport over a fixed-size image.
///
/// The engine owns the committed [`ViewTransform`], the measured [`Layout`]
/// and at most one [`GestureSession`]. Every handler runs to completion:
/// it builds a candidate transform, clamps it, and commits it if it
/// differs from the current one. Handlers that can move the content return
/// `true` when such a commit happened; [`ViewportEngine::revision`] counts
/// commits for renderers that poll.
///
/// Nothing happens until the first [`ViewportEngine::resize`] (or
/// [`ViewportEngine::set_viewport_size`]) measures the viewport.
#[derive(Clone, Debug)]
pub struct ViewportEngine {
    config: ViewerConfig,
    layout: Option<Layout>,
    transform: ViewTransform,
    session: GestureSession,
    revision: u64,
}

impl ViewportEngine {
    /// Creates an unsized engine for the given configuration.
    pub fn new(config: ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            layout: None,
            transform: ViewTransform::IDENTITY,
            session: GestureSession::Idle,
            revision: 0,
        })
    }

    /// Returns the configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the last measured layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Returns `true` once a usable viewport size has been measured.
    #[must_use]
    pub fn is_sized(&self) -> bool {
        self.layout.is_some()
    }

    /// Returns the committed transform.
    #[must_use]
    pub fn current_transform(&self) -> ViewTransform {
        self.transform
    }

    /// Returns the active gesture session.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Number of commits that changed the transform so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Measures a new viewport and content size and re-clamps the transform.
    ///
    /// The first successful measurement fits the content (minimum scale, no
    /// offset). Later ones keep the current scale and translation as far as
    /// the new bounds allow. Degenerate sizes are ignored and the last
    /// layout stays in effect. An active gesture session is left untouched.
    pub fn resize(&mut self, viewport: Size, content: Size) -> bool {
        let Some(layout) = Layout::measure(viewport, content) else {
            warn!(?viewport, ?content, "ignoring degenerate resize");
            return false;
        };
        let first = self.layout.is_none();
        self.layout = Some(layout);
        debug!(
            width = viewport.width,
            height = viewport.height,
            min_scale = layout.min_scale,
            "viewport resized"
        );
        if first {
            self.fit()
        } else {
            self.commit(self.transform)
        }
    }

    /// Measures a new viewport size, keeping the current content size.
    pub fn set_viewport_size(&mut self, viewport: Size) -> bool {
        let content = self
            .layout
            .map_or(self.config.content_size, |layout| layout.content);
        self.resize(viewport, content)
    }

    /// Resets to the minimum scale with the content at the viewport origin.
    pub fn fit(&mut self) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        self.commit(ViewTransform::new(layout.min_scale, Vec2::ZERO))
    }

    /// Places the content programmatically; the transform is clamped like any other input.
    pub fn set_transform(&mut self, transform: ViewTransform) -> bool {
        self.commit(transform)
    }

    /// Zooms one wheel step.
    ///
    /// A negative `delta_y` zooms in, a positive one zooms out. With
    /// [`WheelAnchor::Cursor`] the content point under `pointer` stays
    /// under it (up to the clamp); with [`WheelAnchor::Center`] the
    /// viewport center is used instead.
    pub fn on_wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return false;
        };
        let anchor = match self.config.wheel_anchor {
            WheelAnchor::Cursor => pointer,
            WheelAnchor::Center => layout.viewport_center(),
        };
        self.zoom_step(&layout, anchor, self.config.wheel_step, direction)
    }

    /// Handles a typed character; `+`/`=` and `-`/`_` zoom about the viewport center.
    pub fn on_key(&mut self, key: char) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let Some(command) = KeyCommand::from_char(key) else {
            return false;
        };
        self.zoom_step(
            &layout,
            layout.viewport_center(),
            self.config.key_step,
            command.direction(),
        )
    }

    /// Starts panning with the pointer at `pointer`.
    ///
    /// Any active gesture ends first. At the minimum scale there is nothing
    /// to pan and no session opens.
    pub fn on_drag_start(&mut self, pointer: Point) {
        self.end_session();
        let Some(layout) = self.layout else {
            return;
        };
        if self.transform.scale <= layout.min_scale {
            trace!("drag ignored at minimum scale");
            return;
        }
        self.session = GestureSession::drag(pointer, self.transform.translation);
        trace!(x = pointer.x, y = pointer.y, "drag started");
    }

    /// Pans so the content follows the pointer since the drag started.
    pub fn on_drag_move(&mut self, pointer: Point) -> bool {
        let Some(translation) = self.session.drag_translation(pointer) else {
            return false;
        };
        self.commit(ViewTransform::new(self.transform.scale, translation))
    }

    /// Ends an active drag; does nothing otherwise.
    pub fn on_drag_end(&mut self) {
        if self.session.is_dragging() {
            self.end_session();
        }
    }

    /// The pointer left the viewport: any drag in progress ends.
    pub fn on_pointer_leave(&mut self) {
        self.on_drag_end();
    }

    /// Starts a pinch between two touch points.
    ///
    /// Any active gesture ends first. Coincident touches open a session
    /// whose anchor is measured by the first move that separates them.
    pub fn on_pinch_start(&mut self, a: Point, b: Point) {
        self.end_session();
        if self.layout.is_none() {
            return;
        }
        self.session = GestureSession::pinch(a, b, self.transform.scale);
        if let GestureSession::Pinching {
            anchor_distance: None,
            ..
        } = self.session
        {
            trace!("pinch started on coincident touches, anchor deferred");
        } else {
            trace!("pinch started");
        }
    }

    /// Rescales by the ratio of the current to the anchor touch distance.
    pub fn on_pinch_move(&mut self, a: Point, b: Point) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        if self.session.remeasure_pinch(a, b, self.transform.scale) {
            trace!("pinch anchor measured");
            return false;
        }
        let Some(scale) = self.session.pinch_scale(a, b) else {
            return false;
        };
        let scale = layout.clamp_scale(scale, self.config.max_scale);
        let candidate = match self.config.pinch_anchor {
            PinchAnchor::None => ViewTransform::new(scale, self.transform.translation),
            PinchAnchor::Centroid => self.transform.zoomed_about(a.midpoint(b), scale),
        };
        self.commit(candidate)
    }

    /// Ends an active pinch; does nothing otherwise.
    pub fn on_pinch_end(&mut self) {
        if self.session.is_pinching() {
            self.end_session();
        }
    }

    /// A touch went down; `touches` lists every touch now active.
    ///
    /// One touch drags, two touches pinch. Any other count ends the current
    /// gesture without starting a new one.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        self.retarget_touches(touches);
    }

    /// Touches moved; `touches` lists every touch now active.
    ///
    /// If the count no longer matches the active session, the matching
    /// session is opened at these points instead of moving.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> bool {
        match *touches {
            [p] if self.session.is_dragging() => self.on_drag_move(p),
            [a, b] if self.session.is_pinching() => self.on_pinch_move(a, b),
            [_] | [_, _] => {
                self.retarget_touches(touches);
                false
            }
            _ => false,
        }
    }

    /// A touch lifted; `remaining` lists the touches still down.
    ///
    /// The session is rebuilt for the remaining count, so lifting one finger
    /// of a pinch continues as a one-finger drag from where it rests.
    pub fn on_touch_end(&mut self, remaining: &[Point]) {
        self.retarget_touches(remaining);
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            layout: self.layout,
            transform: self.transform,
            max_scale: self.config.max_scale,
            session: self.session,
            revision: self.revision,
        }
    }

    fn retarget_touches(&mut self, touches: &[Point]) {
        match *touches {
            [p] => self.on_drag_start(p),
            [a, b] => self.on_pinch_start(a, b),
            _ => self.end_session(),
        }
    }

    fn zoom_step(
        &mut self,
        layout: &Layout,
        anchor: Point,
        step: ZoomStep,
        direction: ZoomDirection,
    ) -> bool {
        let current = self.transform;
        let scale = layout.clamp_scale(
            step.apply(current.scale, direction),
            self.config.max_scale,
        );
        self.commit(current.zoomed_about(anchor, scale))
    }

    fn end_session(&mut self) {
        if !self.session.is_idle() {
            trace!(session = ?self.session, "gesture ended");
            self.session.end();
        }
    }

    fn commit(&mut self, candidate: ViewTransform) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        if !candidate.is_finite() {
            warn!(?candidate, "rejecting non-finite transform");
            return false;
        }
        let next = clamp(
            candidate,
            &layout,
            self.config.max_scale,
            self.config.small_content,
        );
        if !next.is_finite() {
            warn!(?next, "rejecting non-finite clamped transform");
            return false;
        }
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.revision = self.revision.wrapping_add(1);
        debug!(
            revision = self.revision,
            scale = next.scale,
            tx = next.translation.x,
            ty = next.translation.y,
            "transform committed"
        );
        true
    }
}

/// Debug snapshot of a [`ViewportEngine`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Last measured layout, if any.
    pub layout: Option<Layout>,
    /// Committed transform.
    pub transform: ViewTransform,
    /// Configured zoom ceiling.
    pub max_scale: f64,
    /// Active gesture session.
    pub session: GestureSession,
    /// Commit counter.
    pub revision: u64,
}
