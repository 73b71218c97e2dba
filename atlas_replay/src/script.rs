// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted viewer input: one event per platform callback the engine would see.

use anyhow::{Context, bail};
use atlas_viewport::ViewportEngine;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// One recorded input event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum ReplayEvent {
    Resize { width: f64, height: f64 },
    Fit,
    Wheel { x: f64, y: f64, delta_y: f64 },
    Key { key: char },
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    PointerLeave,
    PinchStart { a: [f64; 2], b: [f64; 2] },
    PinchMove { a: [f64; 2], b: [f64; 2] },
    PinchEnd,
    TouchStart { touches: Vec<[f64; 2]> },
    TouchMove { touches: Vec<[f64; 2]> },
    TouchEnd { touches: Vec<[f64; 2]> },
}

impl ReplayEvent {
    /// Feeds the event to the engine; returns `true` if the transform changed.
    pub(crate) fn apply(&self, engine: &mut ViewportEngine) -> bool {
        let revision = engine.revision();
        match self {
            Self::Resize { width, height } => {
                engine.set_viewport_size(Size::new(*width, *height));
            }
            Self::Fit => {
                engine.fit();
            }
            Self::Wheel { x, y, delta_y } => {
                engine.on_wheel(Point::new(*x, *y), *delta_y);
            }
            Self::Key { key } => {
                engine.on_key(*key);
            }
            Self::DragStart { x, y } => engine.on_drag_start(Point::new(*x, *y)),
            Self::DragMove { x, y } => {
                engine.on_drag_move(Point::new(*x, *y));
            }
            Self::DragEnd => engine.on_drag_end(),
            Self::PointerLeave => engine.on_pointer_leave(),
            Self::PinchStart { a, b } => engine.on_pinch_start(point(*a), point(*b)),
            Self::PinchMove { a, b } => {
                engine.on_pinch_move(point(*a), point(*b));
            }
            Self::PinchEnd => engine.on_pinch_end(),
            Self::TouchStart { touches } => engine.on_touch_start(&points(touches)),
            Self::TouchMove { touches } => {
                engine.on_touch_move(&points(touches));
            }
            Self::TouchEnd { touches } => engine.on_touch_end(&points(touches)),
        }
        engine.revision() != revision
    }
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

fn points(touches: &[[f64; 2]]) -> Vec<Point> {
    touches.iter().copied().map(point).collect()
}

/// Parses a `WIDTHxHEIGHT` viewport size such as `1024x768`.
pub(crate) fn parse_viewport(value: &str) -> anyhow::Result<Size> {
    let Some((w, h)) = value.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got `{value}`");
    };
    let width: f64 = w.trim().parse().with_context(|| format!("bad width `{w}`"))?;
    let height: f64 = h.trim().parse().with_context(|| format!("bad height `{h}`"))?;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        bail!("viewport must be positive, got {width}x{height}");
    }
    Ok(Size::new(width, height))
}

/// Parses a JSON array of events.
pub(crate) fn parse_script(json: &str) -> anyhow::Result<Vec<ReplayEvent>> {
    serde_json::from_str(json).context("invalid replay script")
}

/// A short session touching every input source, used when no script is given.
pub(crate) fn builtin_tour(viewport: Size) -> Vec<ReplayEvent> {
    let cx = viewport.width * 0.5;
    let cy = viewport.height * 0.5;
    vec![
        ReplayEvent::Wheel {
            x: cx,
            y: cy,
            delta_y: -1.0,
        },
        ReplayEvent::Wheel {
            x: cx * 0.5,
            y: cy * 0.5,
            delta_y: -1.0,
        },
        ReplayEvent::Key { key: '+' },
        ReplayEvent::DragStart { x: cx, y: cy },
        ReplayEvent::DragMove {
            x: cx - 120.0,
            y: cy - 80.0,
        },
        ReplayEvent::DragMove {
            x: cx + 4000.0,
            y: cy,
        },
        ReplayEvent::DragEnd,
        ReplayEvent::TouchStart {
            touches: vec![[cx - 50.0, cy], [cx + 50.0, cy]],
        },
        ReplayEvent::TouchMove {
            touches: vec![[cx - 100.0, cy], [cx + 100.0, cy]],
        },
        ReplayEvent::TouchEnd {
            touches: vec![[cx + 100.0, cy]],
        },
        ReplayEvent::TouchMove {
            touches: vec![[cx + 60.0, cy + 30.0]],
        },
        ReplayEvent::TouchEnd { touches: vec![] },
        ReplayEvent::Resize {
            width: viewport.width * 0.75,
            height: viewport.height,
        },
        ReplayEvent::Key { key: '-' },
        ReplayEvent::Fit,
    ]
}

#[cfg(test)]
mod tests {
    use atlas_viewport::{ViewerConfig, ViewportEngine};
    use kurbo::Size;

    use super::{ReplayEvent, builtin_tour, parse_script, parse_viewport};

    #[test]
    fn parses_viewport_sizes() {
        assert_eq!(parse_viewport("1024x768").unwrap(), Size::new(1024.0, 768.0));
        assert_eq!(parse_viewport("800X600").unwrap(), Size::new(800.0, 600.0));
        assert!(parse_viewport("1024").is_err());
        assert!(parse_viewport("0x768").is_err());
        assert!(parse_viewport("ax768").is_err());
    }

    #[test]
    fn parses_tagged_events() {
        let script = r#"[
            { "event": "resize", "width": 800, "height": 600 },
            { "event": "wheel", "x": 10, "y": 20, "delta_y": -1 },
            { "event": "key", "key": "+" },
            { "event": "touch_start", "touches": [[1, 2], [3, 4]] },
            { "event": "drag_end" }
        ]"#;
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                ReplayEvent::Resize {
                    width: 800.0,
                    height: 600.0,
                },
                ReplayEvent::Wheel {
                    x: 10.0,
                    y: 20.0,
                    delta_y: -1.0,
                },
                ReplayEvent::Key { key: '+' },
                ReplayEvent::TouchStart {
                    touches: vec![[1.0, 2.0], [3.0, 4.0]],
                },
                ReplayEvent::DragEnd,
            ]
        );
        assert!(parse_script(r#"[{ "event": "teleport" }]"#).is_err());
    }

    #[test]
    fn builtin_tour_moves_the_view_and_ends_fitted() {
        let viewport = Size::new(1024.0, 768.0);
        let mut engine = ViewportEngine::new(ViewerConfig::default()).unwrap();
        engine.set_viewport_size(viewport);

        let changed = builtin_tour(viewport)
            .iter()
            .filter(|event| event.apply(&mut engine))
            .count();
        assert!(changed > 5);
        assert!(engine.session().is_idle());

        let layout = *engine.layout().unwrap();
        assert_eq!(engine.current_transform().scale, layout.min_scale);
    }
}
