// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::modes::SmallContentPolicy;

/// Committed pan/zoom state, as consumed by a renderer.
///
/// Maps content coordinates into viewport coordinates by scaling first and
/// then translating: `view = content * scale + translation`. In CSS terms
/// this is `translate(tx, ty) scale(s)` with a top-left transform origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Offset of the scaled content's top-left corner, in viewport pixels.
    pub translation: Vec2,
}

impl ViewTransform {
    /// The identity transform: native resolution, no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale and a translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns the equivalent affine map from content to viewport space.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Converts a content-space point into viewport coordinates.
    #[must_use]
    pub fn content_to_view_point(self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Converts a viewport-space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translation) / self.scale).to_point()
    }

    /// Returns `true` when every component is a finite number.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.translation.is_finite()
    }

    /// Rescales about a viewport-space anchor so the content point under it stays put.
    ///
    /// `new_scale` is taken as-is; callers clamp it beforehand.
    #[must_use]
    pub fn zoomed_about(self, anchor: Point, new_scale: f64) -> Self {
        let ratio = new_scale / self.scale;
        let anchor = anchor.to_vec2();
        Self {
            scale: new_scale,
            translation: anchor - (anchor - self.translation) * ratio,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Measured viewport and content sizes plus the minimum scale derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Viewport size in viewport pixels.
    pub viewport: Size,
    /// Content size in content pixels.
    pub content: Size,
    /// Smallest scale at which the content still covers the whole viewport.
    pub min_scale: f64,
}

impl Layout {
    /// Measures a layout, or returns `None` when either size is degenerate.
    ///
    /// The minimum scale fills the axis on which the viewport is relatively
    /// larger: a viewport wider (in aspect) than the content is filled
    /// horizontally, otherwise vertically. Either way the other axis
    /// overflows, so the content covers the viewport at `min_scale`.
    #[must_use]
    pub fn measure(viewport: Size, content: Size) -> Option<Self> {
        let usable = |s: Size| {
            s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
        };
        if !usable(viewport) || !usable(content) {
            return None;
        }
        let min_scale = if viewport.width / viewport.height >= content.width / content.height {
            viewport.width / content.width
        } else {
            viewport.height / content.height
        };
        (min_scale.is_finite() && min_scale > 0.0).then_some(Self {
            viewport,
            content,
            min_scale,
        })
    }

    /// Viewport center in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    /// Clamps a scale into `[min_scale, max_scale]`; the floor wins if the range is inverted.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64, max_scale: f64) -> f64 {
        scale.min(max_scale).max(self.min_scale)
    }
}

/// Clamps a candidate transform so the content keeps covering the viewport.
///
/// - Scale is limited to `[layout.min_scale, max_scale]`.
/// - At the minimum scale translation is exactly zero.
/// - Otherwise each axis is limited to `[viewport - content * scale, 0]`;
///   if that range is inverted (content narrower than the viewport) the
///   axis is resolved by `policy`.
#[must_use]
pub fn clamp(
    candidate: ViewTransform,
    layout: &Layout,
    max_scale: f64,
    policy: SmallContentPolicy,
) -> ViewTransform {
    let scale = layout.clamp_scale(candidate.scale, max_scale);
    if scale <= layout.min_scale {
        return ViewTransform::new(scale, Vec2::ZERO);
    }
    let tx = clamp_axis(
        candidate.translation.x,
        layout.viewport.width,
        layout.content.width * scale,
        policy,
    );
    let ty = clamp_axis(
        candidate.translation.y,
        layout.viewport.height,
        layout.content.height * scale,
        policy,
    );
    ViewTransform::new(scale, Vec2::new(tx, ty))
}

fn clamp_axis(value: f64, viewport: f64, content: f64, policy: SmallContentPolicy) -> f64 {
    let min = viewport - content;
    let max = 0.0;
    if min > max {
        return match policy {
            SmallContentPolicy::Pin => max,
            SmallContentPolicy::Recenter => min * 0.5,
        };
    }
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{Layout, ViewTransform, clamp};
    use crate::modes::SmallContentPolicy;

    fn map_layout() -> Layout {
        Layout::measure(Size::new(1024.0, 768.0), Size::new(4096.0, 3044.0)).unwrap()
    }

    #[test]
    fn min_scale_fills_constraining_axis() {
        // 1024/768 < 4096/3044, so the height constrains.
        let layout = map_layout();
        assert!((layout.min_scale - 768.0 / 3044.0).abs() < 1e-12);

        // A very wide viewport is constrained by its width.
        let wide = Layout::measure(Size::new(2000.0, 500.0), Size::new(4096.0, 3044.0)).unwrap();
        assert!((wide.min_scale - 2000.0 / 4096.0).abs() < 1e-12);
        assert!(wide.content.height * wide.min_scale >= 500.0);
    }

    #[test]
    fn degenerate_sizes_are_not_measured() {
        let content = Size::new(4096.0, 3044.0);
        assert!(Layout::measure(Size::new(0.0, 768.0), content).is_none());
        assert!(Layout::measure(Size::new(1024.0, -1.0), content).is_none());
        assert!(Layout::measure(Size::new(f64::INFINITY, 768.0), content).is_none());
        assert!(Layout::measure(Size::new(1024.0, 768.0), Size::ZERO).is_none());
    }

    #[test]
    fn clamp_limits_scale_and_translation() {
        let layout = map_layout();
        let out = clamp(
            ViewTransform::new(10.0, Vec2::new(50.0, -1e9)),
            &layout,
            3.0,
            SmallContentPolicy::Pin,
        );
        assert_eq!(out.scale, 3.0);
        assert_eq!(out.translation.x, 0.0);
        assert_eq!(out.translation.y, 768.0 - 3044.0 * 3.0);
    }

    #[test]
    fn clamp_pins_translation_at_min_scale() {
        let layout = map_layout();
        let out = clamp(
            ViewTransform::new(0.01, Vec2::new(-40.0, -40.0)),
            &layout,
            3.0,
            SmallContentPolicy::Pin,
        );
        assert_eq!(out.scale, layout.min_scale);
        assert_eq!(out.translation, Vec2::ZERO);
    }

    #[test]
    fn inverted_range_follows_policy() {
        // Content 100 px wide at scale 2 inside a 300 px viewport: narrower than the view.
        let layout = Layout {
            viewport: Size::new(300.0, 100.0),
            content: Size::new(100.0, 100.0),
            min_scale: 1.0,
        };
        let candidate = ViewTransform::new(2.0, Vec2::new(-30.0, -30.0));

        let pinned = clamp(candidate, &layout, 3.0, SmallContentPolicy::Pin);
        assert_eq!(pinned.translation.x, 0.0);
        assert_eq!(pinned.translation.y, -30.0);

        let centered = clamp(candidate, &layout, 3.0, SmallContentPolicy::Recenter);
        assert_eq!(centered.translation.x, 50.0);
        assert_eq!(centered.translation.y, -30.0);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let t = ViewTransform::new(1.5, Vec2::new(-120.0, -80.0));
        let anchor = Point::new(300.0, 200.0);
        let before = t.view_to_content_point(anchor);
        let after = t.zoomed_about(anchor, 2.25).content_to_view_point(before);
        assert!((after.x - anchor.x).abs() < 1e-9);
        assert!((after.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let t = ViewTransform::new(2.0, Vec2::new(-10.0, 5.0));
        let pt = Point::new(3.0, 4.0);
        let via_affine = t.to_affine() * pt;
        assert_eq!(via_affine, t.content_to_view_point(pt));
        assert_eq!(via_affine, Point::new(-4.0, 13.0));
    }
}
