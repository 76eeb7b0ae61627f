//! Partitioning of a food list into equal annular wheel segments.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in SVG
//! screen space (y grows downwards), matching how the wheel is drawn.

use std::borrow::Cow;
use std::f64::consts::PI;

use crate::constants::{
    LABEL_ELLIPSIS, LABEL_KEEP_CHARS, LABEL_MAX_CHARS, WHEEL_INNER_RADIUS, WHEEL_OUTER_RADIUS,
    WHEEL_PADDING,
};
use crate::shared_wheel_game::ThemeSpec;
use crate::wheel_palette::segment_color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDimensions {
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl Default for WheelDimensions {
    fn default() -> Self {
        Self {
            outer_radius: WHEEL_OUTER_RADIUS,
            inner_radius: WHEEL_INNER_RADIUS,
        }
    }
}

impl WheelDimensions {
    pub fn label_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    /// Side length of the square the wheel is drawn into
    pub fn canvas_size(&self) -> f64 {
        2.0 * (self.outer_radius + WHEEL_PADDING)
    }

    /// SVG viewBox centred on the wheel hub
    pub fn view_box(&self) -> String {
        let half = self.canvas_size() / 2.0;
        format!("{} {} {} {}", -half, -half, self.canvas_size(), self.canvas_size())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn polar(radius: f64, degrees: f64) -> Self {
        let radians = degrees * PI / 180.0;
        Self {
            x: radius * radians.cos(),
            y: radius * radians.sin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDescriptor {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: String,
    /// SVG path data for the annular sector
    pub path: String,
    pub label_text: String,
    pub label_anchor: Point,
    /// Rotation applied to the label so it reads along the segment's midline
    pub label_rotation: f64,
}

impl SegmentDescriptor {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn label_transform(&self) -> String {
        format!(
            "rotate({}, {}, {})",
            round_coord(self.label_rotation),
            round_coord(self.label_anchor.x),
            round_coord(self.label_anchor.y)
        )
    }
}

/// A computed wheel. An empty food list yields `Empty` so callers render a
/// placeholder instead of degenerate geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelFace {
    Empty,
    Segments(Vec<SegmentDescriptor>),
}

impl WheelFace {
    pub fn is_empty(&self) -> bool {
        matches!(self, WheelFace::Empty)
    }

    pub fn segments(&self) -> &[SegmentDescriptor] {
        match self {
            WheelFace::Empty => &[],
            WheelFace::Segments(segments) => segments,
        }
    }

    pub fn len(&self) -> usize {
        self.segments().len()
    }
}

/// `[start, end)` of segment `index` out of `count`. Both bounds come from the
/// same expression so neighbouring segments share their edge exactly.
pub fn segment_bounds(index: usize, count: usize) -> (f64, f64) {
    let edge = |i: usize| 360.0 * i as f64 / count as f64;
    (edge(index), edge(index + 1))
}

/// Shortens labels that would spill onto neighbouring segments. The food item
/// itself is left untouched.
pub fn truncate_label(label: &str) -> Cow<'_, str> {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return Cow::Borrowed(label);
    }
    let kept: String = label.chars().take(LABEL_KEEP_CHARS).collect();
    Cow::Owned(kept + LABEL_ELLIPSIS)
}

// Three decimals keeps the path text stable across platforms and free of -0
fn round_coord(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn fmt_point(point: Point) -> String {
    format!("{} {}", round_coord(point.x), round_coord(point.y))
}

/// Closed annular sector: out along the start edge, clockwise along the outer
/// arc, in along the end edge, then back along the inner arc.
pub fn annular_sector_path(start_angle: f64, end_angle: f64, dims: WheelDimensions) -> String {
    let outer = dims.outer_radius;
    let inner = dims.inner_radius;
    let span = end_angle - start_angle;

    // A full ring cannot be drawn with a single arc (coincident endpoints)
    if span >= 360.0 {
        let half = start_angle + span / 2.0;
        return [
            format!("M {}", fmt_point(Point::polar(inner, start_angle))),
            format!("L {}", fmt_point(Point::polar(outer, start_angle))),
            format!("A {r} {r} 0 0 1 {}", fmt_point(Point::polar(outer, half)), r = outer),
            format!("A {r} {r} 0 0 1 {}", fmt_point(Point::polar(outer, end_angle)), r = outer),
            format!("L {}", fmt_point(Point::polar(inner, end_angle))),
            format!("A {r} {r} 0 0 0 {}", fmt_point(Point::polar(inner, half)), r = inner),
            format!("A {r} {r} 0 0 0 {}", fmt_point(Point::polar(inner, start_angle)), r = inner),
            "Z".to_string(),
        ]
        .join(" ");
    }

    let large_arc = if span > 180.0 { 1 } else { 0 };
    [
        format!("M {}", fmt_point(Point::polar(inner, start_angle))),
        format!("L {}", fmt_point(Point::polar(outer, start_angle))),
        format!(
            "A {r} {r} 0 {} 1 {}",
            large_arc,
            fmt_point(Point::polar(outer, end_angle)),
            r = outer
        ),
        format!("L {}", fmt_point(Point::polar(inner, end_angle))),
        format!(
            "A {r} {r} 0 {} 0 {}",
            large_arc,
            fmt_point(Point::polar(inner, start_angle)),
            r = inner
        ),
        "Z".to_string(),
    ]
    .join(" ")
}

/// Builds one descriptor per food item. Pure: identical inputs always give an
/// identical face, so it is safe to recompute on every list or theme change.
pub fn build_wheel_face<S: AsRef<str>>(
    foods: &[S],
    dims: WheelDimensions,
    theme: Option<&ThemeSpec>,
) -> WheelFace {
    if foods.is_empty() {
        return WheelFace::Empty;
    }

    let count = foods.len();
    let segments = foods
        .iter()
        .enumerate()
        .map(|(index, food)| {
            let (start_angle, end_angle) = segment_bounds(index, count);
            let mid_angle = (start_angle + end_angle) / 2.0;
            SegmentDescriptor {
                index,
                start_angle,
                end_angle,
                fill_color: segment_color(index, theme).to_string(),
                path: annular_sector_path(start_angle, end_angle, dims),
                label_text: truncate_label(food.as_ref()).into_owned(),
                label_anchor: Point::polar(dims.label_radius(), mid_angle),
                label_rotation: mid_angle,
            }
        })
        .collect();

    WheelFace::Segments(segments)
}
