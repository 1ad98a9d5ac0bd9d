//! Drawing primitives recorded by the badge renderer.
//!
//! A [`BadgeImage`] is an ordered display list; exporters replay it onto a
//! concrete target (see `svg.rs`).

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by exporters.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient between two points in canvas coordinates.
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Two-stop linear gradient from `from` to `to`.
    #[must_use]
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self::Linear {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    pub const FAMILY: &'static str = "Arial, sans-serif";

    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            family: Self::FAMILY,
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    #[must_use]
    pub const fn italic(size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::regular(size)
        }
    }
}

/// Geometry of a single drawing operation.
///
/// Text is centered horizontally and vertically on `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f32 },
    Circle { center: Point, radius: f32 },
    Line { from: Point, to: Point, width: f32 },
    Text { content: String, anchor: Point, font: Font },
}

/// Part of the badge an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Background,
    Card,
    TopBorder,
    Title,
    LevelBadge,
    LevelNumber,
    LevelName,
    Description,
    Divider,
    UserName,
    Achievement,
    Date,
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub region: Region,
    pub shape: Shape,
    /// Fill for areas and text, stroke for lines.
    pub paint: Paint,
}

/// Rendered badge: canvas size plus the ordered drawing operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeImage {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl BadgeImage {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, region: Region, shape: Shape, paint: Paint) {
        self.ops.push(DrawOp {
            region,
            shape,
            paint,
        });
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Operations outside `region`, in drawing order.
    pub fn ops_excluding(&self, region: Region) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.region != region)
    }

    /// Text drawn in `region`, if any.
    #[must_use]
    pub fn text_in(&self, region: Region) -> Option<&str> {
        self.ops
            .iter()
            .filter(|op| op.region == region)
            .find_map(|op| match &op.shape {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
    }
}
