//! Completion badge rendering.

mod render;
mod surface;
mod svg;

pub use render::{BadgeError, BadgeLayout, BadgeRenderer, format_badge_date, render_badge};
pub use surface::{
    BadgeImage, Color, DrawOp, Font, FontStyle, FontWeight, GradientStop, Paint, Point, Rect,
    Region, Shape,
};
pub use svg::SvgDocument;
