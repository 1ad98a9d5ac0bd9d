use chrono::NaiveDate;
use thiserror::Error;

use crate::badge::surface::{BadgeImage, Color, Font, Paint, Point, Rect, Region, Shape};
use crate::model::{Level, LevelNumber};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Invalid arguments handed to the renderer. Nothing is drawn on error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BadgeError {
    #[error("unknown level {0}")]
    UnknownLevel(u8),

    #[error("no level metadata for level {0}")]
    MissingLevel(LevelNumber),

    #[error("level metadata is for level {found}, expected {expected}")]
    LevelMismatch {
        expected: LevelNumber,
        found: LevelNumber,
    },

    #[error("canvas {width}x{height} is smaller than {min_width}x{min_height}")]
    CanvasTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

//
// ─── PALETTE & GEOMETRY ────────────────────────────────────────────────────────
//

const BACKGROUND_TOP: Color = Color::rgb(0x0f, 0x17, 0x2a);
const BACKGROUND_BOTTOM: Color = Color::rgb(0x1e, 0x29, 0x3b);
const ACCENT_TEAL: Color = Color::rgb(0x07, 0xda, 0xda);
const ACCENT_INDIGO: Color = Color::rgb(0x63, 0x66, 0xf1);
const INK: Color = Color::rgb(0x1e, 0x29, 0x3b);
const MUTED: Color = Color::rgb(0x64, 0x74, 0x8b);
const DIVIDER: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const DATE: Color = Color::rgb(0x94, 0xa3, 0xb8);
const FOOTER: Color = Color::rgb(0xcb, 0xd5, 0xe1);

const CARD_PADDING: f32 = 40.0;
const CARD_RADIUS: f32 = 15.0;
const TOP_BORDER_HEIGHT: f32 = 8.0;
const BADGE_OFFSET: f32 = 110.0;
const BADGE_RADIUS: f32 = 50.0;
const BADGE_RING: f32 = 5.0;
const DIVIDER_INSET: f32 = 60.0;
const FOOTER_OFFSET: f32 = 25.0;

const TITLE: &str = "AI PROFICIENCY QUIZ";
const FOOTER_TEXT: &str = "AI Proficiency Quiz";

/// Canvas size for rendered badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLayout {
    pub width: u32,
    pub height: u32,
}

impl BadgeLayout {
    pub const MIN_WIDTH: u32 = 320;
    pub const MIN_HEIGHT: u32 = 480;

    fn validate(self) -> Result<Self, BadgeError> {
        if self.width < Self::MIN_WIDTH || self.height < Self::MIN_HEIGHT {
            return Err(BadgeError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }
        Ok(self)
    }
}

impl Default for BadgeLayout {
    fn default() -> Self {
        Self {
            width: 600,
            height: 500,
        }
    }
}

/// Formats a badge date as `Month D, YYYY`.
#[must_use]
pub fn format_badge_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

//
// ─── RENDERER ──────────────────────────────────────────────────────────────────
//

/// Draws completion badges onto a fixed layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeRenderer {
    layout: BadgeLayout,
}

impl BadgeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: BadgeLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn layout(&self) -> BadgeLayout {
        self.layout
    }

    /// Render the badge for `final_level`.
    ///
    /// # Errors
    ///
    /// Returns `BadgeError::UnknownLevel` when `final_level` is outside 1..6,
    /// `BadgeError::MissingLevel` when no metadata is supplied,
    /// `BadgeError::LevelMismatch` when the metadata belongs to another level and
    /// `BadgeError::CanvasTooSmall` when the layout cannot hold the card.
    #[allow(clippy::cast_precision_loss, clippy::too_many_lines)]
    pub fn render(
        &self,
        final_level: u8,
        level: Option<&Level>,
        user_name: &str,
        date: NaiveDate,
    ) -> Result<BadgeImage, BadgeError> {
        let number =
            LevelNumber::new(final_level).map_err(|_| BadgeError::UnknownLevel(final_level))?;
        let level = level.ok_or(BadgeError::MissingLevel(number))?;
        if level.number() != number {
            return Err(BadgeError::LevelMismatch {
                expected: number,
                found: level.number(),
            });
        }
        let layout = self.layout.validate()?;

        let width = layout.width as f32;
        let height = layout.height as f32;
        let center_x = width / 2.0;

        let card = Rect {
            x: CARD_PADDING,
            y: CARD_PADDING,
            width: width - CARD_PADDING * 2.0,
            height: height - CARD_PADDING * 2.0,
        };
        let at = |offset: f32| Point::new(center_x, card.y + offset);

        let mut image = BadgeImage::new(layout.width, layout.height);

        image.push(
            Region::Background,
            Shape::Rect(Rect {
                x: 0.0,
                y: 0.0,
                width,
                height,
            }),
            Paint::linear(
                Point::new(0.0, 0.0),
                Point::new(0.0, height),
                BACKGROUND_TOP,
                BACKGROUND_BOTTOM,
            ),
        );

        image.push(
            Region::Card,
            Shape::RoundedRect {
                rect: card,
                radius: CARD_RADIUS,
            },
            Paint::Solid(Color::WHITE),
        );

        image.push(
            Region::TopBorder,
            Shape::Rect(Rect {
                height: TOP_BORDER_HEIGHT,
                ..card
            }),
            Paint::linear(
                Point::new(card.x, card.y),
                Point::new(card.x + card.width, card.y),
                ACCENT_TEAL,
                ACCENT_INDIGO,
            ),
        );

        image.push(
            Region::Title,
            text(TITLE, at(50.0), Font::regular(14.0)),
            Paint::Solid(MUTED),
        );

        // Two-tone ring: gradient disc with a white disc on top.
        let badge_center = at(BADGE_OFFSET);
        image.push(
            Region::LevelBadge,
            Shape::Circle {
                center: badge_center,
                radius: BADGE_RADIUS,
            },
            Paint::linear(
                Point::new(center_x - BADGE_RADIUS, badge_center.y - BADGE_RADIUS),
                Point::new(center_x + BADGE_RADIUS, badge_center.y + BADGE_RADIUS),
                ACCENT_TEAL,
                ACCENT_INDIGO,
            ),
        );
        image.push(
            Region::LevelBadge,
            Shape::Circle {
                center: badge_center,
                radius: BADGE_RADIUS - BADGE_RING,
            },
            Paint::Solid(Color::WHITE),
        );
        image.push(
            Region::LevelNumber,
            text(number.to_string(), badge_center, Font::bold(36.0)),
            Paint::Solid(ACCENT_INDIGO),
        );

        image.push(
            Region::LevelName,
            text(level.name().to_uppercase(), at(200.0), Font::bold(28.0)),
            Paint::Solid(INK),
        );
        image.push(
            Region::Description,
            text(
                format!("\"{}\"", level.description()),
                at(230.0),
                Font::italic(15.0),
            ),
            Paint::Solid(MUTED),
        );

        image.push(
            Region::Divider,
            Shape::Line {
                from: Point::new(card.x + DIVIDER_INSET, card.y + 260.0),
                to: Point::new(card.x + card.width - DIVIDER_INSET, card.y + 260.0),
                width: 1.0,
            },
            Paint::Solid(DIVIDER),
        );

        image.push(
            Region::UserName,
            text(user_name, at(300.0), Font::bold(24.0)),
            Paint::Solid(INK),
        );
        image.push(
            Region::Achievement,
            text(
                format!("You reached Level {number}!"),
                at(335.0),
                Font::regular(14.0),
            ),
            Paint::Solid(MUTED),
        );
        image.push(
            Region::Date,
            text(format_badge_date(date), at(370.0), Font::regular(12.0)),
            Paint::Solid(DATE),
        );
        image.push(
            Region::Footer,
            text(
                FOOTER_TEXT,
                Point::new(center_x, height - FOOTER_OFFSET),
                Font::regular(11.0),
            ),
            Paint::Solid(FOOTER),
        );

        Ok(image)
    }
}

fn text(content: impl Into<String>, anchor: Point, font: Font) -> Shape {
    Shape::Text {
        content: content.into(),
        anchor,
        font,
    }
}

/// Render with the default layout.
///
/// # Errors
///
/// See [`BadgeRenderer::render`].
pub fn render_badge(
    final_level: u8,
    level: Option<&Level>,
    user_name: &str,
    date: NaiveDate,
) -> Result<BadgeImage, BadgeError> {
    BadgeRenderer::new().render(final_level, level, user_name, date)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::surface::{DrawOp, FontWeight};
    use crate::model::Question;

    fn level(n: u8) -> Level {
        let q = Question::new(
            "Q",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            0,
            "E",
        )
        .unwrap();
        Level::new(
            LevelNumber::new(n).unwrap(),
            "Gen AI Guru",
            "Builds with generative models",
            vec![q; 6],
        )
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn draws_regions_in_fixed_order() {
        let lvl = level(5);
        let image = render_badge(5, Some(&lvl), "Ada", date(16)).unwrap();
        let regions: Vec<_> = image.ops().iter().map(|op| op.region).collect();
        assert_eq!(
            regions,
            vec![
                Region::Background,
                Region::Card,
                Region::TopBorder,
                Region::Title,
                Region::LevelBadge,
                Region::LevelBadge,
                Region::LevelNumber,
                Region::LevelName,
                Region::Description,
                Region::Divider,
                Region::UserName,
                Region::Achievement,
                Region::Date,
                Region::Footer,
            ]
        );
        assert_eq!((image.width(), image.height()), (600, 500));
    }

    #[test]
    fn text_fields_follow_level_and_player() {
        let lvl = level(5);
        let image = render_badge(5, Some(&lvl), "Ada", date(16)).unwrap();
        assert_eq!(image.text_in(Region::Title), Some("AI PROFICIENCY QUIZ"));
        assert_eq!(image.text_in(Region::LevelNumber), Some("5"));
        assert_eq!(image.text_in(Region::LevelName), Some("GEN AI GURU"));
        assert_eq!(
            image.text_in(Region::Description),
            Some("\"Builds with generative models\"")
        );
        assert_eq!(image.text_in(Region::UserName), Some("Ada"));
        assert_eq!(
            image.text_in(Region::Achievement),
            Some("You reached Level 5!")
        );
        assert_eq!(image.text_in(Region::Date), Some("October 16, 2026"));
        assert_eq!(image.text_in(Region::Footer), Some("AI Proficiency Quiz"));
    }

    #[test]
    fn positions_are_offsets_from_the_card() {
        let lvl = level(1);
        let image = render_badge(1, Some(&lvl), "Ada", date(1)).unwrap();
        let anchor_of = |region: Region| {
            image
                .ops()
                .iter()
                .find_map(|op: &DrawOp| match (&op.shape, op.region == region) {
                    (Shape::Text { anchor, font, .. }, true) => Some((*anchor, *font)),
                    _ => None,
                })
                .unwrap()
        };

        let (name_anchor, name_font) = anchor_of(Region::LevelName);
        assert_eq!(name_anchor, Point::new(300.0, 240.0));
        assert_eq!(name_font.weight, FontWeight::Bold);
        assert_eq!(anchor_of(Region::Footer).0, Point::new(300.0, 475.0));
        assert_eq!(anchor_of(Region::LevelNumber).0, Point::new(300.0, 150.0));
    }

    #[test]
    fn only_the_date_differs_between_days() {
        let lvl = level(3);
        let first = render_badge(3, Some(&lvl), "Ada", date(1)).unwrap();
        let second = render_badge(3, Some(&lvl), "Ada", date(2)).unwrap();

        assert_ne!(first, second);
        assert!(
            first
                .ops_excluding(Region::Date)
                .eq(second.ops_excluding(Region::Date))
        );
        assert_ne!(first.text_in(Region::Date), second.text_in(Region::Date));
    }

    #[test]
    fn rejects_unknown_or_missing_level_without_drawing() {
        let lvl = level(2);
        assert_eq!(
            render_badge(0, Some(&lvl), "Ada", date(1)),
            Err(BadgeError::UnknownLevel(0))
        );
        assert_eq!(
            render_badge(7, Some(&lvl), "Ada", date(1)),
            Err(BadgeError::UnknownLevel(7))
        );
        assert_eq!(
            render_badge(2, None, "Ada", date(1)),
            Err(BadgeError::MissingLevel(LevelNumber::new(2).unwrap()))
        );
        assert!(matches!(
            render_badge(4, Some(&lvl), "Ada", date(1)),
            Err(BadgeError::LevelMismatch { .. })
        ));
    }

    #[test]
    fn rejects_tiny_canvas() {
        let lvl = level(2);
        let renderer = BadgeRenderer::new().with_layout(BadgeLayout {
            width: 200,
            height: 200,
        });
        assert!(matches!(
            renderer.render(2, Some(&lvl), "Ada", date(1)),
            Err(BadgeError::CanvasTooSmall { .. })
        ));
    }

    #[test]
    fn date_format_is_long_us_style() {
        assert_eq!(format_badge_date(date(5)), "October 5, 2026");
    }
}
