use std::fmt::{self, Write};

use crate::badge::surface::{BadgeImage, DrawOp, FontStyle, FontWeight, Paint, Shape};

impl BadgeImage {
    /// Standalone SVG document for this badge.
    #[must_use]
    pub fn svg(&self) -> SvgDocument<'_> {
        SvgDocument(self)
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        self.svg().to_string()
    }
}

/// Writes a badge as SVG; gradients go to `<defs>` as `paint{op index}`.
#[derive(Debug, Clone, Copy)]
pub struct SvgDocument<'a>(&'a BadgeImage);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let image = self.0;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = image.width(),
            h = image.height(),
        )?;

        f.write_str("<defs>")?;
        for (index, op) in image.ops().iter().enumerate() {
            if let Paint::Linear { start, end, stops } = &op.paint {
                write!(
                    f,
                    r#"<linearGradient id="paint{index}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    start.x, start.y, end.x, end.y
                )?;
                for stop in stops {
                    write!(
                        f,
                        r#"<stop offset="{}" stop-color="{}"/>"#,
                        stop.offset,
                        stop.color.to_hex()
                    )?;
                }
                f.write_str("</linearGradient>")?;
            }
        }
        f.write_str("</defs>\n")?;

        for (index, op) in image.ops().iter().enumerate() {
            write_op(f, index, op)?;
        }
        f.write_str("</svg>\n")
    }
}

fn write_op(f: &mut fmt::Formatter<'_>, index: usize, op: &DrawOp) -> fmt::Result {
    let paint = PaintRef { index, paint: &op.paint };
    match &op.shape {
        Shape::Rect(rect) => writeln!(
            f,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{paint}"/>"#,
            rect.x, rect.y, rect.width, rect.height
        ),
        Shape::RoundedRect { rect, radius } => writeln!(
            f,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{paint}"/>"#,
            rect.x, rect.y, rect.width, rect.height
        ),
        Shape::Circle { center, radius } => writeln!(
            f,
            r#"<circle cx="{}" cy="{}" r="{radius}" fill="{paint}"/>"#,
            center.x, center.y
        ),
        Shape::Line { from, to, width } => writeln!(
            f,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{paint}" stroke-width="{width}"/>"#,
            from.x, from.y, to.x, to.y
        ),
        Shape::Text {
            content,
            anchor,
            font,
        } => {
            let weight = match font.weight {
                FontWeight::Normal => "normal",
                FontWeight::Bold => "bold",
            };
            let style = match font.style {
                FontStyle::Normal => "normal",
                FontStyle::Italic => "italic",
            };
            writeln!(
                f,
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}" font-weight="{weight}" font-style="{style}" fill="{paint}">{}</text>"#,
                anchor.x,
                anchor.y,
                font.family,
                font.size,
                XmlText(content)
            )
        }
    }
}

struct PaintRef<'a> {
    index: usize,
    paint: &'a Paint,
}

impl fmt::Display for PaintRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.paint {
            Paint::Solid(color) => f.write_str(&color.to_hex()),
            Paint::Linear { .. } => write!(f, "url(#paint{})", self.index),
        }
    }
}

/// Text content with the five XML special characters replaced by entities.
struct XmlText<'a>(&'a str);

impl fmt::Display for XmlText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}
