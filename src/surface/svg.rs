//! SVG drawing surface.
//!
//! Records the engine's primitives as SVG elements and serializes them to
//! a standalone document. Useful for vector output and for asserting on
//! drawn shapes in tests.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::PixelPoint;
use crate::surface::{LineJoin, PathCmd, StrokeStyle, Surface, TextStyle};

/// A recorded SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Filled rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
    },
    /// Connected line segments.
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        stroke_linejoin: LineJoin,
    },
    /// Text label.
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
    },
}

/// Vector drawing surface collecting [`SvgElement`]s.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Rgba,
    elements: Vec<SvgElement>,
    path: Vec<PathCmd>,
}

impl SvgSurface {
    /// Create a white-background SVG surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Rgba::WHITE,
            elements: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Elements recorded so far, in draw order.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to an SVG document string.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            rgba_to_css(self.background)
        );

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_svg_string().as_bytes())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: PixelPoint) {
        self.path.push(PathCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: PixelPoint) {
        self.path.push(PathCmd::LineTo(p));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        // One polyline per subpath.
        let mut run: Vec<(f32, f32)> = Vec::new();
        for cmd in &self.path {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if run.len() >= 2 {
                        self.elements.push(SvgElement::Polyline {
                            points: std::mem::take(&mut run),
                            stroke: style.color,
                            stroke_linejoin: style.join,
                        });
                    } else {
                        run.clear();
                    }
                    run.push((p.x, p.y));
                }
                PathCmd::LineTo(p) => run.push((p.x, p.y)),
            }
        }
        if run.len() >= 2 {
            self.elements.push(SvgElement::Polyline {
                points: run,
                stroke: style.color,
                stroke_linejoin: style.join,
            });
        }
    }

    fn fill_text(&mut self, text: &str, p: PixelPoint, style: &TextStyle) {
        self.elements.push(SvgElement::Text {
            x: p.x,
            y: p.y,
            text: text.to_string(),
            font_size: style.size,
            fill: style.color,
        });
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let covers_all =
            x <= 0.0 && y <= 0.0 && w >= self.width as f32 && h >= self.height as f32;
        if covers_all {
            self.elements.clear();
        } else {
            self.elements.push(SvgElement::Rect {
                x,
                y,
                width: w,
                height: h,
                fill: self.background,
            });
        }
    }
}

/// Convert RGBA to a CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill } => format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
            rgba_to_css(*fill)
        ),
        SvgElement::Polyline { points, stroke, stroke_linejoin } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            let join = match stroke_linejoin {
                LineJoin::Miter => "miter",
                LineJoin::Round => "round",
            };
            format!(
                r#"<polyline points="{points_str}" fill="none" stroke="{}" stroke-linejoin="{join}"/>"#,
                rgba_to_css(*stroke)
            )
        }
        SvgElement::Text { x, y, text, font_size, fill } => {
            let escaped = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" font-family="sans-serif">{escaped}</text>"#,
                rgba_to_css(*fill)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_style() -> StrokeStyle {
        StrokeStyle { color: Rgba::BLACK, join: LineJoin::Round }
    }

    #[test]
    fn test_document_shell() {
        let s = SvgSurface::new(800, 600);
        let svg = s.to_svg_string();
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_stroke_records_polyline() {
        let mut s = SvgSurface::new(100, 100);
        s.begin_path();
        s.move_to(PixelPoint::new(0.0, 0.0));
        s.line_to(PixelPoint::new(10.0, 10.0));
        s.line_to(PixelPoint::new(20.0, 5.0));
        s.stroke(&stroke_style());

        assert_eq!(s.elements().len(), 1);
        match &s.elements()[0] {
            SvgElement::Polyline { points, .. } => assert_eq!(points.len(), 3),
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_stroke_splits_subpaths() {
        let mut s = SvgSurface::new(100, 100);
        s.begin_path();
        s.move_to(PixelPoint::new(0.0, 0.0));
        s.line_to(PixelPoint::new(10.0, 0.0));
        s.move_to(PixelPoint::new(0.0, 10.0));
        s.line_to(PixelPoint::new(10.0, 10.0));
        s.stroke(&stroke_style());

        assert_eq!(s.elements().len(), 2);
    }

    #[test]
    fn test_fill_text_escapes() {
        let mut s = SvgSurface::new(100, 100);
        s.fill_text(
            "<1 & 2>",
            PixelPoint::new(5.0, 5.0),
            &TextStyle { color: Rgba::RED, size: 12.0 },
        );
        let svg = s.to_svg_string();
        assert!(svg.contains("&lt;1 &amp; 2&gt;"));
    }

    #[test]
    fn test_clear_rect_full_resets() {
        let mut s = SvgSurface::new(100, 100);
        s.fill_text("5", PixelPoint::new(5.0, 5.0), &TextStyle { color: Rgba::RED, size: 12.0 });
        s.clear_rect(0.0, 0.0, 100.0, 100.0);
        assert!(s.elements().is_empty());
    }

    #[test]
    fn test_clear_rect_partial_paints_background() {
        let mut s = SvgSurface::new(100, 100);
        s.clear_rect(10.0, 10.0, 20.0, 20.0);
        assert!(matches!(s.elements()[0], SvgElement::Rect { .. }));
    }
}
