//! Curve and net rendering over the drawing-surface capability.
//!
//! Translates data-space points and net lines through a
//! [`PlotTransform`] and issues path/text primitives against a
//! [`Surface`]. Curves are stroked in the variable's color with round
//! joins; net lines in a neutral gray with value labels.

mod primitives;
mod text;

pub use primitives::draw_line_aa;
pub use text::{draw_text, text_width};

use crate::color::Rgba;
use crate::geometry::{NetLine, PixelPoint, Point};
use crate::surface::{LineJoin, StrokeStyle, Surface, TextStyle};
use crate::transform::PlotTransform;

/// Label glyph height in pixels.
const LABEL_SIZE: f32 = 12.0;
/// Label fill color.
const LABEL_COLOR: Rgba = Rgba::RED;

/// Draw a single connected path through `points`, in order, stroked in
/// `color` with round joins. Points are translated with the vertical
/// flip so data-up becomes pixel-up.
pub fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    transform: &PlotTransform,
    color: Rgba,
) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    surface.begin_path();
    surface.move_to(transform.to_pixel(*first, true));
    for point in rest {
        surface.line_to(transform.to_pixel(*point, true));
    }
    surface.stroke(&StrokeStyle { color, join: LineJoin::Round });
}

/// Draw net lines and their labels.
///
/// Line endpoints are translated without the vertical flip. Vertical
/// lines are labeled with the x-value to two decimals near the bottom
/// endpoint; horizontal lines with the raw y-value near the left
/// endpoint, the label position alone using the flipped translation.
pub fn draw_net<S: Surface + ?Sized>(
    surface: &mut S,
    lines: &[NetLine],
    transform: &PlotTransform,
) {
    let margin = transform.margin() as f32;
    let label = TextStyle { color: LABEL_COLOR, size: LABEL_SIZE };

    surface.begin_path();
    for line in lines {
        let from = transform.to_pixel(line.from, false);
        let to = transform.to_pixel(line.to, false);

        if line.is_vertical() {
            surface.fill_text(
                &format!("{:.2}", line.from.x),
                PixelPoint::new(to.x - margin / 2.0, to.y + margin),
                &label,
            );
        }

        if line.is_horizontal() {
            let label_from = transform.to_pixel(line.from, true);
            let label_to = transform.to_pixel(line.to, true);
            surface.fill_text(
                &format!("{}", line.from.y),
                PixelPoint::new(label_from.x - margin, label_to.y + margin / 2.0),
                &label,
            );
        }

        surface.move_to(from);
        surface.line_to(to);
    }
    surface.stroke(&StrokeStyle { color: Rgba::NET_GRAY, join: LineJoin::Miter });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use crate::surface::{SvgElement, SvgSurface};

    fn transform_for(points: &[Point]) -> PlotTransform {
        PlotTransform::compute(points, 100, 100, None, &PlotConfig::default()).unwrap()
    }

    #[test]
    fn test_draw_curve_single_polyline() {
        let points = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 2.0)];
        let t = transform_for(&points);

        let mut surface = SvgSurface::new(100, 100);
        draw_curve(&mut surface, &points, &t, Rgba::BLUE);

        assert_eq!(surface.elements().len(), 1);
        match &surface.elements()[0] {
            SvgElement::Polyline { points, stroke, stroke_linejoin } => {
                assert_eq!(points.len(), 3);
                assert_eq!(*stroke, Rgba::BLUE);
                assert_eq!(*stroke_linejoin, LineJoin::Round);
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_draw_curve_empty_is_noop() {
        let ref_points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let t = transform_for(&ref_points);
        let mut surface = SvgSurface::new(100, 100);
        draw_curve(&mut surface, &[], &t, Rgba::BLUE);
        assert!(surface.elements().is_empty());
    }

    #[test]
    fn test_draw_net_labels_each_line() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let t = transform_for(&points);
        let lines = [
            NetLine::new(Point::new(2.0, 0.0), Point::new(2.0, 10.0)),
            NetLine::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0)),
        ];

        let mut surface = SvgSurface::new(100, 100);
        draw_net(&mut surface, &lines, &t);

        let texts: Vec<&SvgElement> = surface
            .elements()
            .iter()
            .filter(|e| matches!(e, SvgElement::Text { .. }))
            .collect();
        assert_eq!(texts.len(), 2);

        // Vertical line x-value rendered to two decimals, horizontal raw.
        let labels: Vec<&str> = texts
            .iter()
            .map(|e| match e {
                SvgElement::Text { text, .. } => text.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert!(labels.contains(&"2.00"));
        assert!(labels.contains(&"5"));
    }

    #[test]
    fn test_draw_net_strokes_gray() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let t = transform_for(&points);
        let lines = [NetLine::new(Point::new(2.0, 0.0), Point::new(2.0, 10.0))];

        let mut surface = SvgSurface::new(100, 100);
        draw_net(&mut surface, &lines, &t);

        let stroke = surface.elements().iter().find_map(|e| match e {
            SvgElement::Polyline { stroke, .. } => Some(*stroke),
            _ => None,
        });
        assert_eq!(stroke, Some(Rgba::NET_GRAY));
    }
}
