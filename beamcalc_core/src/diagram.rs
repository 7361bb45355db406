//! Section diagram geometry
//!
//! Two rectangles describe a sized beam: the bounding box it was sized for,
//! and the beam outline across the span, centred vertically on `y_max` with
//! half the required depth above and below. Front ends draw these however
//! they like; [`SectionDiagram::to_svg`] is a ready-made rendering.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::calculations::SizingResult;
use crate::geometry::BoundingBox;

/// Axis-aligned rectangle in model coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_corners(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Rect {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionDiagram {
    /// Bounding box outline (thin)
    pub bounding_box: Rect,
    /// Beam outline (thick)
    pub beam: Rect,
}

impl SectionDiagram {
    pub fn new(bounding_box: &BoundingBox, result: &SizingResult) -> Self {
        let half_depth = result.depth / 2.0;
        SectionDiagram {
            bounding_box: Rect::from_corners(
                bounding_box.x_min,
                bounding_box.y_min,
                bounding_box.x_max,
                bounding_box.y_max,
            ),
            beam: Rect::from_corners(
                bounding_box.x_min,
                bounding_box.y_max - half_depth,
                bounding_box.x_max,
                bounding_box.y_max + half_depth,
            ),
        }
    }

    pub fn extents(&self) -> Rect {
        self.bounding_box.union(&self.beam)
    }

    /// Render as a standalone SVG document with equal aspect ratio.
    ///
    /// The view box is the diagram extents plus a 5% margin; y is flipped so
    /// the drawing reads with y up.
    pub fn to_svg(&self) -> String {
        let ext = self.extents();
        let margin = 0.05 * ext.width.max(ext.height);
        let view = Rect::from_corners(ext.x - margin, ext.y - margin, ext.right() + margin, ext.top() + margin);
        let stroke = view.width.max(view.height) / 400.0;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
            view.x,
            -view.top(),
            view.width,
            view.height
        );
        let _ = writeln!(svg, r#"  <g transform="scale(1,-1)" fill="none" stroke="black">"#);
        let _ = writeln!(svg, "    {}", rect_element(&self.bounding_box, stroke));
        let _ = writeln!(svg, "    {}", rect_element(&self.beam, 2.0 * stroke));
        let _ = writeln!(svg, "  </g>");
        svg.push_str("</svg>\n");
        svg
    }
}

fn rect_element(rect: &Rect, stroke_width: f64) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" stroke-width="{}"/>"#,
        rect.x, rect.y, rect.width, rect.height, stroke_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::size_beam;
    use crate::loads::LoadCase;
    use crate::materials::MaterialProperties;

    fn diagram() -> (BoundingBox, SizingResult, SectionDiagram) {
        let bbox = BoundingBox::new(0.0, 0.0, 6.0, 0.5);
        let result = size_beam(&bbox, &MaterialProperties::STRUCTURAL_STEEL, &LoadCase::uniform(10.0)).unwrap();
        let diagram = SectionDiagram::new(&bbox, &result);
        (bbox, result, diagram)
    }

    #[test]
    fn test_beam_centred_on_y_max() {
        let (bbox, result, diagram) = diagram();

        assert_eq!(diagram.beam.x, bbox.x_min);
        assert_eq!(diagram.beam.right(), bbox.x_max);
        assert!((diagram.beam.height - result.depth).abs() < 1e-12);
        let centre = diagram.beam.y + diagram.beam.height / 2.0;
        assert!((centre - bbox.y_max).abs() < 1e-12);
    }

    #[test]
    fn test_extents_cover_both() {
        let (_, _, diagram) = diagram();
        let ext = diagram.extents();

        assert!(ext.y <= diagram.beam.y);
        assert!(ext.top() >= diagram.beam.top());
        assert!(ext.y <= diagram.bounding_box.y);
        assert_eq!(ext.width, 6.0);
    }

    #[test]
    fn test_svg_has_two_rects() {
        let (_, _, diagram) = diagram();
        let svg = diagram.to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("scale(1,-1)"));
    }
}
