use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{Packing, SPInstance};
use crate::io::svg::SvgDrawOptions;

/// Renders a packing as an SVG document: the strip outline, one box per placed
/// rectangle (with a tooltip stating its shelf and position) and a label line
/// with the key figures of the packing.
///
/// Consumes the pure packing data only; nothing here depends on a display context.
pub fn packing_to_svg(
    packing: &Packing,
    instance: &SPInstance,
    options: &SvgDrawOptions,
    title: &str,
) -> Document {
    let width = packing.strip_width;
    let height = f32::max(packing.height, 1.0);

    let stroke_width = f32::min(width, height) * 0.001 * options.stroke_width_multiplier;

    //print some information above the left top of the strip
    let label = {
        let label_content = format!(
            "height: {:.3} | width: {:.3} | density: {:.3}% | {}",
            packing.height,
            width,
            packing.density(instance) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * f32::min(width, height))
            .set("font-size", f32::min(width, height) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let strip_outline = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", width)
        .set("height", packing.height)
        .set("fill", options.strip_fill.as_str())
        .set("stroke", options.stroke.as_str())
        .set("stroke-width", 2.0 * stroke_width);

    let mut rect_group = Group::new().set("id", "rects");
    for (shelf_idx, shelf) in packing.shelves.iter().enumerate() {
        for pr in &shelf.rects {
            let tooltip = Title::new(format!(
                "shelf {}, x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}",
                shelf_idx, pr.x, pr.y, pr.rect.width, pr.rect.height
            ));
            let rect_box = Rectangle::new()
                .set("x", pr.x)
                .set("y", pr.y)
                .set("width", pr.rect.width)
                .set("height", pr.rect.height)
                .set("fill", options.rect_fill.as_str())
                .set("stroke", options.stroke.as_str())
                .set("stroke-width", stroke_width)
                .add(tooltip);
            rect_group = rect_group.add(rect_box);
        }
    }

    let margin = 0.05 * f32::max(width, height);
    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                width + 2.0 * margin,
                height + 2.0 * margin,
            ),
        )
        .add(strip_outline)
        .add(rect_group)
        .add(label)
}
