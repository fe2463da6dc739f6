use crate::constants::LINK_RGB;
use crate::core::constants::{LINK_LINE_WIDTH, NODE_ALPHA};
use crate::core::ParticleField;
use std::f64::consts::TAU;
use web_sys as web;

/// Clear the canvas and draw every node, then the links between neighbours.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

    ctx.set_global_alpha(NODE_ALPHA);
    for node in field.nodes() {
        ctx.begin_path();
        _ = ctx.arc(
            node.position.x as f64,
            node.position.y as f64,
            node.radius as f64,
            0.0,
            TAU,
        );
        ctx.set_fill_style_str(node.color.css());
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);

    ctx.set_line_width(LINK_LINE_WIDTH);
    let (r, g, b) = LINK_RGB;
    for link in field.links() {
        ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, link.alpha));
        ctx.begin_path();
        ctx.move_to(link.from.x as f64, link.from.y as f64);
        ctx.line_to(link.to.x as f64, link.to.y as f64);
        ctx.stroke();
    }
}
