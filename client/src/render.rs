use web_sys::CanvasRenderingContext2d;

use folioboard_shared::geometry::path_bounds;
use folioboard_shared::{CanvasEngine, DrawingObject, Point};

pub fn draw_dot(ctx: &CanvasRenderingContext2d, point: Point, color: &str, width: f32) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(
        point.x as f64,
        point.y as f64,
        width as f64 / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    ctx.fill();
}

pub fn draw_path(ctx: &CanvasRenderingContext2d, points: &[Point], color: &str, width: f32) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        draw_dot(ctx, *first, color, width);
        return;
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width as f64);
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for point in rest {
        ctx.line_to(point.x as f64, point.y as f64);
    }
    ctx.stroke();
}

pub fn draw_object(ctx: &CanvasRenderingContext2d, object: &DrawingObject) {
    draw_path(ctx, &object.points, &object.color, object.width);
}

/// Repaints the whole canvas. `decorate` adds the selection frame, which
/// exports leave out.
pub fn redraw(ctx: &CanvasRenderingContext2d, engine: &CanvasEngine, decorate: bool) {
    ctx.set_fill_style_str(engine.background());
    ctx.fill_rect(0.0, 0.0, engine.width(), engine.height());
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    for object in engine.objects() {
        draw_object(ctx, object);
    }
    if let Some(points) = engine.active_path() {
        let brush = engine.brush();
        draw_path(ctx, points, &brush.color, brush.width);
    }
    if decorate {
        if let Some(object) = engine.selected() {
            draw_selection_overlay(ctx, object);
        }
    }
}

fn draw_selection_overlay(ctx: &CanvasRenderingContext2d, object: &DrawingObject) {
    let Some(bounds) = path_bounds(&object.points) else {
        return;
    };
    let bounds = bounds.expand(object.width as f64 / 2.0 + 2.0);
    ctx.save();
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str("rgba(26, 31, 42, 0.65)");
    let _ = ctx.set_line_dash(&js_sys::Array::of2(&4.into(), &4.into()));
    ctx.stroke_rect(bounds.min_x, bounds.min_y, bounds.width(), bounds.height());
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    let handle = 8.0;
    draw_handle(ctx, bounds.min_x, bounds.min_y, handle);
    draw_handle(ctx, bounds.max_x, bounds.min_y, handle);
    draw_handle(ctx, bounds.min_x, bounds.max_y, handle);
    draw_handle(ctx, bounds.max_x, bounds.max_y, handle);
    ctx.restore();
}

fn draw_handle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64) {
    let half = size / 2.0;
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(x - half, y - half, size, size);
    ctx.set_stroke_style_str("rgba(26, 31, 42, 0.85)");
    ctx.stroke_rect(x - half, y - half, size, size);
}
