use eframe::egui::Context;

/// Converts a quantity of pixels to the equivalent quantity of points.
pub fn pixels_to_points(ctx: &Context, pixels: f32) -> f32 {
    pixels / ctx.native_pixels_per_point().unwrap_or(1.0)
}
