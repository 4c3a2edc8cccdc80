//! RGBA colors and HSV conversion.

/// A linear RGBA color with channels in `[0, 1]`.
///
/// Laid out as four `f32`s so it can be written directly into a uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Rgba> for wgpu::Color {
    fn from(c: Rgba) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

/**
 * Convert hue, saturation and value (each expected in `[0, 1]`) to an opaque RGBA color.
 *
 * Out-of-range inputs are not rejected; the clamp on the hue ramps keeps the
 * result finite but it is not a meaningful color.
 */
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgba {
    let h = hue * 6.0;

    let r = ((h - 3.0).abs() - 1.0).clamp(0.0, 1.0);
    let g = (2.0 - (h - 2.0).abs()).clamp(0.0, 1.0);
    let b = (2.0 - (h - 4.0).abs()).clamp(0.0, 1.0);

    let blend = |c: f32| ((c - 1.0) * saturation + 1.0) * value;

    Rgba::new(blend(r), blend(g), blend(b), 1.0)
}

/// The `index`-th of `count` evenly spaced, fully saturated hues.
///
/// Used to tell primitives apart when a model has no materials.
pub fn distinct_color(index: usize, count: usize) -> Rgba {
    let count = count.max(1);
    hsv_to_rgb(index as f32 / count as f32, 1.0, 1.0)
}
