//! Pixel-painting helpers for the snowflake sprite raster.

use bevy::prelude::*;

/// Composite `color` over `dst` with the given coverage in [0, 1].
fn blend_over(dst: &mut [u8; 4], color: [u8; 4], coverage: f32) {
    let src_a = (color[3] as f32 / 255.0) * coverage;
    if src_a <= 0.0 {
        return;
    }
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for i in 0..3 {
        let src_c = color[i] as f32 / 255.0;
        let dst_c = dst[i] as f32 / 255.0;
        let out_c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
        dst[i] = (out_c * 255.0).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Distance from `point` to the segment `a`..`b`.
fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Clamp a float coordinate range to valid pixel indices.
fn pixel_span(lo: f32, hi: f32, size: usize) -> (usize, usize) {
    let min = lo.floor().max(0.0) as usize;
    let max = (hi.ceil().max(0.0) as usize).min(size.saturating_sub(1));
    (min, max)
}

/// Paint an anti-aliased stroked line segment into the pixel buffer.
///
/// Coverage falls off over a half-pixel band around the stroke edge and is
/// alpha-composited over whatever is already in the buffer.
pub(crate) fn paint_line(
    pixels: &mut [[u8; 4]],
    size: usize,
    from: Vec2,
    to: Vec2,
    stroke_width: f32,
    color: [u8; 4],
) {
    let half = stroke_width / 2.0;
    let pad = half + 1.0;
    let (min_x, max_x) = pixel_span(from.x.min(to.x) - pad, from.x.max(to.x) + pad, size);
    let (min_y, max_y) = pixel_span(from.y.min(to.y) - pad, from.y.max(to.y) + pad, size);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let dist = segment_distance(center, from, to);
            let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_over(&mut pixels[py * size + px], color, coverage);
            }
        }
    }
}

/// Paint an anti-aliased filled disk into the pixel buffer.
pub(crate) fn paint_disk(
    pixels: &mut [[u8; 4]],
    size: usize,
    center: Vec2,
    radius: f32,
    color: [u8; 4],
) {
    let pad = radius + 1.0;
    let (min_x, max_x) = pixel_span(center.x - pad, center.x + pad, size);
    let (min_y, max_y) = pixel_span(center.y - pad, center.y + pad, size);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let point = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let coverage = (radius + 0.5 - point.distance(center)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_over(&mut pixels[py * size + px], color, coverage);
            }
        }
    }
}
