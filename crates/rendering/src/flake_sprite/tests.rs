#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy::render::render_resource::TextureFormat;

    use crate::flake_sprite::{generate_flake_image, SPRITE_SIZE};

    fn pixel(image: &Image, x: u32, y: u32) -> [u8; 4] {
        let data = &image.data;
        let idx = ((y * SPRITE_SIZE + x) * 4) as usize;
        [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
    }

    #[test]
    fn image_has_expected_dimensions_and_format() {
        let image = generate_flake_image();
        assert_eq!(image.width(), SPRITE_SIZE);
        assert_eq!(image.height(), SPRITE_SIZE);
        assert_eq!(image.texture_descriptor.format, TextureFormat::Rgba8UnormSrgb);
        assert_eq!(image.data.len(), (SPRITE_SIZE * SPRITE_SIZE * 4) as usize);
    }

    #[test]
    fn generation_is_idempotent() {
        // The raster is pure arithmetic over constants; two builds must
        // agree byte for byte.
        assert_eq!(generate_flake_image().data, generate_flake_image().data);
    }

    #[test]
    fn corners_stay_transparent() {
        let image = generate_flake_image();
        let edge = SPRITE_SIZE - 1;
        for (x, y) in [(0, 0), (edge, 0), (0, edge), (edge, edge)] {
            assert_eq!(pixel(&image, x, y)[3], 0, "corner ({x}, {y}) was painted");
        }
    }

    #[test]
    fn hub_is_solid_white() {
        let image = generate_flake_image();
        // The highlight pass covers the hub completely, so the sprite
        // midpoint reads back as opaque white.
        let center = SPRITE_SIZE / 2;
        assert_eq!(pixel(&image, center, center), [255, 255, 255, 255]);
    }

    #[test]
    fn stroke_fringe_shows_the_blue_underlayer() {
        let image = generate_flake_image();
        // The shadow stroke is wider than the highlight stroke. One and a
        // half pixels off the vertical arm, near its top and far from every
        // other arm, only the blue pass has coverage.
        let px = pixel(&image, SPRITE_SIZE / 2 + 1, 9);
        assert!(px[3] > 0, "expected shadow coverage at the stroke fringe");
        assert!(
            px[2] > px[0],
            "fringe pixel {px:?} should lean blue, not white"
        );
    }

    #[test]
    fn glyph_is_fourfold_symmetric() {
        let image = generate_flake_image();
        // Both diagonal and axis arms are symmetric under a quarter turn
        // about the raster center.
        for (x, y) in [(10, 10), (16, 8), (12, 16)] {
            let turned = (SPRITE_SIZE - 1 - y, x);
            assert_eq!(
                pixel(&image, x, y),
                pixel(&image, turned.0, turned.1),
                "pixel ({x}, {y}) differs from its quarter-turn image"
            );
        }
    }
}
