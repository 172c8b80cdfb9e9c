//! Row thumbnail rendering for the stack list.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Edge length of the square row thumbnails.
pub const ICON_SIZE: u32 = 48;

/// Render a preset's row thumbnail.
///
/// The source image is scaled to fit [`ICON_SIZE`] keeping its aspect ratio
/// and centered on a white square. Presets without an image get the plain
/// white square.
pub fn preset_icon(source: Option<&RgbaImage>) -> RgbaImage {
    let mut icon = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([255, 255, 255, 255]));
    let Some(source) = source else {
        return icon;
    };
    if source.width() == 0 || source.height() == 0 {
        return icon;
    }

    let scale = (ICON_SIZE as f32 / source.width() as f32)
        .min(ICON_SIZE as f32 / source.height() as f32);
    let width = ((source.width() as f32 * scale).round() as u32).clamp(1, ICON_SIZE);
    let height = ((source.height() as f32 * scale).round() as u32).clamp(1, ICON_SIZE);

    let scaled = imageops::resize(source, width, height, FilterType::Triangle);
    let x = i64::from((ICON_SIZE - width) / 2);
    let y = i64::from((ICON_SIZE - height) / 2);
    imageops::overlay(&mut icon, &scaled, x, y);
    icon
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_missing_image_yields_blank_icon() {
        let icon = preset_icon(None);
        assert_eq!(icon.dimensions(), (ICON_SIZE, ICON_SIZE));
        assert!(icon.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_square_source_fills_the_icon() {
        let source = RgbaImage::from_pixel(16, 16, RED);
        let icon = preset_icon(Some(&source));
        assert_eq!(icon.dimensions(), (ICON_SIZE, ICON_SIZE));
        assert_eq!(*icon.get_pixel(0, 0), RED);
        assert_eq!(*icon.get_pixel(24, 24), RED);
        assert_eq!(*icon.get_pixel(47, 47), RED);
    }

    #[test]
    fn test_wide_source_is_centered_with_padding() {
        // 96x24 scales to 48x12, leaving 18 white rows above and below.
        let source = RgbaImage::from_pixel(96, 24, RED);
        let icon = preset_icon(Some(&source));

        assert_eq!(*icon.get_pixel(24, 2), WHITE);
        assert_eq!(*icon.get_pixel(24, 45), WHITE);
        assert_eq!(*icon.get_pixel(24, 24), RED);
        assert_eq!(*icon.get_pixel(0, 24), RED);
        assert_eq!(*icon.get_pixel(47, 24), RED);
    }

    #[test]
    fn test_small_source_is_scaled_up() {
        let source = RgbaImage::from_pixel(2, 2, RED);
        let icon = preset_icon(Some(&source));
        assert_eq!(*icon.get_pixel(24, 24), RED);
    }
}
