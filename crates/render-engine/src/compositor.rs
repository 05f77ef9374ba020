//! Logo compositor: overlays a logo onto a rendered QR bitmap.
//!
//! Everything here is pure. Callers hand in decoded images and receive an
//! RGBA canvas or encoded PNG bytes; nothing touches the filesystem.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use qreatify_common::error::{QreatifyError, QreatifyResult};
use qreatify_model::request::LogoSizePercent;

/// Where the logo lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Edge length of the (square) logo box.
    pub size: u32,
}

impl LogoPlacement {
    /// Centered square of `floor(canvas_size * percent / 100)` pixels.
    pub fn compute(canvas_size: u32, logo_size: LogoSizePercent) -> Self {
        let size = (u64::from(canvas_size) * u64::from(logo_size.get()) / 100) as u32;
        let offset = (canvas_size - size) / 2;
        Self {
            x: offset,
            y: offset,
            size,
        }
    }

    /// Exclusive bottom-right corner.
    pub fn end(&self) -> (u32, u32) {
        (self.x + self.size, self.y + self.size)
    }
}

/// Composite `bitmap` and an optional logo onto a fresh canvas.
///
/// The canvas edge is the bitmap's width; a non-square bitmap is stretched
/// to fill it.
pub fn composite_image(
    bitmap: &RgbaImage,
    logo: Option<&DynamicImage>,
    logo_size: LogoSizePercent,
) -> QreatifyResult<RgbaImage> {
    let canvas_size = bitmap.width();
    if canvas_size == 0 || bitmap.height() == 0 {
        return Err(QreatifyError::render("QR bitmap is empty"));
    }

    let mut canvas = if bitmap.height() == canvas_size {
        bitmap.clone()
    } else {
        imageops::resize(bitmap, canvas_size, canvas_size, FilterType::Nearest)
    };

    if let Some(logo) = logo {
        let placement = LogoPlacement::compute(canvas_size, logo_size);
        if placement.size > 0 {
            let scaled = logo
                .resize_exact(placement.size, placement.size, FilterType::Triangle)
                .to_rgba8();
            imageops::overlay(
                &mut canvas,
                &scaled,
                i64::from(placement.x),
                i64::from(placement.y),
            );
        }
    }

    Ok(canvas)
}

/// Encode an RGBA canvas as PNG.
pub fn encode_png(canvas: &RgbaImage) -> QreatifyResult<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Composite and encode in one step.
pub fn composite(
    bitmap: &RgbaImage,
    logo: Option<&DynamicImage>,
    logo_size: LogoSizePercent,
) -> QreatifyResult<Vec<u8>> {
    let canvas = composite_image(bitmap, logo, logo_size)?;
    encode_png(&canvas)
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use proptest::prelude::*;

    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, WHITE)
    }

    fn blue_logo() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(17, 17, BLUE))
    }

    #[test]
    fn placement_matches_reference_scenario() {
        let placement = LogoPlacement::compute(250, LogoSizePercent::new(20));
        assert_eq!(
            placement,
            LogoPlacement {
                x: 100,
                y: 100,
                size: 50
            }
        );
        assert_eq!(placement.end(), (150, 150));
    }

    #[test]
    fn no_logo_leaves_bitmap_untouched() {
        let mut bitmap = blank(64);
        bitmap.put_pixel(3, 4, BLUE);
        let canvas = composite_image(&bitmap, None, LogoSizePercent::new(30)).unwrap();
        assert_eq!(canvas, bitmap);
    }

    #[test]
    fn logo_covers_exactly_its_box() {
        let canvas =
            composite_image(&blank(250), Some(&blue_logo()), LogoSizePercent::new(20)).unwrap();

        assert_eq!(canvas.get_pixel(100, 100), &BLUE);
        assert_eq!(canvas.get_pixel(149, 149), &BLUE);
        assert_eq!(canvas.get_pixel(99, 100), &WHITE);
        assert_eq!(canvas.get_pixel(150, 149), &WHITE);
        assert_eq!(canvas.get_pixel(125, 99), &WHITE);
    }

    #[test]
    fn transparent_logo_pixels_show_the_qr() {
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));
        let canvas = composite_image(&blank(100), Some(&logo), LogoSizePercent::new(30)).unwrap();
        assert_eq!(canvas.get_pixel(50, 50), &WHITE);
    }

    #[test]
    fn non_square_bitmap_is_stretched_to_width() {
        let bitmap = RgbaImage::from_pixel(40, 20, WHITE);
        let canvas = composite_image(&bitmap, None, LogoSizePercent::DEFAULT).unwrap();
        assert_eq!(canvas.dimensions(), (40, 40));
    }

    #[test]
    fn empty_bitmap_is_an_error() {
        let bitmap = RgbaImage::new(0, 0);
        assert!(composite_image(&bitmap, None, LogoSizePercent::DEFAULT).is_err());
    }

    #[test]
    fn composite_produces_png() {
        let bytes = composite(&blank(32), Some(&blue_logo()), LogoSizePercent::new(25)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 32);
    }

    proptest! {
        #[test]
        fn placement_is_floor_and_centered(size in 1u32..2048, percent in 10u32..=30) {
            let placement = LogoPlacement::compute(size, LogoSizePercent::new(percent));
            prop_assert_eq!(placement.size, size * percent / 100);
            prop_assert_eq!(placement.x, (size - placement.size) / 2);
            prop_assert_eq!(placement.y, placement.x);
            prop_assert!(placement.end().0 <= size);
        }
    }
}
