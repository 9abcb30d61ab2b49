use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::models::{OverlayColor, RoundedRect};

const COVERED: Luma<u8> = Luma([255]);

/// Composite one channel: `bg * (1 - a) + fg * a`, with a = alpha / 255
pub fn blend_channel(bg: u8, fg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((bg as u32 * (255 - a) + fg as u32 * a + 127) / 255) as u8
}

pub fn blend_pixel(bg: Rgb<u8>, fill: OverlayColor) -> Rgb<u8> {
    Rgb([
        blend_channel(bg[0], fill.color[0], fill.alpha),
        blend_channel(bg[1], fill.color[1], fill.alpha),
        blend_channel(bg[2], fill.color[2], fill.alpha),
    ])
}

/// Coverage mask of a rounded rectangle: two crossing bands plus four corner discs
pub fn rounded_rect_mask(width: u32, height: u32, rect: &RoundedRect) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if rect.width() == 0 || rect.height() == 0 {
        return mask;
    }

    let r = rect.effective_radius();
    let inner_width = rect.width() - 2 * r as u32;
    let inner_height = rect.height() - 2 * r as u32;

    // Full-width band between the corner arcs
    draw_filled_rect_mut(
        &mut mask,
        Rect::at(rect.left, rect.top + r).of_size(rect.width(), inner_height),
        COVERED,
    );
    // Full-height band between the corner arcs
    draw_filled_rect_mut(
        &mut mask,
        Rect::at(rect.left + r, rect.top).of_size(inner_width, rect.height()),
        COVERED,
    );

    if r > 0 {
        for center in rect.corner_centers() {
            draw_filled_circle_mut(&mut mask, center, r, COVERED);
        }
    }

    mask
}

/// Blend `fill` over every pixel the rounded rectangle covers; off-canvas parts are clipped
pub fn draw_rounded_rect_blended(img: &mut RgbImage, rect: &RoundedRect, fill: OverlayColor) {
    let (width, height) = img.dimensions();
    let mask = rounded_rect_mask(width, height, rect);

    for (pixel, coverage) in img.pixels_mut().zip(mask.pixels()) {
        if coverage[0] > 0 {
            *pixel = blend_pixel(*pixel, fill);
        }
    }
}
