use image::{Rgb, RgbImage};
use random_banner::{BannerConfig, BannerGenerator};

/// Seed used where two renders must share the same gradient
pub const TEST_SEED: u64 = 0x5eed;

/// Renders the full default banner with a fixed seed
pub fn render_seeded(seed: u64) -> RgbImage {
    BannerGenerator::new(BannerConfig::default().with_seed(Some(seed)))
        .generate()
        .expect("Failed to render banner")
}

/// Renders only the gradient background with a fixed seed
pub fn background_seeded(seed: u64) -> RgbImage {
    BannerGenerator::new(BannerConfig::default().with_seed(Some(seed)))
        .background()
        .expect("Failed to render background")
}

/// Sum of the three channels, as a brightness proxy
pub fn brightness(pixel: &Rgb<u8>) -> u32 {
    pixel.0.iter().map(|&c| c as u32).sum()
}

/// Mean brightness over the inclusive row range [y0, y1] and column range [x0, x1]
pub fn mean_brightness(img: &RgbImage, x0: u32, x1: u32, y0: u32, y1: u32) -> f64 {
    let mut sum = 0u64;
    let mut count = 0u64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            sum += brightness(img.get_pixel(x, y)) as u64;
            count += 1;
        }
    }
    sum as f64 / count as f64
}
