use image::{Rgb, RgbImage};
use rand::Rng;

use crate::config::GradientConfig;
use crate::models::ChannelRamp;

impl GradientConfig {
    /// Color at (x, y) for a given set of per-channel jitters
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32, jitter: [i32; 3]) -> Rgb<u8> {
        let channel = |ramp: &ChannelRamp, u: i32| {
            ramp.value(ramp.axis.position(x, y, width, height), u)
        };

        Rgb([
            channel(&self.red, jitter[0]),
            channel(&self.green, jitter[1]),
            channel(&self.blue, jitter[2]),
        ])
    }
}

/// Fill every pixel with the gradient, drawing three independent jitters per pixel
pub fn fill_gradient<R: Rng + ?Sized>(img: &mut RgbImage, config: &GradientConfig, rng: &mut R) {
    let (width, height) = img.dimensions();
    let max = config.jitter as i32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let jitter = [
            rng.random_range(0..=max),
            rng.random_range(0..=max),
            rng.random_range(0..=max),
        ];
        *pixel = config.color_at(x, y, width, height, jitter);
    }
}
