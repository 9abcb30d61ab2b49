use image::Rgb;

use crate::models::{Axis, ChannelRamp, OverlayColor, RoundedRect};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 630;
pub const DEFAULT_OUTPUT: &str = "random-banner.png";

/// Per-channel gradient ramps plus the upper bound of the uniform jitter
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    pub red: ChannelRamp,
    pub green: ChannelRamp,
    pub blue: ChannelRamp,
    /// Each channel gets an independent draw from [0, jitter]
    pub jitter: u8,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            red: ChannelRamp::new(40.0, 40.0, Axis::X),
            green: ChannelRamp::new(80.0, 80.0, Axis::Y),
            blue: ChannelRamp::new(150.0, 60.0, Axis::Diagonal),
            jitter: 30,
        }
    }
}

/// Horizontal bars stacked at a fixed pitch
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub count: u32,
    pub left: i32,
    pub right: i32,
    pub first_top: i32,
    pub pitch: i32,
    /// Distance from a bar's top edge to its bottom edge
    pub height: i32,
    pub radius: i32,
    pub fill: OverlayColor,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            count: 6,
            left: 80,
            right: 1120,
            first_top: 50,
            pitch: 90,
            height: 60,
            radius: 20,
            fill: OverlayColor {
                color: Rgb([255, 255, 255]),
                alpha: 40,
            },
        }
    }
}

impl OverlayConfig {
    pub fn bars(&self) -> Vec<RoundedRect> {
        (0..self.count as i32)
            .map(|i| {
                let top = self.first_top + i * self.pitch;
                RoundedRect {
                    left: self.left,
                    top,
                    right: self.right,
                    bottom: top + self.height,
                    radius: self.radius,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerConfig {
    pub width: u32,
    pub height: u32,
    pub gradient: GradientConfig,
    pub overlay: OverlayConfig,
    /// None draws jitter from OS entropy, so every run differs
    pub seed: Option<u64>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gradient: GradientConfig::default(),
            overlay: OverlayConfig::default(),
            seed: None,
        }
    }
}

impl BannerConfig {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
