pub mod gradient;
pub mod overlay;
pub mod steps;

use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::BannerConfig;
use crate::pipeline::Pipeline;

/// Main banner rendering orchestrator
pub struct BannerGenerator {
    pub config: BannerConfig,
    pub verbose: bool,
    pub debug_dir: Option<PathBuf>,
}

impl BannerGenerator {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            config,
            verbose: false,
            debug_dir: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Save each intermediate canvas into `dir` (must be empty or absent)
    pub fn with_debug(mut self, dir: Option<PathBuf>) -> Self {
        self.debug_dir = dir;
        self
    }

    /// Allocate a blank canvas of the configured size
    pub fn canvas(&self) -> RgbImage {
        RgbImage::new(self.config.width, self.config.height)
    }

    /// Render the full banner: gradient, then overlay bars
    pub fn generate(&self) -> anyhow::Result<RgbImage> {
        let mut pipeline = build_standard_pipeline(&self.config, self.verbose);
        if let Some(dir) = &self.debug_dir {
            pipeline = pipeline.with_debug(dir.clone())?;
        }

        pipeline.run(self.canvas())
    }

    /// Render only the gradient background (for inspection)
    pub fn background(&self) -> anyhow::Result<RgbImage> {
        build_standard_pipeline(&self.config, self.verbose).run_partial(self.canvas(), 1)
    }
}

impl Default for BannerGenerator {
    fn default() -> Self {
        Self::new(BannerConfig::default())
    }
}

/// Build the standard banner pipeline using the composable pipeline system
pub fn build_standard_pipeline(config: &BannerConfig, verbose: bool) -> Pipeline {
    use crate::render::steps::*;

    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(GradientStep {
            config: config.gradient.clone(),
            seed: config.seed,
        }))
        .add_step(Arc::new(OverlayBarsStep {
            config: config.overlay.clone(),
        }))
}
