use crate::config::{GradientConfig, OverlayConfig};
use crate::pipeline::{PipelineContext, PipelineStep};
use crate::render::{gradient, overlay};
use anyhow::Result;
use image::RgbImage;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fill the canvas with the jittered color gradient
pub struct GradientStep {
    pub config: GradientConfig,
    /// Fixed seed for reproducible output; None uses OS entropy
    pub seed: Option<u64>,
}

impl GradientStep {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl PipelineStep for GradientStep {
    fn process(&self, image: &mut RgbImage, context: &PipelineContext) -> Result<()> {
        let mut rng = self.rng();
        gradient::fill_gradient(image, &self.config, &mut rng);

        if context.verbose {
            debug!("Filled {}x{} gradient (seed: {:?})", image.width(), image.height(), self.seed);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient Fill"
    }
}

/// Draw translucent rounded bars over the canvas
pub struct OverlayBarsStep {
    pub config: OverlayConfig,
}

impl PipelineStep for OverlayBarsStep {
    fn process(&self, image: &mut RgbImage, context: &PipelineContext) -> Result<()> {
        for bar in self.config.bars() {
            overlay::draw_rounded_rect_blended(image, &bar, self.config.fill);

            if context.verbose {
                debug!("Drew bar at y={}..={}", bar.top, bar.bottom);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Overlay Bars"
    }
}
