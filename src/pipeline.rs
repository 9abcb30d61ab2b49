use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::Result;
use log::{debug, info};

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    /// Whether debug mode is enabled
    pub enabled: bool,
}

impl DebugConfig {
    /// Save the image produced by a step as `NN_step_name.png`
    fn save_step(&self, step_index: usize, step_name: &str, image: &RgbImage) -> Result<PathBuf> {
        let filename = format!("{:02}_{}.png", step_index,
            step_name.to_lowercase().replace(' ', "_"));
        let output_path = self.output_dir.join(filename);

        image.save(&output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image {}: {}", output_path.display(), e))?;

        Ok(output_path)
    }
}

/// Context available to all pipeline steps
#[derive(Clone, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Transform the canvas in place
    fn process(&self, image: &mut RgbImage, context: &PipelineContext) -> Result<()>;

    /// Human-readable name for this step (used in logs and debug filenames)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        ensure_empty_dir(&output_dir)?;

        self.context.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step over the canvas, in order
    pub fn run(&self, canvas: RgbImage) -> Result<RgbImage> {
        self.run_partial(canvas, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, mut canvas: RgbImage, num_steps: usize) -> Result<RgbImage> {
        if let Some(debug_config) = self.active_debug() {
            let path = debug_config.save_step(0, "input", &canvas)?;
            debug!("Debug: saved {}", path.display());
        }

        for (step_idx, step) in self.steps.iter().take(num_steps).enumerate() {
            if self.context.verbose {
                info!("Running step {}: {}", step_idx + 1, step.name());
            }

            step.process(&mut canvas, &self.context)?;

            if let Some(debug_config) = self.active_debug() {
                let path = debug_config.save_step(step_idx + 1, step.name(), &canvas)?;
                debug!("Debug: saved {}", path.display());
            }
        }

        Ok(canvas)
    }

    fn active_debug(&self) -> Option<&DebugConfig> {
        self.context.debug.as_ref().filter(|d| d.enabled)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_empty_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        let entries = std::fs::read_dir(dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }

    Ok(())
}
