mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from random_banner for tests
#[allow(unused_imports)]
pub use random_banner::{
    Axis, BannerConfig, BannerGenerator, ChannelRamp, GradientConfig, OverlayColor, OverlayConfig,
    Pipeline, PipelineContext, PipelineStep, RoundedRect,
};
