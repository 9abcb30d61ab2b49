pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod render;

pub use config::{BannerConfig, GradientConfig, OverlayConfig};
pub use models::{Axis, ChannelRamp, OverlayColor, RoundedRect};
pub use output::{encode_png, report_line, write_png};
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineStep};
pub use render::{BannerGenerator, build_standard_pipeline};
