use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use random_banner::config::DEFAULT_OUTPUT;
use random_banner::{BannerConfig, BannerGenerator, report_line, write_png};

#[derive(Parser)]
#[command(name = "random-banner")]
#[command(about = "Generate a 1200x630 gradient banner with translucent bars")]
struct Cli {
    /// Path of the PNG to write
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed the jitter for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save each render step to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn init_logger(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}:{}] {}",
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let config = BannerConfig::default().with_seed(args.seed);
    info!("Rendering {}x{} banner", config.width, config.height);

    let banner = BannerGenerator::new(config)
        .with_verbose(args.verbose)
        .with_debug(args.debug_out)
        .generate()?;

    let size = write_png(&banner, &args.output)?;
    println!("{}", report_line(&args.output, size));

    Ok(())
}
