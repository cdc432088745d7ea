//! `wsvg` - make an SVG file look hand-drawn.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic};
use waggly_svg::Config;
use waggly_svg::config::{DEFAULT_WOBBLE_INTERVAL, DEFAULT_WOBBLE_SIZE};

#[derive(Parser, Debug)]
#[command(name = "wsvg", version, about = "Turn straight SVG strokes into wobbly, hand-drawn ones")]
struct Args {
    /// SVG file to read
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the result (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Apply the wobble; without it the input is echoed unchanged
    #[arg(short, long)]
    waggly: bool,

    /// Distance between resampled points, in pixels
    #[arg(long, default_value_t = DEFAULT_WOBBLE_INTERVAL)]
    interval: f64,

    /// Maximum random offset per axis, in pixels
    #[arg(long, default_value_t = DEFAULT_WOBBLE_SIZE)]
    size: f64,

    /// Font family forced onto every <text> element
    #[arg(long)]
    font_family: Option<String>,

    /// Font size used together with --font-family
    #[arg(long, requires = "font_family")]
    font_size: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Log what gets rewritten (to stderr)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::new()
            .with_waggly(self.waggly)
            .with_wobble_interval(self.interval)
            .with_wobble_size(self.size);
        if let Some(family) = &self.font_family {
            config = config.with_font_family(family);
        }
        if let Some(size) = &self.font_size {
            config = config.with_font_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut result = None;
    let mut transformer = waggly_svg::create(args.config(), |svg| result = Some(svg));
    transformer.transform_source(&args.input)?;
    drop(transformer);

    let Some(svg) = result else {
        return Err(miette::miette!("transformation finished without output"));
    };

    match &args.output {
        Some(path) => std::fs::write(path, svg)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes()).into_diagnostic()?;
            stdout.write_all(b"\n").into_diagnostic()?;
        }
    }

    Ok(())
}
