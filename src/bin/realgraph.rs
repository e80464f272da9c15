use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use realgraph::{GraphOpts, LineGraph, ProgressionMode};

#[derive(Parser, Debug)]
#[command(name = "realgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot a series and write the final buffer as a PNG.
    Plot(PlotArgs),
    /// Plot a series and print the final visible window as JSON.
    Limits(SeriesArgs),
}

#[derive(Parser, Debug)]
struct SeriesArgs {
    /// Graph options JSON (camelCase fields; missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text file with one sample per line (blank lines and `#` comments are skipped).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Generated waveform used when `--data` is not given.
    #[arg(long, value_enum, default_value_t = Wave::Sine)]
    wave: Wave,

    /// Number of generated samples.
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Override the progression mode from the config.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Render kernels on the calling thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Ticks issued after each sample (continuous mode).
    #[arg(long, default_value_t = 1)]
    draws_per_sample: u32,
}

#[derive(Parser, Debug)]
struct PlotArgs {
    #[command(flatten)]
    series: SeriesArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Wave {
    Sine,
    Saw,
    Square,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Overflow,
    Continuous,
    Squeeze,
}

impl From<ModeChoice> for ProgressionMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Overflow => Self::Overflow,
            ModeChoice::Continuous => Self::Continuous,
            ModeChoice::Squeeze => Self::Squeeze,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plot(args) => cmd_plot(args),
        Command::Limits(args) => cmd_limits(args),
    }
}

fn cmd_plot(args: PlotArgs) -> anyhow::Result<()> {
    let graph = run_series(&args.series)?;
    let pixels = graph.pixels();
    let dims = pixels.dimensions();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &pixels.to_rgba8(),
        dims.width,
        dims.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_limits(args: SeriesArgs) -> anyhow::Result<()> {
    let graph = run_series(&args)?;
    println!("{}", serde_json::to_string_pretty(graph.limits())?);
    Ok(())
}

fn run_series(args: &SeriesArgs) -> anyhow::Result<LineGraph> {
    let mut opts = match &args.config {
        Some(path) => GraphOpts::from_path(path)?,
        None => GraphOpts::default(),
    };
    if let Some(mode) = args.mode {
        opts.progression_mode = mode.into();
    }
    if args.sequential {
        opts.threading.parallel = false;
    }
    if args.threads.is_some() {
        opts.threading.threads = args.threads;
    }

    let values = match &args.data {
        Some(path) => read_samples(path)?,
        None => generate(args.wave, args.samples),
    };

    let mut graph = LineGraph::new(opts).context("build graph")?;
    for (i, v) in values.into_iter().enumerate() {
        graph
            .add_data(v)
            .with_context(|| format!("add sample #{i} ({v})"))?;
        graph.draw(args.draws_per_sample)?;
    }
    Ok(graph)
}

fn read_samples(path: &Path) -> anyhow::Result<Vec<f64>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read samples '{}'", path.display()))?;
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let v: f64 = line
            .parse()
            .with_context(|| format!("{}:{}: not a number: '{line}'", path.display(), lineno + 1))?;
        out.push(v);
    }
    Ok(out)
}

fn generate(wave: Wave, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = i as f64 / 40.0;
            match wave {
                Wave::Sine => 200.0 * (phase * std::f64::consts::TAU).sin(),
                Wave::Saw => 400.0 * (phase - phase.floor()) - 200.0,
                Wave::Square => {
                    if phase.fract() < 0.5 {
                        150.0
                    } else {
                        -150.0
                    }
                }
            }
        })
        .collect()
}
