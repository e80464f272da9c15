use std::time::{Duration, Instant};

use anyhow::Context as _;
use realgraph::{GraphOpts, LineGraph, LineStyle, ProgressionMode, Threading};
use serde_json::json;
use sha2::Digest as _;

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    samples: u32,
    warmup: u32,
    repeats: u32,
    mode: ProgressionMode,
    style: LineStyle,
    parallel: bool,
    threads: Option<usize>,
    json: bool,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    graph_create: Duration,
    add_data_total: Duration,
    draw_total: Duration,
    wall_total: Duration,
    progress: u64,
    digest: String,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("--width/--height must be > 0");
    }
    if args.samples == 0 || args.repeats == 0 {
        anyhow::bail!("--samples and --repeats must be > 0");
    }

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for _ in 0..args.warmup {
            let _ = run_once(&args)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), {samples} samples/run, {width}x{height}, mode={mode:?}, style={style:?}, dispatch={dispatch}, threads={threads}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        samples = args.samples,
        width = args.width,
        height = args.height,
        mode = args.mode,
        style = args.style,
        dispatch = if args.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = args
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
    );

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    for _ in 0..args.repeats {
        runs.push(run_once(&args)?);
    }

    // Every repeat renders the same series; differing digests mean nondeterministic kernels.
    let first = &runs[0].digest;
    if let Some(bad) = runs.iter().find(|r| &r.digest != first) {
        anyhow::bail!("output digest changed between runs: {first} vs {}", bad.digest);
    }

    report_percentiles(&runs);
    if args.json {
        print_json(&args, &runs)?;
    }
    Ok(())
}

fn opts_for(args: &BenchArgs) -> GraphOpts {
    let mut opts = GraphOpts {
        progression_mode: args.mode,
        line_style: args.style,
        x_scale_factor: 4.0,
        y_scale_factor: f64::from(args.height) / 500.0,
        x_offset: 50.0,
        threading: Threading {
            parallel: args.parallel,
            threads: args.threads,
        },
        ..GraphOpts::default()
    };
    opts.dimensions.width = args.width;
    opts.dimensions.height = args.height;
    opts
}

fn run_once(args: &BenchArgs) -> anyhow::Result<RunMetrics> {
    let mut m = RunMetrics::default();
    let wall = Instant::now();

    let t0 = Instant::now();
    let mut graph = LineGraph::new(opts_for(args)).context("build graph")?;
    m.graph_create = t0.elapsed();

    for i in 0..args.samples {
        let v = 200.0 * (f64::from(i) / 25.0).sin();

        let t = Instant::now();
        graph
            .add_data(v)
            .with_context(|| format!("add sample #{i}"))?;
        m.add_data_total += t.elapsed();

        let t = Instant::now();
        graph.draw(1)?;
        m.draw_total += t.elapsed();
    }

    m.wall_total = wall.elapsed();
    m.progress = graph.progress_count();
    m.digest = sha256_hex(&graph.pixels().to_rgba8());
    Ok(m)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 800,
        height: 600,
        samples: 500,
        warmup: 1,
        repeats: 20,
        mode: ProgressionMode::Overflow,
        style: LineStyle::AntiAliased,
        parallel: false,
        threads: None,
        json: false,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--samples" => out.samples = parse_u32(args.next(), "--samples")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--mode" => {
                let v = args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --mode (overflow|continuous|squeeze)")
                })?;
                out.mode = match v.as_str() {
                    "overflow" => ProgressionMode::Overflow,
                    "continuous" => ProgressionMode::Continuous,
                    "squeeze" => ProgressionMode::Squeeze,
                    _ => anyhow::bail!(
                        "unknown --mode '{v}' (expected overflow|continuous|squeeze)"
                    ),
                };
            }
            "--hard-edge" => out.style = LineStyle::HardEdge,
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--json" => out.json = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"realgraph-bench

Pushes a sine series through a graph repeatedly and reports p50/p90/p99 per stage.

Usage:
  cargo run -q --release
  cargo run -q --release -- --samples 1000 --mode squeeze
  cargo run -q --release -- --parallel --threads 4

Args:
  --width N        (default 800)
  --height N       (default 600)
  --samples N      (default 500)
  --warmup N       (default 1)
  --repeats N      (default 20)
  --mode M         overflow|continuous|squeeze (default overflow)
  --hard-edge      draw segments without anti-aliasing
  --parallel       dispatch kernels on the rayon pool
  --threads N      worker threads for parallel mode (default auto)
  --json           also print a JSON summary on stdout
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

type Getter = fn(&RunMetrics) -> Duration;

const FIELDS: &[(&str, Getter)] = &[
    ("graph_create", |m| m.graph_create),
    ("add_data_total", |m| m.add_data_total),
    ("draw_total", |m| m.draw_total),
    ("wall_total", |m| m.wall_total),
];

fn collect(runs: &[RunMetrics], f: Getter) -> Vec<Duration> {
    let mut v = runs.iter().map(f).collect::<Vec<_>>();
    v.sort_by_key(|d| d.as_nanos());
    v
}

fn percentile(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn fmt_ms(d: Duration) -> String {
    format!("{:.3}ms", d.as_secs_f64() * 1000.0)
}

fn report_percentiles(runs: &[RunMetrics]) {
    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in FIELDS {
        let v = collect(runs, *getter);
        eprintln!(
            "  {name:16} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            name = *name,
            p50 = fmt_ms(percentile(&v, 0.50)),
            p90 = fmt_ms(percentile(&v, 0.90)),
            p99 = fmt_ms(percentile(&v, 0.99))
        );
    }
    eprintln!("  progress: {} px/run", runs[0].progress);
    eprintln!("  digest:   {}", runs[0].digest);
}

fn print_json(args: &BenchArgs, runs: &[RunMetrics]) -> anyhow::Result<()> {
    let stages = FIELDS
        .iter()
        .map(|(name, getter)| {
            let v = collect(runs, *getter);
            (
                (*name).to_string(),
                json!({
                    "p50_ms": percentile(&v, 0.50).as_secs_f64() * 1000.0,
                    "p90_ms": percentile(&v, 0.90).as_secs_f64() * 1000.0,
                    "p99_ms": percentile(&v, 0.99).as_secs_f64() * 1000.0,
                }),
            )
        })
        .collect::<serde_json::Map<_, _>>();

    let summary = json!({
        "width": args.width,
        "height": args.height,
        "samples": args.samples,
        "repeats": args.repeats,
        "mode": format!("{:?}", args.mode),
        "parallel": args.parallel,
        "threads": args.threads,
        "digest": runs[0].digest,
        "stages": stages,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
