use realgraph::{GraphOpts, LineGraph, ProgressionMode};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opts = GraphOpts {
        progression_mode: ProgressionMode::Overflow,
        x_scale_factor: 4.0,
        y_scale_factor: 1.0,
        x_offset: 50.0,
        ..GraphOpts::default()
    };
    let mut graph = LineGraph::new(opts)?;

    for i in 0..400 {
        let v = 200.0 * (f64::from(i) / 20.0).sin();
        graph.add_data(v)?.draw(1)?;
        if i % 100 == 99 {
            println!(
                "sample {}: x window {:?}, scrolled {} px",
                i + 1,
                graph.limits().bounds(realgraph::Axis::X),
                graph.progress_count()
            );
        }
    }

    let out = std::path::Path::new("target").join("scrolling_sine.png");
    std::fs::create_dir_all("target")?;
    let dims = graph.pixels().dimensions();
    image::save_buffer_with_format(
        &out,
        &graph.pixels().to_rgba8(),
        dims.width,
        dims.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;
    println!("wrote {}", out.display());
    Ok(())
}
