use super::*;
use crate::foundation::core::{Offsets, Point, ScaleFactors};
use crate::kernels::interpolate::LineStyle;
use crate::render::dispatch::KernelRunner;
use crate::transform::coords::CoordTransform;

const LINE: Color = Color::rgb(0.0, 0.5, 0.0);

#[test]
fn brush_wins_over_segment() {
    let dims = Dimensions {
        width: 16,
        height: 16,
    };
    let t = CoordTransform::new(dims, ScaleFactors { x: 1.0, y: 1.0 }, Offsets::default());
    let brush = PlotKernel::new(dims, t, Point::new(12.0, 8.0), 1.0, Color::WHITE);
    let line = InterpolateKernel::new(
        dims,
        t,
        Point::new(2.0, 8.0),
        Point::new(12.0, 8.0),
        1.0,
        LINE,
        LineStyle::HardEdge,
    );
    let k = AddDataKernel::new(brush, line);
    assert_eq!(k.dimensions(), dims);

    let prior = PixelBuffer::filled(dims, Color::BLACK);
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    assert_eq!(out.get(12, 8), Color::WHITE);
    assert_eq!(out.get(13, 8), Color::WHITE);
    assert_eq!(out.get(7, 8), LINE);
    assert_eq!(out.get(2, 8), LINE);
    assert_eq!(out.get(7, 12), Color::BLACK);
}
