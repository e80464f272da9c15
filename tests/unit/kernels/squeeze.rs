use super::*;
use crate::render::dispatch::KernelRunner;

const BG: Color = Color::BLACK;

fn strip(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(
        Dimensions {
            width: w,
            height: h,
        },
        |x, y| Color::rgb(0.1 * (x + y) as f32, 1.0, 0.0),
    )
}

#[test]
fn squeezes_toward_origin_column() {
    let prior = strip(9, 1);
    let k = SqueezeKernel::new(
        prior.dimensions(),
        Axis::X,
        0.5,
        0.0,
        BG,
        AxisLines::none(Color::WHITE),
    );
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    assert_eq!(out.get(0, 0), prior.get(0, 0));
    assert_eq!(out.get(1, 0), prior.get(2, 0));
    assert_eq!(out.get(4, 0), prior.get(8, 0));
    assert_eq!(out.get(5, 0), BG);
    assert_eq!(out.get(8, 0), BG);
}

#[test]
fn squeeze_keeps_origin_fixed() {
    let prior = strip(9, 1);
    let k = SqueezeKernel::new(
        prior.dimensions(),
        Axis::X,
        0.5,
        4.0,
        BG,
        AxisLines::none(Color::WHITE),
    );
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    assert_eq!(out.get(4, 0), prior.get(4, 0));
    assert_eq!(out.get(3, 0), prior.get(2, 0));
    assert_eq!(out.get(2, 0), prior.get(0, 0));
    assert_eq!(out.get(6, 0), prior.get(8, 0));
    assert_eq!(out.get(1, 0), BG);
    assert_eq!(out.get(7, 0), BG);
}

#[test]
fn squeeze_along_y_fills_with_axis_column() {
    let prior = strip(3, 9);
    let axes = AxisLines {
        row: None,
        column: Some(1),
        color: Color::WHITE,
    };
    let k = SqueezeKernel::new(prior.dimensions(), Axis::Y, 0.5, 0.0, BG, axes);
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    assert_eq!(out.get(0, 3), prior.get(0, 6));
    assert_eq!(out.get(0, 6), BG);
    assert_eq!(out.get(1, 6), Color::WHITE);
}

#[test]
fn unit_factor_is_identity() {
    let prior = strip(7, 4);
    let k = SqueezeKernel::new(
        prior.dimensions(),
        Axis::X,
        1.0,
        2.0,
        BG,
        AxisLines::none(Color::WHITE),
    );
    assert_eq!(KernelRunner::sequential().run(&prior, &k).unwrap(), prior);
}
