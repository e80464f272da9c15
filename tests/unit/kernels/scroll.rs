use super::*;
use crate::render::dispatch::KernelRunner;

const AXES: Color = Color::WHITE;
const BG: Color = Color::BLACK;

fn coded(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(
        Dimensions {
            width: w,
            height: h,
        },
        |x, y| Color::rgb(0.1 * x as f32, 0.1 * y as f32, 0.5),
    )
}

#[test]
fn scrolls_left_along_x() {
    let prior = coded(5, 3);
    let axes = AxisLines {
        row: Some(1),
        column: Some(0),
        color: AXES,
    };
    let k = ScrollKernel::new(prior.dimensions(), Axis::X, 2, BG, axes);
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    for y in 0..3 {
        assert_eq!(out.get(0, y), prior.get(2, y));
        assert_eq!(out.get(2, y), prior.get(4, y));
    }
    assert_eq!(out.get(3, 0), BG);
    assert_eq!(out.get(4, 2), BG);
    assert_eq!(out.get(3, 1), AXES);
    assert_eq!(out.get(4, 1), AXES);
}

#[test]
fn scrolls_down_along_y() {
    let prior = coded(4, 4);
    let axes = AxisLines {
        row: Some(0),
        column: Some(2),
        color: AXES,
    };
    let k = ScrollKernel::new(prior.dimensions(), Axis::Y, 1, BG, axes);
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();

    for x in 0..4 {
        assert_eq!(out.get(x, 0), prior.get(x, 1));
        assert_eq!(out.get(x, 2), prior.get(x, 3));
    }
    assert_eq!(out.get(2, 3), AXES);
    assert_eq!(out.get(0, 3), BG);
}

#[test]
fn scrolling_past_the_edge_clears_everything() {
    let prior = coded(3, 2);
    let k = ScrollKernel::new(prior.dimensions(), Axis::X, 7, BG, AxisLines::none(AXES));
    let out = KernelRunner::sequential().run(&prior, &k).unwrap();
    assert!(out.as_slice().iter().all(|&c| c == BG));
}

#[test]
fn zero_progress_is_identity() {
    let prior = coded(6, 5);
    let k = ScrollKernel::new(prior.dimensions(), Axis::Y, 0, BG, AxisLines::none(AXES));
    assert_eq!(KernelRunner::sequential().run(&prior, &k).unwrap(), prior);
}
