use super::*;

fn dims(w: u32, h: u32) -> Dimensions {
    Dimensions {
        width: w,
        height: h,
    }
}

#[test]
fn from_fn_is_row_major_bottom_first() {
    let buf = PixelBuffer::from_fn(dims(3, 2), |x, y| Color::rgb(x as f32, y as f32, 0.0));
    assert_eq!(buf.as_slice().len(), 6);
    assert_eq!(buf.as_slice()[4], Color::rgb(1.0, 1.0, 0.0));
    assert_eq!(buf.get(2, 1), Color::rgb(2.0, 1.0, 0.0));
}

#[test]
fn try_get_is_none_outside() {
    let buf = PixelBuffer::filled(dims(2, 2), Color::WHITE);
    assert_eq!(buf.try_get(1, 1), Some(Color::WHITE));
    assert_eq!(buf.try_get(-1, 0), None);
    assert_eq!(buf.try_get(0, 2), None);
}

#[test]
fn from_vec_rejects_wrong_length() {
    let err = PixelBuffer::from_vec(dims(2, 2), vec![Color::BLACK; 3]).unwrap_err();
    assert!(matches!(err, GraphError::Dimension(_)));
}

#[test]
fn rgba8_export_flips_rows() {
    let buf = PixelBuffer::from_fn(dims(1, 2), |_, y| {
        if y == 0 { Color::WHITE } else { Color::BLACK }
    });
    assert_eq!(buf.to_rgba8(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
}
