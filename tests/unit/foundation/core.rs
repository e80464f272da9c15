use super::*;

#[test]
fn dimensions_reject_empty_buffers() {
    assert!(Dimensions::new(0, 4).is_err());
    assert!(Dimensions::new(4, 0).is_err());
    let d = Dimensions::new(8, 3).unwrap();
    assert_eq!(d.pixel_count(), 24);
    assert_eq!(d.extent(Axis::X), 8);
    assert_eq!(d.extent(Axis::Y), 3);
}

#[test]
fn dimensions_serialize_as_pair() {
    let d = Dimensions {
        width: 800,
        height: 600,
    };
    assert_eq!(serde_json::to_string(&d).unwrap(), "[800,600]");
    let back: Dimensions = serde_json::from_str("[16,9]").unwrap();
    assert_eq!(
        back,
        Dimensions {
            width: 16,
            height: 9
        }
    );
}

#[test]
fn color_mix_hits_both_ends_exactly() {
    let a = Color::rgb(0.2, 0.4, 0.6);
    let b = Color::rgb(0.0, 0.5, 0.0);
    assert_eq!(a.mix(b, 0.0), a);
    assert_eq!(a.mix(b, 1.0), b);

    let t = 4.0 / 9.0;
    let m = a.mix(b, t);
    assert_eq!(m.g(), t * 0.5 + (1.0 - t) * 0.4);
}

#[test]
fn color_export_saturates_out_of_range_channels() {
    assert_eq!(Color::rgb(-0.5, 0.5, 2.0).to_rgb8(), [0, 128, 255]);
}

#[test]
fn progression_mode_accepts_legacy_spelling() {
    let m: ProgressionMode = serde_json::from_str("\"continous\"").unwrap();
    assert_eq!(m, ProgressionMode::Continuous);
    let m: ProgressionMode = serde_json::from_str("\"squeeze\"").unwrap();
    assert_eq!(m, ProgressionMode::Squeeze);
}

#[test]
fn scale_factors_index_by_axis() {
    let mut s = ScaleFactors { x: 10.0, y: 2.0 };
    assert_eq!(s.get(Axis::X), 10.0);
    *s.get_mut(Axis::Y) *= 0.5;
    assert_eq!(s.get(Axis::Y), 1.0);
    assert_eq!(Axis::X.other(), Axis::Y);
}
