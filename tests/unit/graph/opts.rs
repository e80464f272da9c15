use super::*;

#[test]
fn defaults_match_documented_values() {
    let o = GraphOpts::default();
    o.validate().unwrap();
    assert_eq!(
        o.dimensions,
        Dimensions {
            width: 800,
            height: 600
        }
    );
    assert_eq!(o.scale_factors(), ScaleFactors { x: 10.0, y: 1.0 });
    assert_eq!(o.offsets(), Offsets { x: 10.0, y: 10.0 });
    assert_eq!(o.progressive_axis, Axis::X);
    assert_eq!(o.progression_mode, ProgressionMode::Overflow);
    assert_eq!(o.progress_interval, 1.0);
    assert_eq!(o.brush_size, 1.0);
    assert_eq!(o.brush_color, Color::WHITE);
    assert_eq!(o.line_thickness, 0.05);
    assert_eq!(o.line_color, Color::rgb(0.0, 0.5, 0.0));
    assert!(o.threading.parallel);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let o = GraphOpts::from_json_str(
        r#"{
            "dimensions": [64, 48],
            "xScaleFactor": 2.5,
            "progressionMode": "squeeze",
            "progressiveAxis": "y",
            "lineStyle": "hardEdge",
            "brushColor": [1.0, 0.0, 0.0],
            "threading": { "parallel": false }
        }"#,
    )
    .unwrap();

    assert_eq!(
        o.dimensions,
        Dimensions {
            width: 64,
            height: 48
        }
    );
    assert_eq!(o.x_scale_factor, 2.5);
    assert_eq!(o.y_scale_factor, 1.0);
    assert_eq!(o.progression_mode, ProgressionMode::Squeeze);
    assert_eq!(o.progressive_axis, Axis::Y);
    assert_eq!(o.line_style, LineStyle::HardEdge);
    assert_eq!(o.brush_color, Color::rgb(1.0, 0.0, 0.0));
    assert!(!o.threading.parallel);
    assert_eq!(o.threading.threads, None);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GraphOpts::from_json_str(r#"{ "xScale": 3 }"#).unwrap_err();
    assert!(matches!(err, GraphError::Serde(_)));
}

#[test]
fn invalid_numbers_are_rejected() {
    let cases: Vec<fn(&mut GraphOpts)> = vec![
        |o: &mut GraphOpts| o.dimensions.width = 0,
        |o: &mut GraphOpts| o.x_scale_factor = 0.0,
        |o: &mut GraphOpts| o.y_scale_factor = f64::INFINITY,
        |o: &mut GraphOpts| o.x_offset = 100.5,
        |o: &mut GraphOpts| o.y_offset = f64::NAN,
        |o: &mut GraphOpts| o.progress_interval = 0.0,
        |o: &mut GraphOpts| o.brush_size = -1.0,
        |o: &mut GraphOpts| o.line_thickness = f64::NAN,
        |o: &mut GraphOpts| o.time_step = -0.1,
        |o: &mut GraphOpts| o.min_scale_factor = 0.0,
        |o: &mut GraphOpts| o.min_scale_factor = 20.0,
        |o: &mut GraphOpts| o.threading.threads = Some(0),
    ];
    for (i, mutate) in cases.iter().enumerate() {
        let mut o = GraphOpts::default();
        mutate(&mut o);
        let err = o.validate().unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)), "case {i}: {err}");
    }
}

#[test]
fn out_of_range_colors_are_accepted() {
    let o = GraphOpts {
        line_color: Color::rgb(2.0, -1.0, 0.5),
        ..GraphOpts::default()
    };
    o.validate().unwrap();
}

#[test]
fn missing_config_file_is_a_validation_error() {
    let err = GraphOpts::from_path("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, GraphError::Validation(_)));
    assert!(err.to_string().contains("here.json"));
}
