use super::*;

fn two_sizes() -> Vec<BreakpointDescriptor> {
    vec![
        BreakpointDescriptor::base(1, 10.0),
        BreakpointDescriptor::at(768.0, 3, 10.0),
    ]
}

#[test]
fn packed_marker_gets_data_prefix() {
    assert_eq!(normalize_packed("packed"), "data-packed");
    assert_eq!(normalize_packed("data-packed"), "data-packed");
    assert_eq!(normalize_packed("placed"), "data-placed");
}

#[test]
fn json_defaults_and_normalization() {
    let config = PackerConfig::from_json_str(
        r#"{ "packed": "done", "sizes": [{ "columns": 2 }] }"#,
    )
    .unwrap();
    assert_eq!(config.packed, "data-done");
    assert!(config.position);
    assert_eq!(config.sizes[0].gutter, 0.0);
    assert_eq!(config.sizes[0].min_width, None);
}

#[test]
fn scan_order_is_widest_first() {
    let config = PackerConfig::new(two_sizes());
    let order = config.scan_order();
    assert_eq!(order[0].columns, 3);
    assert_eq!(order[1].columns, 1);
}

#[test]
fn validate_rejects_empty_sizes() {
    let err = PackerConfig::new(vec![]).validate().unwrap_err();
    assert!(err.to_string().contains("at least one"));
}

#[test]
fn validate_rejects_zero_columns_and_bad_gutter() {
    let config = PackerConfig::new(vec![BreakpointDescriptor::base(0, 10.0)]);
    assert!(config.validate().unwrap_err().to_string().contains("columns"));

    let config = PackerConfig::new(vec![BreakpointDescriptor::base(2, -1.0)]);
    assert!(config.validate().unwrap_err().to_string().contains("gutter"));

    let config = PackerConfig::new(vec![BreakpointDescriptor::base(2, f64::NAN)]);
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_widest_first_declaration() {
    let mut sizes = two_sizes();
    sizes.reverse();
    sizes[1].min_width = Some(0.0);
    let err = PackerConfig::new(sizes).validate().unwrap_err();
    assert!(matches!(err, BrickError::Config(_)));
}

#[test]
fn validate_rejects_blank_marker() {
    let mut config = PackerConfig::new(two_sizes());
    config.packed = "data-".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn json_round_trip_keeps_sizes() {
    let config = PackerConfig::new(two_sizes());
    let json = config.to_json_string().unwrap();
    let back = PackerConfig::from_json_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn column_count_is_never_zero() {
    assert_eq!(BreakpointDescriptor::base(0, 0.0).column_count(), 1);
    assert_eq!(BreakpointDescriptor::base(4, 0.0).column_count(), 4);
}
