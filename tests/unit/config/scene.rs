use super::*;
use crate::pack::packer::PackMode;

const SCENE: &str = r#"{
    "config": {
        "sizes": [
            { "columns": 1, "gutter": 10 },
            { "min_width": 768, "columns": 3, "gutter": 10 }
        ]
    },
    "viewport_width": 1024,
    "bricks": [
        { "width": 100, "height": 50 },
        { "width": 100, "height": 50 },
        { "width": 100, "height": 50 }
    ],
    "appended": [
        { "width": 210, "height": 50, "span": 2 }
    ]
}"#;

#[test]
fn scene_runs_pack_then_update() {
    let scene = Scene::from_json_str(SCENE).unwrap();
    let reports = scene.run().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].mode, PackMode::Full);
    assert_eq!(reports[1].mode, PackMode::Incremental);
    assert_eq!(reports[1].placements[0].index, 3);
    assert_eq!(reports[1].placements[0].placement.span, 2);
    assert_eq!(reports[1].column_heights, vec![120.0, 120.0, 60.0]);
}

#[test]
fn scene_without_appended_runs_once() {
    let mut scene = Scene::from_json_str(SCENE).unwrap();
    scene.appended.clear();
    assert_eq!(scene.run().unwrap().len(), 1);
}

#[test]
fn invalid_scene_config_is_rejected() {
    let bad = SCENE.replace("\"columns\": 1", "\"columns\": 0");
    assert!(Scene::from_json_str(&bad).is_err());
}

#[test]
fn brick_spec_defaults_span() {
    let spec: BrickSpec = serde_json::from_str(r#"{ "width": 5, "height": 6 }"#).unwrap();
    assert_eq!(spec.to_brick().span(), None);
    assert_eq!(spec.to_brick().size(), Size::new(5.0, 6.0));
}
