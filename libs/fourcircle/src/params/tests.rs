use super::*;
use crate::fixtures::violin;

const RECORD: &str = r#"{
    "name": "test pattern",
    "year": 1716,
    "h": 356, "kc": 0.9, "ku": 0.8, "kw": 1.0, "kmu": 0.45, "kml": 0.5,
    "b1": 0.3, "b2": 0.2, "bu": 0.6, "bl": 0.5,
    "cu1": 0.5, "cu2": 0.3, "cl1": 0.5, "cl2": 0.3,
    "af": 15, "afc": 10, "afd": 3
}"#;

#[test]
fn test_fixture_is_valid() {
    assert!(violin().validate().is_ok());
}

#[test]
fn test_record_with_separate_minor_ratios() {
    let params: ShapeParameters = serde_json::from_str(RECORD).unwrap();
    assert_eq!(params, violin());
}

#[test]
fn test_shared_minor_ratio_wins() {
    let json = RECORD.replace(r#""kmu": 0.45"#, r#""km": 0.4, "kmu": 0.45"#);
    let params: ShapeParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params.upper_minor_ratio, 0.4);
    assert_eq!(params.lower_minor_ratio, 0.4);
}

#[test]
fn test_missing_minor_ratio_is_rejected() {
    let json = RECORD.replace(r#""kmu": 0.45, "#, "");
    let err = serde_json::from_str::<ShapeParameters>(&json).unwrap_err();
    assert!(err.to_string().contains("km"));
}

#[test]
fn test_body_length_defaults() {
    let json = RECORD.replace(r#""h": 356, "#, "");
    let params: ShapeParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params.body_length, DEFAULT_BODY_LENGTH);
}

#[test]
fn test_serializes_to_record_keys() {
    let value = serde_json::to_value(violin()).unwrap();
    assert_eq!(value["h"], 356.0);
    assert_eq!(value["kmu"], 0.45);
    assert!(value.get("km").is_none());
    assert!(value.get("body_length").is_none());
}

#[test]
fn test_non_positive_values_are_rejected() {
    let params = ShapeParameters {
        waist_ratio: 0.0,
        ..violin()
    };
    let err = params.validate().unwrap_err();
    assert!(matches!(err, OutlineError::Configuration { .. }));
    assert!(err.to_string().contains("kw"));

    let params = ShapeParameters {
        upper_angle_ref: f64::NAN,
        ..violin()
    };
    assert!(params.validate().is_err());
}

#[test]
fn test_ratio_ordering_is_enforced() {
    let lower_minor = ShapeParameters {
        lower_minor_ratio: 1.0,
        ..violin()
    };
    assert!(lower_minor.validate().unwrap_err().to_string().contains("kml"));

    let upper_minor = ShapeParameters {
        upper_minor_ratio: 0.8,
        ..violin()
    };
    assert!(upper_minor.validate().unwrap_err().to_string().contains("kmu"));

    let corners = ShapeParameters {
        inner_corner_ratio: 0.3,
        ..violin()
    };
    assert!(corners.validate().unwrap_err().to_string().contains("b2"));
}

#[test]
fn test_with_body_length() {
    let cello = violin().with_body_length(750.0).unwrap();
    assert_eq!(cello.body_length, 750.0);
    assert_eq!(cello.center_ratio, violin().center_ratio);
    assert!(violin().with_body_length(-1.0).is_err());
}

#[test]
fn test_ratios_from_widths() {
    let ratios = ratios_from_widths(160.0, 100.0, 200.0, None).unwrap();
    assert_eq!(ratios.upper_ratio, 0.8);
    assert_eq!(ratios.waist_ratio, 1.0);
}

#[test]
fn test_ratios_from_widths_rejects_overhang_wider_than_body() {
    let err = ratios_from_widths(160.0, 100.0, 200.0, Some(60.0)).unwrap_err();
    assert!(err.to_string().contains("center"));
}
