mod common;

use fourcircle::{Instrument, OutlineError, Phase, ShapeParameters};

#[test]
fn corners_before_body_is_state_error() {
    let mut violin = Instrument::new(common::violin_params()).unwrap();
    match violin.compute_corners() {
        Err(OutlineError::State {
            operation,
            required,
            actual,
        }) => {
            assert_eq!(operation, "compute_corners");
            assert_eq!(required, Phase::BodyComputed);
            assert_eq!(actual, Phase::Uninitialized);
        }
        other => panic!("expected state error, got {other:?}"),
    }
}

#[test]
fn outline_before_corners_is_state_error() {
    let mut violin = Instrument::new(common::violin_params()).unwrap();
    violin.compute_body().unwrap();
    let err = violin.outline().unwrap_err();
    assert!(matches!(err, OutlineError::State { .. }));
    assert!(err.to_string().contains("corner computed"));
}

#[test]
fn unreachable_corner_is_geometry_error() {
    let params: ShapeParameters = serde_json::from_str(common::BROKEN_CORNER_RECORD).unwrap();
    let mut violin = Instrument::new(params).unwrap();
    violin.compute_body().unwrap();
    let err = violin.compute_corners().unwrap_err();
    assert!(matches!(err, OutlineError::Geometry { .. }));
    assert_eq!(violin.phase(), Phase::BodyComputed);
}

#[test]
fn record_without_minor_ratios_is_rejected() {
    let json = common::VIOLIN_RECORD.replace(r#""kmu": 0.45, "kml": 0.5,"#, "");
    assert!(serde_json::from_str::<ShapeParameters>(&json).is_err());
}

#[test]
fn construction_overlay_grows_with_corners() {
    let mut violin = Instrument::new(common::violin_params()).unwrap();
    violin.compute_body().unwrap();
    assert_eq!(violin.construction_circles().unwrap().len(), 10);
    violin.compute_corners().unwrap();
    assert_eq!(violin.construction_circles().unwrap().len(), 22);
    assert_eq!(violin.reference_points().unwrap().len(), 16);
}

#[test]
fn longitudinal_arch_needs_only_the_body() {
    let mut violin = Instrument::new(common::violin_params()).unwrap();
    violin.compute_body().unwrap();
    let spec = fourcircle::ArchSpec::single(15.0);
    assert!(violin.longitudinal_arch(&spec, None).is_ok());
    assert!(matches!(
        violin.arching(&spec, None),
        Err(OutlineError::State { .. })
    ));
}
