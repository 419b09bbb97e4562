#![allow(dead_code)]

use fourcircle::{Instrument, ShapeParameters};

/// Pattern record of a full-size violin, as found in pattern collections.
pub const VIOLIN_RECORD: &str = r#"{
    "name": "reference violin",
    "h": 356, "kc": 0.9, "ku": 0.8, "kw": 1.0, "kmu": 0.45, "kml": 0.5,
    "b1": 0.3, "b2": 0.2, "bu": 0.6, "bl": 0.5,
    "cu1": 0.5, "cu2": 0.3, "cl1": 0.5, "cl2": 0.3,
    "af": 15, "afc": 10, "afd": 3, "ab": 14
}"#;

/// Record whose corner blends cannot reach the bouts.
pub const BROKEN_CORNER_RECORD: &str = r#"{
    "h": 356, "kc": 0.5, "ku": 0.8, "kw": 1.05, "kmu": 0.4, "kml": 0.45,
    "b1": 0.5, "b2": 0.4, "bu": 0.5, "bl": 0.5,
    "cu1": 0.55, "cu2": 0.3, "cl1": 0.55, "cl2": 0.3
}"#;

pub fn violin_params() -> ShapeParameters {
    serde_json::from_str(VIOLIN_RECORD).unwrap()
}

pub fn drafted_violin() -> Instrument {
    let mut instrument = Instrument::new(violin_params()).unwrap();
    instrument.compute_body().unwrap();
    instrument.compute_corners().unwrap();
    instrument
}
