//! Unit tests for resolution configuration.

use rstest::rstest;

use crate::intent::config::{ConfigError, ResolutionConfig};

#[rstest]
#[case(ResolutionConfig::default())]
#[case(ResolutionConfig::strict())]
#[case(ResolutionConfig::lenient())]
fn presets_are_valid(#[case] config: ResolutionConfig) {
    assert_eq!(config.validate(), Ok(()));
    assert!(config.clarify_threshold <= config.accept_threshold);
}

#[rstest]
fn strict_raises_every_threshold() {
    let default = ResolutionConfig::default();
    let strict = ResolutionConfig::strict();
    assert!(strict.accept_threshold > default.accept_threshold);
    assert!(strict.heuristic_threshold > default.heuristic_threshold);
    assert!(strict.polite_heuristic_threshold > default.polite_heuristic_threshold);
}

#[rstest]
fn partial_documents_keep_defaults() {
    let config = ResolutionConfig::from_json(r#"{"max_amount": 50, "model_timeout_ms": 500}"#)
        .expect("valid document");

    assert_eq!(config.max_amount, 50);
    assert_eq!(config.model_timeout().as_millis(), 500);
    assert_eq!(config.context_capacity, 10);
    assert_eq!(config.context_ttl().as_secs(), 7200);
}

#[rstest]
#[case(r#"{"accept_threshold": 1.5}"#, "accept_threshold")]
#[case(r#"{"heuristic_threshold": -0.1}"#, "heuristic_threshold")]
fn out_of_range_thresholds_are_rejected(#[case] document: &str, #[case] field: &str) {
    let Err(ConfigError::ThresholdOutOfRange { name, .. }) = ResolutionConfig::from_json(document)
    else {
        panic!("expected a threshold error");
    };
    assert_eq!(name, field);
}

#[rstest]
fn inverted_bands_are_rejected() {
    let config = ResolutionConfig {
        clarify_threshold: 0.7,
        accept_threshold: 0.6,
        ..ResolutionConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvertedClarifyBand { .. })
    ));
}

#[rstest]
#[case(r#"{"context_capacity": 0}"#, "context_capacity")]
#[case(r#"{"store_timeout_ms": 0}"#, "store_timeout_ms")]
fn zero_limits_are_rejected(#[case] document: &str, #[case] field: &'static str) {
    assert_eq!(
        ResolutionConfig::from_json(document),
        Err(ConfigError::ZeroValue(field))
    );
}

#[rstest]
fn malformed_documents_are_parse_errors() {
    assert!(matches!(
        ResolutionConfig::from_json("{not json"),
        Err(ConfigError::Parse(_))
    ));
}
