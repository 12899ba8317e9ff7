use neardup::{
    compare_with_config, evaluate_request, ComparisonRequest, ConfigLoadError, NearDupConfig,
    NearDupError, SimilarityError, ZeroUnionPolicy,
};

#[test]
fn zero_shingle_size_is_rejected_by_config() {
    let mut cfg = NearDupConfig::default();
    cfg.similarity.shingle_size = 0;

    let result = compare_with_config("a b c", "a b c", &cfg);
    assert!(matches!(
        result,
        Err(NearDupError::Config(ConfigLoadError::Similarity(
            SimilarityError::InvalidShingleSize { shingle_size: 0 }
        )))
    ));
}

#[test]
fn unsupported_version_is_rejected() {
    let cfg = NearDupConfig {
        version: "3".into(),
        ..Default::default()
    };
    assert!(matches!(
        compare_with_config("a", "b", &cfg),
        Err(NearDupError::Config(ConfigLoadError::UnsupportedVersion(_)))
    ));
}

#[test]
fn empty_texts_with_reject_policy_surface_comparison_error() {
    let mut cfg = NearDupConfig::default();
    cfg.similarity.zero_union = ZeroUnionPolicy::Reject;

    let err = compare_with_config("", "", &cfg).unwrap_err();
    assert!(matches!(
        err,
        NearDupError::Comparison(SimilarityError::IndeterminateComparison { shingle_size: 3 })
    ));
    assert!(err.to_string().starts_with("comparison failed"));
}

#[test]
fn empty_texts_with_default_policy_are_not_duplicates() {
    let report = compare_with_config("", "", &NearDupConfig::default()).unwrap();
    assert!(!report.is_near_duplicate());
    assert_eq!(report.score(), None);
}

#[test]
fn request_without_text_is_invalid_argument() {
    let request: ComparisonRequest =
        serde_json::from_str(r#"{"text_a": "only one side"}"#).expect("valid json");
    match evaluate_request(&request, &NearDupConfig::default()) {
        Err(NearDupError::Comparison(err)) => {
            assert!(err.is_invalid_argument());
            assert_eq!(err, SimilarityError::MissingText { field: "text_b" });
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn request_inherits_config_parameters() {
    let mut cfg = NearDupConfig::default();
    cfg.similarity.threshold = 0.1;
    cfg.similarity.shingle_size = 2;

    let request = ComparisonRequest::new("a b c d", "b c d e");
    let cmp = evaluate_request(&request, &cfg).unwrap();
    assert_eq!(cmp.threshold, 0.1);
    assert_eq!(cmp.ratio, Some(0.5));
    assert!(cmp.is_near_duplicate);
}
