use gerg_stats::{
    network_from_json, network_to_json, CombineMode, Model, Network, Statistic,
};

#[test]
fn network_json_is_a_list_of_rows() {
    let net = Network::from_rows(vec![vec![0.0, 0.25], vec![0.75, 0.0]]).unwrap();
    let json = network_to_json(&net).unwrap();
    let decoded = network_from_json(&json).unwrap();
    assert_eq!(decoded, net);
    assert!(network_from_json("[[0.0, 1.0], [1.0]]").is_err());
}

#[test]
fn model_reads_named_terms() {
    let json = r#"{
        "combine": "per-term",
        "terms": [
            { "statistic": "edges", "theta": -0.5 },
            { "statistic": "recip", "theta": 1.25, "alpha": 0.5 },
            { "statistic": "ttriads", "theta": 3.0, "active": false }
        ]
    }"#;
    let model: Model = serde_json::from_str(json).unwrap();
    assert_eq!(model.combine(), CombineMode::PerTerm);
    assert_eq!(
        model.active().collect::<Vec<_>>(),
        vec![Statistic::Reciprocity, Statistic::EdgeDensity]
    );
    assert_eq!(model.thetas()[Statistic::EdgeDensity], -0.5);
    assert_eq!(model.alphas()[Statistic::Reciprocity], 0.5);
    assert_eq!(model.alphas()[Statistic::Out2Star], 1.0);
    assert_eq!(model.thetas()[Statistic::TransitiveTriads], 3.0);

    let encoded = serde_json::to_string(&model).unwrap();
    let decoded: Model = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, model);
}

#[test]
fn duplicate_terms_are_rejected() {
    let json = r#"{ "terms": [ { "statistic": "edges" }, { "statistic": "edges" } ] }"#;
    let err = serde_json::from_str::<Model>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate-term"));
}
