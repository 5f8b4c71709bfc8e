use quorum::{analysis::DialecticAnalyzer, types::Opinion};

fn opinion(source_id: &str, text: &str) -> Opinion {
    Opinion {
        source_id: source_id.to_string(),
        text: text.to_string(),
        rationale: None,
        confidence: 0.5,
        bias_flags: Vec::new(),
    }
}

fn shared_prefix_text(tail: &str) -> String {
    format!("{}{}", "x".repeat(40), tail)
}

#[test]
fn identical_prefixes_agree_without_contradicting() {
    let opinions = vec![
        opinion("alpha", &shared_prefix_text(" and then some")),
        opinion("beta", &shared_prefix_text(" but differently")),
    ];

    let summary = DialecticAnalyzer.analyze(&opinions);

    assert_eq!(summary.agreements.len(), 1);
    assert_eq!(
        summary.agreements[0],
        "alpha aligns with beta on opening perspective."
    );
    assert!(summary.contradictions.is_empty());
    assert_eq!(summary.narrative, "Convergence detected on 1 key points.");
}

#[test]
fn distinct_sources_without_shared_prefix_contradict() {
    let opinions = vec![
        opinion("alpha", "The evidence points firmly one way"),
        opinion("beta", "Quite another reading fits better"),
    ];

    let summary = DialecticAnalyzer.analyze(&opinions);

    assert!(summary.agreements.is_empty());
    assert_eq!(summary.contradictions.len(), 1);
    assert_eq!(
        summary.contradictions[0],
        "alpha diverges from beta: 'The evidence points firmly one...' vs 'Quite another reading fits bet...'"
    );
    let alpha = summary.argument_map.get("alpha").expect("alpha entry");
    assert_eq!(alpha.contradicts, vec!["beta".to_string()]);
}

#[test]
fn same_source_pairs_never_contradict() {
    let opinions = vec![
        opinion("alpha", "First thought on the matter"),
        opinion("alpha", "Entirely different second thought"),
    ];

    let summary = DialecticAnalyzer.analyze(&opinions);

    assert!(summary.agreements.is_empty());
    assert!(summary.contradictions.is_empty());
    assert_eq!(summary.narrative, "Minimal dialectic tension observed.");
}

#[test]
fn three_opinions_are_compared_pairwise_completely() {
    let opinions = vec![
        opinion("alpha", "One distinct stance entirely"),
        opinion("beta", "Another stance with no overlap"),
        opinion("gamma", "A third position again unlike both"),
    ];

    let summary = DialecticAnalyzer.analyze(&opinions);

    // C(3,2) pairs, all distinct sources, no shared prefixes.
    assert_eq!(summary.contradictions.len(), 3);
    assert_eq!(
        summary.narrative,
        "Identified 3 active contradictions requiring synthesis."
    );
    assert_eq!(
        summary.argument_map.get("alpha").expect("alpha").contradicts,
        vec!["beta".to_string(), "gamma".to_string()]
    );
    assert_eq!(
        summary.argument_map.get("beta").expect("beta").contradicts,
        vec!["gamma".to_string()]
    );
    assert!(
        summary
            .argument_map
            .get("gamma")
            .expect("gamma")
            .contradicts
            .is_empty()
    );
}

#[test]
fn argument_map_keeps_first_seen_order_and_all_claims() {
    let opinions = vec![
        opinion("beta", "Beta speaks first this time"),
        opinion("alpha", "Alpha second with its own view"),
        opinion("beta", "Beta follows up once more"),
    ];

    let summary = DialecticAnalyzer.analyze(&opinions);

    let keys: Vec<&String> = summary.argument_map.keys().collect();
    assert_eq!(keys, vec!["beta", "alpha"]);
    assert_eq!(
        summary.argument_map.get("beta").expect("beta").claims,
        vec![
            "Beta speaks first this time".to_string(),
            "Beta follows up once more".to_string()
        ]
    );
}

#[test]
fn analysis_is_pure_and_repeatable() {
    let opinions = vec![
        opinion("alpha", &shared_prefix_text(" tail")),
        opinion("beta", "A wholly different opening line here"),
        opinion("gamma", &shared_prefix_text(" tail")),
    ];

    let first = DialecticAnalyzer.analyze(&opinions);
    let second = DialecticAnalyzer.analyze(&opinions);

    assert_eq!(first, second);
}
