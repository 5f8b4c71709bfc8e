use quorum::{reflection::ReflectionGenerator, types::Opinion};

fn opinion(source_id: &str, text: &str, confidence: f64) -> Opinion {
    Opinion {
        source_id: source_id.to_string(),
        text: text.to_string(),
        rationale: None,
        confidence,
        bias_flags: Vec::new(),
    }
}

#[test]
fn output_length_is_depth_times_base() {
    let base = vec![
        opinion("alpha", "First base claim", 0.7),
        opinion("beta", "Second base claim", 0.6),
    ];

    let reflections = ReflectionGenerator::new(3).reflect("prompt", &base);

    assert_eq!(reflections.len(), 6);
}

#[test]
fn ordering_is_level_major_with_unique_ids() {
    let base = vec![
        opinion("alpha", "First base claim", 0.7),
        opinion("beta", "Second base claim", 0.6),
    ];

    let reflections = ReflectionGenerator::new(2).reflect("prompt", &base);

    let ids: Vec<&str> = reflections
        .iter()
        .map(|reflection| reflection.source_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "reflect:0:alpha",
            "reflect:0:beta",
            "reflect:1:alpha",
            "reflect:1:beta"
        ]
    );
}

#[test]
fn confidence_decays_per_level_and_floors() {
    let base = vec![opinion("alpha", "A claim to challenge", 0.7)];
    let generator = ReflectionGenerator::new(2);

    let reflections = generator.reflect("prompt", &base);
    assert!((reflections[0].confidence - 0.65).abs() < 1e-9);
    assert!((reflections[1].confidence - 0.60).abs() < 1e-9);

    let floored = generator.reflect("prompt", &[opinion("beta", "Low conviction", 0.31)]);
    assert!((floored[0].confidence - 0.3).abs() < 1e-9);
    assert!((floored[1].confidence - 0.3).abs() < 1e-9);
}

#[test]
fn framings_cycle_over_levels() {
    let base = vec![opinion("alpha", "A claim to challenge", 0.9)];

    let reflections = ReflectionGenerator::new(5).reflect("prompt", &base);

    assert!(reflections[0].text.starts_with("What if "));
    assert!(reflections[1].text.starts_with("Consider "));
    assert!(reflections[2].text.starts_with("Suppose "));
    assert!(reflections[3].text.starts_with("Is it possible "));
    assert!(reflections[4].text.starts_with("What if "));
}

#[test]
fn reflection_text_excerpts_the_base_claim() {
    let long_text = "y".repeat(120);
    let base = vec![opinion("alpha", &long_text, 0.8)];

    let reflections = ReflectionGenerator::new(1).reflect("prompt", &base);

    assert_eq!(
        reflections[0].text,
        format!("What if the opposite holds? Re-evaluate: {}", "y".repeat(80))
    );
}

#[test]
fn zero_depth_yields_no_reflections() {
    let base = vec![opinion("alpha", "A claim", 0.8)];

    assert!(ReflectionGenerator::new(0).reflect("prompt", &base).is_empty());
    assert!(ReflectionGenerator::new(2).reflect("prompt", &[]).is_empty());
}
