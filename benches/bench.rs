// Criterion benchmarks for Rishta Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rishta_algo::core::{calculate_match_score, merge_signals, Matcher};
use rishta_algo::models::{CulturalWeight, Profile, Signal, SignalMap, SignalSource, SignalTag};
use serde_json::json;

fn create_candidate(id: usize) -> Profile {
    let locations = ["Sydney", "Parramatta", "Melbourne", "Delhi", "Mumbai", "London"];
    let castes = ["Patel", "Sharma", "Reddy"];
    let languages = ["Gujarati", "Hindi", "Telugu"];

    let mut p = Profile::new(id.to_string());
    p.demographics.location = Some(locations[id % locations.len()].to_string());
    p.demographics.age = Some(24 + (id % 12) as u8);
    p.demographics.caste_community = Some(castes[id % castes.len()].to_string());
    p.demographics.native_language = Some(languages[id % languages.len()].to_string());
    p.demographics.vegetarian = Some(id % 2 == 0);
    p.demographics.occupation = Some("Software Engineer".to_string());
    if id % 3 == 0 {
        p.signal_tags.push(SignalTag::new("mentioned diaspora loneliness"));
    }
    p
}

fn create_seeker() -> Profile {
    let mut p = Profile::new("seeker");
    p.demographics.location = Some("Canberra, Australia".to_string());
    p.demographics.age = Some(28);
    p.demographics.caste_community = Some("Patel".to_string());
    p.demographics.native_language = Some("Gujarati".to_string());
    p.demographics.vegetarian = Some(true);
    p.demographics.occupation = Some("Software Engineer".to_string());
    p.preferences.cultural_weight = Some(CulturalWeight::High);
    p.signal_tags.push(SignalTag::new("mentioned diaspora loneliness"));
    p
}

fn bench_score_pair(c: &mut Criterion) {
    let a = create_seeker();
    let b = create_candidate(1);

    c.bench_function("calculate_match_score", |bench| {
        bench.iter(|| calculate_match_score(black_box(&a), black_box(&b)));
    });
}

fn bench_merge_signals(c: &mut Criterion) {
    let fields = [
        "work_style",
        "diet_food_culture",
        "social_energy",
        "family_values",
        "travel_frequency",
        "weekend_pattern",
    ];

    let existing: SignalMap = fields
        .iter()
        .map(|f| {
            (
                f.to_string(),
                Signal::new(json!("stored"), 0.80, SignalSource::Inferred),
            )
        })
        .collect();

    let incoming: SignalMap = fields
        .iter()
        .map(|f| {
            (
                f.to_string(),
                Signal::new(json!("fresh"), 0.85, SignalSource::Explicit),
            )
        })
        .collect();

    c.bench_function("merge_signals", |bench| {
        bench.iter(|| merge_signals(black_box(&existing), black_box(&incoming)));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let matcher = Matcher::new();
    let seeker = create_seeker();

    let mut group = c.benchmark_group("find_matches");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    matcher.find_matches(
                        black_box(&seeker),
                        black_box(candidates.clone()),
                        40.0,
                        10,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_pair, bench_merge_signals, bench_find_matches);
criterion_main!(benches);
