use crate::workflows::guidance::catalog::{CareerField, EnglishLevel, Skill, CAREER_FIELDS};
use crate::workflows::guidance::scoring::{
    classify_personality, fit_percentage, level_for_points, rank_fields, recommend_stream,
    Personality, ScoringEngine, SkillLevels, Stream, TOP_MATCHES,
};
use crate::workflows::guidance::session::SkillScores;

fn levels(values: [u8; 5]) -> SkillLevels {
    SkillLevels::new(values)
}

#[test]
fn level_thresholds_are_monotonic_and_bounded() {
    let mut previous = 0;
    for points in 0..=20 {
        let level = level_for_points(points);
        assert!((2..=5).contains(&level), "points {points} -> {level}");
        assert!(level >= previous);
        previous = level;
    }

    assert_eq!(level_for_points(8), 2);
    assert_eq!(level_for_points(9), 3);
    assert_eq!(level_for_points(12), 3);
    assert_eq!(level_for_points(13), 4);
    assert_eq!(level_for_points(16), 4);
    assert_eq!(level_for_points(17), 5);
}

#[test]
fn english_shifts_only_communication_and_clamps() {
    let top = SkillScores::new([20; 5]);
    assert_eq!(
        SkillLevels::from_scores(&top, EnglishLevel::Poor).as_array(),
        [5, 3, 5, 5, 5]
    );
    assert_eq!(
        SkillLevels::from_scores(&top, EnglishLevel::Excellent).get(Skill::Communication),
        5
    );

    let weakest = SkillScores::new([5; 5]);
    assert_eq!(
        SkillLevels::from_scores(&weakest, EnglishLevel::Poor).as_array(),
        [2, 1, 2, 2, 2]
    );
    assert_eq!(
        SkillLevels::from_scores(&weakest, EnglishLevel::Excellent).get(Skill::Communication),
        3
    );
}

#[test]
fn meeting_every_requirement_is_a_full_fit() {
    for field in &CAREER_FIELDS {
        let exact = SkillLevels::new(field.requirements);
        assert_eq!(fit_percentage(&exact, field), 100, "{}", field.name);
        assert_eq!(fit_percentage(&levels([5; 5]), field), 100);
    }
}

#[test]
fn partial_fit_is_truncated() {
    let medical = &CAREER_FIELDS[0];
    // 0.4 + 0.5 + 0.667 + 0.4 + 1.0 = 2.967 of 5 -> 59.3%
    assert_eq!(fit_percentage(&levels([2; 5]), medical), 59);
}

#[test]
fn ranking_is_descending_and_stable_for_ties() {
    let fields = [
        CareerField {
            name: "First Tie",
            requirements: [3, 3, 3, 3, 3],
        },
        CareerField {
            name: "Stretch",
            requirements: [4, 4, 4, 4, 4],
        },
        CareerField {
            name: "Second Tie",
            requirements: [2, 3, 3, 3, 3],
        },
        CareerField {
            name: "Third Tie",
            requirements: [3, 3, 3, 3, 2],
        },
    ];

    let ranked = rank_fields(&levels([3; 5]), &fields);
    let names: Vec<&str> = ranked.iter().map(|fit| fit.field.as_str()).collect();

    assert_eq!(names, vec!["First Tie", "Second Tie", "Third Tie", "Stretch"]);
    assert_eq!(ranked[3].percentage, 75);
}

#[test]
fn top_matches_are_limited() {
    let result =
        ScoringEngine::default().classify(levels([2, 3, 3, 5, 5]), "Creative Arts & Design");

    assert_eq!(result.matches.len(), CAREER_FIELDS.len());
    assert_eq!(result.top_matches().len(), TOP_MATCHES);
    assert_eq!(result.top_matches()[0].field, "Creative Arts & Design");
}

#[test]
fn personality_rules_apply_in_priority_order() {
    let cases = [
        ([5, 5, 5, 5, 5], Personality::Achiever),
        ([4, 4, 4, 4, 4], Personality::Achiever),
        ([5, 4, 2, 2, 2], Personality::Thinker),
        ([5, 5, 4, 3, 3], Personality::Thinker),
        ([3, 5, 4, 3, 3], Personality::Communicator),
        ([3, 3, 4, 3, 5], Personality::Visionary),
        ([3, 3, 4, 5, 3], Personality::Helper),
        ([2, 2, 2, 4, 4], Personality::Doer),
        ([3, 3, 3, 3, 3], Personality::Achiever),
        ([5, 2, 2, 2, 2], Personality::Achiever),
    ];

    for (values, expected) in cases {
        assert_eq!(
            classify_personality(&levels(values)),
            expected,
            "levels {values:?}"
        );
    }
}

#[test]
fn stream_prefers_science_then_commerce_fields() {
    assert_eq!(
        recommend_stream(&levels([4, 2, 2, 2, 2]), "Finance & Accounting"),
        Stream::Science
    );
    assert_eq!(
        recommend_stream(&levels([3, 5, 3, 3, 5]), "Business & Entrepreneurship"),
        Stream::Commerce
    );
    assert_eq!(
        recommend_stream(&levels([3, 4, 3, 3, 3]), "Medical Field"),
        Stream::ArtsHumanities
    );
    assert_eq!(
        recommend_stream(&levels([3, 3, 3, 3, 4]), "Marine Biology"),
        Stream::ArtsHumanities
    );
    assert_eq!(
        recommend_stream(&levels([3, 3, 3, 3, 3]), "Medical Field"),
        Stream::Commerce
    );
}

#[test]
fn labels_serialize_as_displayed() {
    let json = serde_json::to_string(&(Personality::Doer, Stream::ArtsHumanities))
        .expect("serializes");
    assert_eq!(json, r#"["The Doer","Arts/Humanities"]"#);
}
