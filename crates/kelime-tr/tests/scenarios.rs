//! Scenario tests: compare decoder output against the golden cases in
//! tests/golden/suggestions.json.
//!
//! Run: cargo test -p kelime-tr --test scenarios

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use kelime_tr::{ASCII_TOLERANT_MATCHER, KeyboardLayout, SpellChecker};

// ---------------------------------------------------------------------------
// Golden file
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    vocabulary: Vec<String>,
    input: String,
    max_penalty: f32,
    #[serde(default)]
    keyboard: Option<String>,
    #[serde(default)]
    matcher: Option<String>,
    expected: BTreeMap<String, f32>,
}

fn load_golden(filename: &str) -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn build_checker(case: &Case) -> SpellChecker {
    let mut speller = match &case.keyboard {
        Some(name) => {
            let layout: KeyboardLayout = name
                .parse()
                .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
            SpellChecker::with_near_keys(case.max_penalty, layout.near_keys())
        }
        None => SpellChecker::new(case.max_penalty),
    }
    .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
    speller.build_dictionary(&case.vocabulary);
    speller
}

fn run_case(case: &Case) -> BTreeMap<String, f32> {
    let speller = build_checker(case);
    let ranked = match case.matcher.as_deref() {
        None | Some("exact") => speller.get_suggestions_with_scores(&case.input),
        Some("ascii-tolerant") => {
            speller.get_suggestions_with_scores_using(&case.input, &ASCII_TOLERANT_MATCHER)
        }
        Some(other) => panic!("{}: unknown matcher {other:?}", case.name),
    }
    .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
    ranked.into_iter().map(|s| (s.word, s.penalty)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_suggestions() {
    let golden = load_golden("suggestions.json");
    assert!(!golden.cases.is_empty());

    let mut failures = Vec::new();
    for case in &golden.cases {
        let actual = run_case(case);
        if actual != case.expected {
            failures.push(format!(
                "{} ({:?}): expected {:?}, got {:?}",
                case.name, case.input, case.expected, actual
            ));
        }
    }
    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        golden.cases.len(),
        failures.join("\n")
    );
}

#[test]
fn results_are_ranked_by_penalty() {
    let golden = load_golden("suggestions.json");
    for case in &golden.cases {
        let speller = build_checker(case);
        let ranked = speller
            .get_suggestions_with_scores(&case.input)
            .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        for pair in ranked.windows(2) {
            assert!(
                pair[0].rank_cmp(&pair[1]).is_lt(),
                "{}: {} ranked before {}",
                case.name,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn vocabulary_order_does_not_matter() {
    let golden = load_golden("suggestions.json");
    for case in &golden.cases {
        let forward = build_checker(case);
        let mut reversed_case = Case {
            name: case.name.clone(),
            vocabulary: case.vocabulary.clone(),
            input: case.input.clone(),
            max_penalty: case.max_penalty,
            keyboard: case.keyboard.clone(),
            matcher: None,
            expected: BTreeMap::new(),
        };
        reversed_case.vocabulary.reverse();
        let backward = build_checker(&reversed_case);
        assert_eq!(
            forward.decode(&case.input).unwrap(),
            backward.decode(&case.input).unwrap(),
            "{}",
            case.name
        );
    }
}
