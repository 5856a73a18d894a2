//! Full runs: aggregation, no short-circuit on violations, abort on tool errors.

mod common;

use common::{FakeSearch, TEMPLATE_URL, TRANSLATE};
use proptest::prelude::*;
use ratchet_check::gates::{RuleRunner, Verdict};
use ratchet_core::Rule;

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("translate filter", TRANSLATE, true),
        Rule::new("templateUrl", TEMPLATE_URL, false),
    ]
}

#[test]
fn test_all_rules_pass_exit_zero() {
    let search = FakeSearch::new()
        .matches(TRANSLATE, Some("develop"), 3)
        .matches(TRANSLATE, None, 3);

    let outcome = RuleRunner::new(rules(), "develop").run(&search).unwrap();

    assert!(!outcome.any_violated());
    assert_eq!(outcome.exit_status(), 0);
    assert_eq!(outcome.passed_count(), 2);
    assert_eq!(outcome.reference, "develop");
    assert_eq!(outcome.scope, "fake/scripts");
}

#[test]
fn test_tolerant_increase_exit_one() {
    let search = FakeSearch::new()
        .matches(TRANSLATE, Some("develop"), 3)
        .matches(TRANSLATE, None, 5);

    let outcome = RuleRunner::new(rules(), "develop").run(&search).unwrap();

    assert!(outcome.any_violated());
    assert_eq!(outcome.exit_status(), 1);
}

#[test]
fn test_first_violation_does_not_stop_later_rules() {
    let search = FakeSearch::new()
        .matches(TRANSLATE, None, 1)
        .matches(TEMPLATE_URL, None, 1);

    let outcome = RuleRunner::new(rules(), "develop").run(&search).unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert!(outcome.results.iter().all(|r| r.verdict == Verdict::Violated));
    assert_eq!(outcome.violated().count(), 2);
    assert_eq!(search.call_count(), 4);
}

#[test]
fn test_results_follow_rule_order() {
    let outcome = RuleRunner::new(rules(), "develop")
        .run(&FakeSearch::new())
        .unwrap();
    let names: Vec<&str> = outcome.results.iter().map(|r| r.rule.name.as_str()).collect();
    assert_eq!(names, vec!["translate filter", "templateUrl"]);
}

#[test]
fn test_tool_error_aborts_run() {
    let search = FakeSearch::new()
        .matches(TRANSLATE, None, 10)
        .fails(TEMPLATE_URL, Some("develop"), "fatal: bad revision 'develop'");

    let result = RuleRunner::new(rules(), "develop").run(&search);

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("fatal: bad revision 'develop'"));
}

#[test]
fn test_tool_error_stops_before_remaining_rules() {
    let mut rule_list = rules();
    rule_list.push(Rule::new("third", "never-reached", false));
    let search = FakeSearch::new().fails(TRANSLATE, Some("develop"), "fatal: boom");

    assert!(RuleRunner::new(rule_list, "develop").run(&search).is_err());
    assert_eq!(search.call_count(), 1);
}

#[test]
fn test_empty_rule_set_passes() {
    let outcome = RuleRunner::new(Vec::new(), "develop")
        .run(&FakeSearch::new())
        .unwrap();
    assert_eq!(outcome.exit_status(), 0);
}

proptest! {
    /// Whenever no rule grows past its allowance, the run exits 0.
    #[test]
    fn prop_no_growth_means_exit_zero(
        counts in proptest::collection::vec((any::<bool>(), 0usize..20, 0usize..20), 0..6)
    ) {
        let mut search = FakeSearch::new();
        let mut rule_list = Vec::new();
        for (i, (tolerant, reference, extra)) in counts.iter().enumerate() {
            let pattern = format!("pattern-{i}");
            let current = if *tolerant { reference.saturating_sub(*extra) } else { 0 };
            search = search
                .matches(&pattern, Some("develop"), *reference)
                .matches(&pattern, None, current);
            rule_list.push(Rule::new(format!("rule {i}"), pattern, *tolerant));
        }

        let outcome = RuleRunner::new(rule_list, "develop").run(&search).unwrap();
        prop_assert_eq!(outcome.exit_status(), 0);
    }

    /// Tolerant verdicts depend only on whether the current count exceeds the reference.
    #[test]
    fn prop_tolerant_verdict_matches_comparison(reference in 0usize..50, current in 0usize..50) {
        let search = FakeSearch::new()
            .matches(TRANSLATE, Some("develop"), reference)
            .matches(TRANSLATE, None, current);
        let outcome = RuleRunner::new(vec![Rule::new("t", TRANSLATE, true)], "develop")
            .run(&search)
            .unwrap();
        prop_assert_eq!(outcome.any_violated(), current > reference);
    }

    /// Strict verdicts ignore the reference entirely.
    #[test]
    fn prop_strict_verdict_is_any_match(reference in 0usize..50, current in 0usize..50) {
        let search = FakeSearch::new()
            .matches(TEMPLATE_URL, Some("develop"), reference)
            .matches(TEMPLATE_URL, None, current);
        let outcome = RuleRunner::new(vec![Rule::new("s", TEMPLATE_URL, false)], "develop")
            .run(&search)
            .unwrap();
        prop_assert_eq!(outcome.any_violated(), current > 0);
    }
}
