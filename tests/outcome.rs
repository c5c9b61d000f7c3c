use std::cell::Cell;

use exprcalc::Outcome::{self, Failure, Success};
use pretty_assertions::assert_eq;

type TestOutcome = Outcome<&'static str, i32>;

#[test]
fn map_transforms_only_the_success_arm() {
    assert_eq!(TestOutcome::Success(2).map(|v| v * 2), Success(4));
    assert_eq!(TestOutcome::Failure("boom").map(|v| v * 2), Failure("boom"));
}

#[test]
fn map_never_invokes_the_function_on_failure() {
    let poisoned = TestOutcome::Failure("boom").map(|_| -> i32 { panic!("map invoked on failure") });

    assert_eq!(poisoned, Failure("boom"));
}

#[test]
fn map_invokes_the_function_exactly_once_on_success() {
    let calls = Cell::new(0);

    let mapped = TestOutcome::Success(2).map(|v| {
        calls.set(calls.get() + 1);
        v + 1
    });

    assert_eq!(mapped, Success(3));
    assert_eq!(calls.get(), 1);
}

#[test]
fn flat_map_chains_the_success_arm() {
    fn checked_halve(v: i32) -> TestOutcome {
        if v % 2 != 0 {
            return Failure("odd");
        }
        Success(v / 2)
    }

    assert_eq!(TestOutcome::Success(8).flat_map(checked_halve), checked_halve(8));
    assert_eq!(TestOutcome::Success(8).flat_map(checked_halve), Success(4));
    assert_eq!(TestOutcome::Success(3).flat_map(checked_halve), Failure("odd"));
}

#[test]
fn flat_map_short_circuits_on_failure() {
    let poisoned = TestOutcome::Failure("boom")
        .flat_map(|_| -> TestOutcome { panic!("flat_map invoked on failure") })
        .flat_map(|v| TestOutcome::Success(v + 1));

    assert_eq!(poisoned, Failure("boom"));
}

#[test]
fn fold_applies_exactly_one_arm() {
    let failures = Cell::new(0);
    let successes = Cell::new(0);

    let on_failure = |_| {
        failures.set(failures.get() + 1);
        "failure"
    };
    let on_success = |_| {
        successes.set(successes.get() + 1);
        "success"
    };

    let folded = TestOutcome::Success(2).fold(on_failure, on_success);

    assert_eq!(folded, "success");
    assert_eq!(failures.get(), 0);
    assert_eq!(successes.get(), 1);

    let folded = TestOutcome::Failure("boom").fold(|error| error, |_| "success");
    assert_eq!(folded, "boom");
}

#[test]
fn variant_queries_report_the_populated_arm() {
    assert!(TestOutcome::Success(1).is_success());
    assert!(!TestOutcome::Success(1).is_failure());
    assert!(TestOutcome::Failure("boom").is_failure());
    assert!(!TestOutcome::Failure("boom").is_success());

    assert_eq!(TestOutcome::Success(1).success(), Some(1));
    assert_eq!(TestOutcome::Success(1).failure(), None);
    assert_eq!(TestOutcome::Failure("boom").failure(), Some("boom"));
    assert_eq!(TestOutcome::Failure("boom").success(), None);
}

#[test]
fn outcomes_convert_losslessly_to_and_from_results() {
    let success: Result<i32, &str> = TestOutcome::Success(1).into();
    assert_eq!(success, Ok(1));

    let failure: Result<i32, &str> = TestOutcome::Failure("boom").into();
    assert_eq!(failure, Err("boom"));

    assert_eq!(TestOutcome::from(Ok(1)), Success(1));
    assert_eq!(TestOutcome::from(Err("boom")), Failure("boom"));
}
