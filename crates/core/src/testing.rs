//! Property-based tests for the outcome combinator laws

use crate::errors::Message;
use crate::outcome::{err, match_outcome, ok, Outcome, ResultExt};
use proptest::prelude::*;

/// Strategy producing either variant with equal weight
fn any_outcome() -> impl Strategy<Value = Outcome<i64, Message>> {
    prop_oneof![
        any::<i64>().prop_map(ok::<i64, Message>),
        "[a-z]{1,12}".prop_map(|text| err(Message::new(text))),
    ]
}

proptest! {
    #[test]
    fn construction_fixes_the_variant(value in any::<i64>(), text in "[a-z]{1,12}") {
        let success: Outcome<i64> = ok(value);
        prop_assert!(success.is_ok());
        prop_assert!(!success.is_err());
        prop_assert_eq!(*success.ok_value(), value);

        let failure: Outcome<i64> = err(Message::new(text.clone()));
        prop_assert!(!failure.is_ok());
        prop_assert!(failure.is_err());
        prop_assert_eq!(failure.err_value().as_str(), text);
    }

    #[test]
    fn unwrap_round_trips_a_success(value in any::<i64>()) {
        prop_assert_eq!(ok::<i64, Message>(value).unwrap(), value);
    }

    #[test]
    fn unwrap_err_round_trips_a_failure(text in "[a-z]{1,12}") {
        let error = Message::new(text);
        prop_assert_eq!(err::<i64, Message>(error.clone()).unwrap_err(), error);
    }

    #[test]
    fn identity_map_preserves_observables(outcome in any_outcome()) {
        let mapped = outcome.clone().map(|v| v);
        prop_assert_eq!(mapped.is_ok(), outcome.is_ok());
        prop_assert_eq!(mapped, outcome);
    }

    #[test]
    fn maps_compose(outcome in any_outcome()) {
        let f = |v: i64| v.wrapping_mul(3);
        let g = |v: i64| v.wrapping_sub(7);
        prop_assert_eq!(
            outcome.clone().map(f).map(g),
            outcome.map(move |v| g(f(v)))
        );
    }

    #[test]
    fn map_or_agrees_with_dispatch(outcome in any_outcome()) {
        let via_map_or = outcome.clone().map_or(-1, |v| v.wrapping_add(1));
        let via_dispatch = match_outcome(outcome, |v| v.wrapping_add(1), |_| -1);
        prop_assert_eq!(via_map_or, via_dispatch);
    }

    #[test]
    fn map_or_else_sees_the_error(outcome in any_outcome()) {
        let expected = match outcome.clone() {
            Outcome::Ok(value) => value.wrapping_add(1),
            Outcome::Err(error) => error.as_str().len() as i64,
        };
        let computed = outcome.map_or_else(
            |error| error.as_str().len() as i64,
            |value| value.wrapping_add(1),
        );
        prop_assert_eq!(computed, expected);
    }

    #[test]
    fn inspection_is_a_pass_through(outcome in any_outcome()) {
        let passed = outcome
            .clone()
            .inspect(|_| {})
            .inspect_err(|_| {});
        prop_assert_eq!(passed, outcome);
    }

    #[test]
    fn std_round_trip_preserves_identity(outcome in any_outcome()) {
        let round: Outcome<i64, Message> = Result::from(outcome.clone()).into_outcome();
        prop_assert_eq!(round, outcome);
    }
}
