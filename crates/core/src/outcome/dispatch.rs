//! Free pattern dispatch over the closed variant set

use super::Outcome;

/// Dispatch on an outcome's variant.
///
/// Evaluates `on_ok` with the contained value if the outcome is `Ok`, else
/// `on_err` with the contained error, and returns whatever that callback
/// returns. Exactly one callback is invoked per call; the variant set is
/// closed, so there is no fallthrough and no default case.
///
/// ```
/// use outcome_core::prelude::*;
///
/// let doubled = match_outcome(ok::<_, Message>(2), |v| v * 2, |_| -1);
/// assert_eq!(doubled, 4);
/// ```
pub fn match_outcome<T, E, U>(
    outcome: Outcome<T, E>,
    on_ok: impl FnOnce(T) -> U,
    on_err: impl FnOnce(E) -> U,
) -> U {
    match outcome {
        Outcome::Ok(value) => on_ok(value),
        Outcome::Err(error) => on_err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Message;
    use crate::outcome::{err, ok};

    #[test]
    fn routes_a_success_to_the_value_callback() {
        let result = match_outcome(ok::<_, Message>(2), |v| v * 2, |_| -1);
        assert_eq!(result, 4);
    }

    #[test]
    fn routes_a_failure_to_the_error_callback() {
        let result = match_outcome(
            err::<i32, _>(Message::new("boom")),
            |v| v * 2,
            |_| -1,
        );
        assert_eq!(result, -1);
    }

    #[test]
    fn only_the_matching_callback_runs() {
        let sides = match_outcome(
            ok::<_, Message>("payload"),
            |v| v.to_string(),
            |_| panic!("error callback must not run"),
        );
        assert_eq!(sides, "payload");
    }
}
