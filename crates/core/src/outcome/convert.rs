//! Conversions between outcomes and the standard result type

use super::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

/// Extension trait for adapting standard results into outcomes
pub trait ResultExt<T, E> {
    /// Repackage a standard result as an [`Outcome`]
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Message;
    use crate::outcome::{err, ok};

    #[test]
    fn std_results_round_trip() {
        let success: Result<i32, Message> = Ok(5);
        assert_eq!(success.clone().into_outcome(), ok(5));
        assert_eq!(Result::from(ok::<i32, Message>(5)), success);

        let failure: Result<i32, Message> = Err(Message::new("boom"));
        assert_eq!(failure.clone().into_outcome(), err(Message::new("boom")));
        assert_eq!(
            Result::from(err::<i32, Message>(Message::new("boom"))),
            failure
        );
    }
}
