//! Request validation
//!
//! Static field rules are declared with `validator` derives on the request
//! types; rules that depend on the current date are checked here against an
//! injected [`Clock`](crate::shared::Clock). Every violated rule is reported at once.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::{DomainError, SharedClock, SystemClock};

pub const DATE_IN_PAST_MESSAGE: &str =
    "Invalid date: Enter a date in format \"YYYY-MM-DD\" and date must not be before today";

/// Requests that schedule something on a calendar date.
pub trait DatedRequest {
    /// Date that must be today or later, if the request carries one.
    fn scheduled_date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Stateless validator; the clock is its only configuration.
#[derive(Clone)]
pub struct RequestValidator {
    clock: SharedClock,
}

impl RequestValidator {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock }
    }

    /// Validator bound to the host's local date.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn validate<T>(&self, request: &T) -> Result<(), DomainError>
    where
        T: Validate + DatedRequest,
    {
        let mut messages = BTreeSet::new();

        if let Err(errors) = request.validate() {
            messages.extend(collect_messages(&errors));
        }

        if let Some(date) = request.scheduled_date() {
            if date < self.clock.today() {
                messages.insert(DATE_IN_PAST_MESSAGE.to_string());
            }
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(messages))
        }
    }
}

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, e.code))
            })
        })
        .collect()
}

/// Builds a `ValidationError` carrying a ready-to-report message.
pub fn rule_violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Rejects empty strings with the given message.
pub fn require_non_empty(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(rule_violation("not_empty", message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FixedClock;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Probe {
        #[validate(length(min = 2, max = 4, message = "name length"))]
        name: String,
        #[validate(range(min = 1, message = "units positive"))]
        units: i32,
        date: NaiveDate,
    }

    impl DatedRequest for Probe {
        fn scheduled_date(&self) -> Option<NaiveDate> {
            Some(self.date)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn validator() -> RequestValidator {
        RequestValidator::new(Arc::new(FixedClock(today())))
    }

    #[test]
    fn accepts_valid_request_dated_today() {
        let probe = Probe {
            name: "abc".into(),
            units: 1,
            date: today(),
        };
        assert!(validator().validate(&probe).is_ok());
    }

    #[test]
    fn reports_every_violation() {
        let probe = Probe {
            name: "a".into(),
            units: 0,
            date: today().pred_opt().unwrap(),
        };
        let err = validator().validate(&probe).unwrap_err();
        let DomainError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages.len(), 3);
        assert!(messages.contains("name length"));
        assert!(messages.contains("units positive"));
        assert!(messages.contains(DATE_IN_PAST_MESSAGE));
    }

    #[test]
    fn future_date_is_accepted() {
        let probe = Probe {
            name: "ab".into(),
            units: 3,
            date: today().succ_opt().unwrap(),
        };
        assert!(validator().validate(&probe).is_ok());
    }

    #[test]
    fn require_non_empty_rejects_empty() {
        assert!(require_non_empty("", "empty").is_err());
        assert!(require_non_empty("x", "empty").is_ok());
    }
}
