//! Shape checks shared by the API and the UI client.
//!
//! Rules run in a fixed order and the first failing rule decides the
//! rejection reason. The only difference between the two callers is how the
//! date of birth is checked, see [`DateCheck`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MOBILE_NUMBER_LENGTH: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DATE_OF_BIRTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// `YYYY-MM-DD` shape only. Used by the server.
    Pattern,
    /// Shape plus a real calendar date. Used by the client.
    Calendar,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("mobile number must be 10 digits")]
    InvalidMobileNumber,
    #[error("invalid date of birth format")]
    InvalidDateOfBirth,
    #[error("name must not be empty")]
    EmptyName,
}

/// Borrowed view of the user supplied fields of a person.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub date_of_birth: &'a str,
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Length check only, `abcdefghij` passes.
pub fn validate_mobile_number(mobile_number: &str) -> Result<(), ValidationError> {
    if mobile_number.chars().count() == MOBILE_NUMBER_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobileNumber)
    }
}

pub fn validate_date_of_birth(date_of_birth: &str, check: DateCheck) -> Result<(), ValidationError> {
    if !DATE_OF_BIRTH_RE.is_match(date_of_birth) {
        return Err(ValidationError::InvalidDateOfBirth);
    }
    match check {
        DateCheck::Pattern => Ok(()),
        DateCheck::Calendar => NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidDateOfBirth),
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

pub fn validate_person(candidate: &Candidate<'_>, check: DateCheck) -> Result<(), ValidationError> {
    validate_email(candidate.email)?;
    validate_mobile_number(candidate.mobile_number)?;
    validate_date_of_birth(candidate.date_of_birth, check)?;
    validate_name(candidate.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Candidate<'static> {
        Candidate {
            name: "Ann",
            email: "ann@x.com",
            mobile_number: "1234567890",
            date_of_birth: "1990-01-01",
        }
    }

    #[test]
    fn test_valid_person() {
        assert_eq!(validate_person(&ann(), DateCheck::Pattern), Ok(()));
        assert_eq!(validate_person(&ann(), DateCheck::Calendar), Ok(()));
    }

    #[test]
    fn test_invalid_email() {
        for email in ["no-at-sign", "a@b", "a b@x.com", "a@@x.com", "@x.com", "a@x.", ""] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail),
                "{email}"
            );
        }
        assert_eq!(validate_email("first.last@mail.example.org"), Ok(()));
    }

    #[test]
    fn test_mobile_number_length_only() {
        assert_eq!(
            validate_mobile_number("12345"),
            Err(ValidationError::InvalidMobileNumber)
        );
        assert_eq!(
            validate_mobile_number("12345678901"),
            Err(ValidationError::InvalidMobileNumber)
        );
        assert_eq!(validate_mobile_number("abcdefghij"), Ok(()));
    }

    #[test]
    fn test_date_of_birth_pattern() {
        for dob in ["01-01-2020", "1990/01/01", "1990-1-1", "90-01-01", ""] {
            assert_eq!(
                validate_date_of_birth(dob, DateCheck::Pattern),
                Err(ValidationError::InvalidDateOfBirth),
                "{dob}"
            );
        }
    }

    #[test]
    fn test_server_accepts_calendar_invalid_date() {
        // the server only checks the shape, the client also checks the calendar
        for dob in ["2020-02-30", "2021-13-01", "2021-01-32", "2021-02-29"] {
            assert_eq!(validate_date_of_birth(dob, DateCheck::Pattern), Ok(()));
            assert_eq!(
                validate_date_of_birth(dob, DateCheck::Calendar),
                Err(ValidationError::InvalidDateOfBirth)
            );
        }
        assert_eq!(
            validate_date_of_birth("2020-02-29", DateCheck::Calendar),
            Ok(())
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let candidate = Candidate {
            name: "",
            email: "bad",
            mobile_number: "1",
            date_of_birth: "x",
        };
        assert_eq!(
            validate_person(&candidate, DateCheck::Pattern),
            Err(ValidationError::InvalidEmail)
        );
        let candidate = Candidate {
            email: "ann@x.com",
            ..candidate
        };
        assert_eq!(
            validate_person(&candidate, DateCheck::Pattern),
            Err(ValidationError::InvalidMobileNumber)
        );
        let candidate = Candidate {
            mobile_number: "1234567890",
            ..candidate
        };
        assert_eq!(
            validate_person(&candidate, DateCheck::Pattern),
            Err(ValidationError::InvalidDateOfBirth)
        );
        let candidate = Candidate {
            date_of_birth: "1990-01-01",
            ..candidate
        };
        assert_eq!(
            validate_person(&candidate, DateCheck::Pattern),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "invalid email address"
        );
        assert_eq!(
            ValidationError::InvalidMobileNumber.to_string(),
            "mobile number must be 10 digits"
        );
        assert_eq!(
            ValidationError::InvalidDateOfBirth.to_string(),
            "invalid date of birth format"
        );
    }
}
