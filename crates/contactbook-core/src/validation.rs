use crate::{
    constants::{EMAIL_PATTERN, PHONE_PATTERN},
    contact::{ContactFields, ContactRecord, RowSource},
};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).expect("valid email regex");
    static ref PHONE_REGEX: Regex = Regex::new(PHONE_PATTERN).expect("valid phone regex");
}

/// Why a single row was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowErrorReason {
    /// one of name, email or phone is absent or empty
    #[error("Missing required fields.")]
    MissingRequiredFields,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid phone number.")]
    InvalidPhone,
}

/// A rejected row together with its 1-based position in the batch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {}: {}", .origin.label(), .index, .reason)]
pub struct RowError {
    pub origin: RowSource,
    pub index: usize,
    pub reason: RowErrorReason,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Validates a single candidate contact
pub fn validate_record(record: &ContactRecord) -> Result<ContactFields, RowErrorReason> {
    let (name, email, phone) = match (
        non_empty(&record.name),
        non_empty(&record.email),
        non_empty(&record.phone),
    ) {
        (Some(name), Some(email), Some(phone)) => (name, email, phone),
        _ => return Err(RowErrorReason::MissingRequiredFields),
    };

    if !is_valid_email(email) {
        return Err(RowErrorReason::InvalidEmail);
    }
    if !is_valid_phone(phone) {
        return Err(RowErrorReason::InvalidPhone);
    }
    Ok(ContactFields::new(name, email, phone))
}

/// Validates every record of a batch, returning one result per record in input order
pub fn validate_rows(
    records: &[ContactRecord],
    origin: RowSource,
) -> Vec<Result<ContactFields, RowError>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            validate_record(record).map_err(|reason| RowError {
                origin,
                index: idx + 1,
                reason,
            })
        })
        .collect()
}

/// Returns the whole batch if every row passed, otherwise all failing rows
pub fn into_valid_batch(
    results: Vec<Result<ContactFields, RowError>>,
) -> Result<Vec<ContactFields>, Vec<RowError>> {
    let mut valid = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(fields) => valid.push(fields),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(valid)
    } else {
        Err(errors)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::{record, valid_record};

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("ann@xcom"));
        assert!(!is_valid_email("ann@@x.com"));
        assert!(!is_valid_email("an n@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@x."));
    }

    #[test]
    fn phone_digits_only() {
        assert!(is_valid_phone("5551234"));
        assert!(is_valid_phone("0043123"));
        assert!(!is_valid_phone("+435551234"));
        assert!(!is_valid_phone("555 1234"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone(""));
        // non-ascii digits are not decimal digits in this sense
        assert!(!is_valid_phone("٥٥٥"));
    }

    #[test]
    fn validate_record_baseline() {
        let res = validate_record(&valid_record());
        assert_eq!(
            res,
            Ok(ContactFields::new("Ann", "ann@x.com", "5551234"))
        );
    }

    #[test]
    fn validate_record_missing_fields() {
        assert_eq!(
            validate_record(&record(None, Some("ann@x.com"), Some("5551234"))),
            Err(RowErrorReason::MissingRequiredFields)
        );
        assert_eq!(
            validate_record(&record(Some("Ann"), Some(""), Some("5551234"))),
            Err(RowErrorReason::MissingRequiredFields)
        );
        assert_eq!(
            validate_record(&record(Some("Ann"), Some("ann@x.com"), None)),
            Err(RowErrorReason::MissingRequiredFields)
        );
    }

    #[test]
    fn validate_record_missing_wins_over_invalid() {
        assert_eq!(
            validate_record(&record(None, Some("bad-email"), Some("abc"))),
            Err(RowErrorReason::MissingRequiredFields)
        );
    }

    #[test]
    fn validate_record_email_checked_before_phone() {
        assert_eq!(
            validate_record(&record(Some("A"), Some("bad-email"), Some("abc"))),
            Err(RowErrorReason::InvalidEmail)
        );
        assert_eq!(
            validate_record(&record(Some("A"), Some("a@b.co"), Some("abc"))),
            Err(RowErrorReason::InvalidPhone)
        );
    }

    #[test]
    fn validate_rows_reports_one_based_index() {
        let records = vec![
            valid_record(),
            record(Some("B"), Some("b@x.com"), Some("12a")),
            record(Some("C"), None, Some("123")),
        ];
        let results = validate_rows(&records, RowSource::Json);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(RowError {
                origin: RowSource::Json,
                index: 2,
                reason: RowErrorReason::InvalidPhone
            })
        );
        assert_eq!(
            results[2].as_ref().unwrap_err().to_string(),
            "Item 3: Missing required fields."
        );
    }

    #[test]
    fn row_error_display_for_spreadsheet() {
        let err = RowError {
            origin: RowSource::Spreadsheet,
            index: 1,
            reason: RowErrorReason::InvalidEmail,
        };
        assert_eq!(err.to_string(), "Row 1: Invalid email format.");
    }

    #[test]
    fn into_valid_batch_all_valid() {
        let records = vec![
            valid_record(),
            record(Some("Bob"), Some("bob@x.com"), Some("5559876")),
        ];
        let batch = into_valid_batch(validate_rows(&records, RowSource::Spreadsheet));
        assert_eq!(batch.map(|b| b.len()), Ok(2));
    }

    #[test]
    fn into_valid_batch_collects_all_errors() {
        let records = vec![
            record(Some("A"), Some("bad-email"), Some("123")),
            valid_record(),
            record(Some("C"), Some("c@x.com"), Some("x")),
        ];
        let errors = into_valid_batch(validate_rows(&records, RowSource::Json)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].index, 1);
        assert_eq!(errors[0].reason, RowErrorReason::InvalidEmail);
        assert_eq!(errors[1].index, 3);
    }

    #[test]
    fn into_valid_batch_empty() {
        assert_eq!(into_valid_batch(vec![]), Ok(vec![]));
    }
}
