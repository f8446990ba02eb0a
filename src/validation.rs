//! Request validation for create and update bodies.

use crate::error::ValidationError;
use crate::model::{NewProvider, Service};
use serde_json::Value;

const MIN_NAME_CHARS: usize = 3;

/// Validate a request body into a [`NewProvider`]. Name is checked before
/// service and only the first failure is reported. Anything that is not an
/// object (including a missing body) has no name and fails on it.
pub fn validate_provider(body: &Value) -> Result<NewProvider, ValidationError> {
    let name = match body.get("name") {
        Some(Value::String(s)) if s.chars().count() >= MIN_NAME_CHARS => s.clone(),
        _ => return Err(ValidationError::InvalidName),
    };
    let service = match body.get("service") {
        Some(Value::String(s)) => s.parse::<Service>()?,
        _ => return Err(ValidationError::InvalidService),
    };
    Ok(NewProvider { name, service })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_body() {
        let p = validate_provider(&json!({ "name": "Alice", "service": "Doctor" })).unwrap();
        assert_eq!(p.name, "Alice");
        assert_eq!(p.service, Service::Doctor);
    }

    #[test]
    fn short_or_non_string_name_is_rejected_whatever_the_service() {
        for body in [
            json!({ "name": "Al", "service": "Doctor" }),
            json!({ "name": "", "service": "Pilot" }),
            json!({ "name": 12345, "service": "Nurse" }),
            json!({ "name": null, "service": "Nurse" }),
            json!({ "service": "Teacher" }),
            json!([]),
            Value::Null,
        ] {
            assert_eq!(validate_provider(&body), Err(ValidationError::InvalidName), "{body}");
        }
    }

    #[test]
    fn unknown_service_is_rejected() {
        for body in [
            json!({ "name": "Alice", "service": "Pilot" }),
            json!({ "name": "Alice", "service": "doctor" }),
            json!({ "name": "Alice", "service": 1 }),
            json!({ "name": "Alice" }),
        ] {
            assert_eq!(validate_provider(&body), Err(ValidationError::InvalidService), "{body}");
        }
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(validate_provider(&json!({ "name": "Zoë", "service": "Nurse" })).is_ok());
        assert_eq!(
            validate_provider(&json!({ "name": "Zö", "service": "Nurse" })),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let p = validate_provider(&json!({ "id": 99, "name": "Bob", "service": "Engineer" })).unwrap();
        assert_eq!(p, NewProvider { name: "Bob".into(), service: Service::Engineer });
    }
}
