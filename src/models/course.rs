use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

pub const NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// One page of courses plus the total row count.
#[derive(Debug, Serialize)]
pub struct CoursePage {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub items: Vec<Course>,
}

/// Field name -> list of messages, returned as-is with status 400.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Extracts and validates `name` from a request body. `id` is output-only
/// and never read from input; unknown fields are ignored.
pub fn validate_name(body: &Value) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match body.get("name") {
        None | Some(Value::Null) => {
            errors.insert("name", vec!["Missing data for required field.".to_string()]);
            return Err(errors);
        }
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.insert("name", vec!["Not a valid string.".to_string()]);
            return Err(errors);
        }
    };

    if name.is_empty() {
        errors.insert("name", vec!["Shorter than minimum length 1.".to_string()]);
        return Err(errors);
    }
    if name.chars().count() > NAME_MAX_LEN {
        errors.insert(
            "name",
            vec![format!("Longer than maximum length {}.", NAME_MAX_LEN)],
        );
        return Err(errors);
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_plain_name() {
        assert_eq!(validate_name(&json!({"name": "Algebra"})).unwrap(), "Algebra");
    }

    #[test]
    fn ignores_id_on_input() {
        let got = validate_name(&json!({"id": 99, "name": "Algebra"})).unwrap();
        assert_eq!(got, "Algebra");
    }

    #[test]
    fn rejects_missing_name() {
        let errors = validate_name(&json!({"title": "Algebra"})).unwrap_err();
        assert_eq!(errors["name"], vec!["Missing data for required field."]);
    }

    #[test]
    fn rejects_null_name() {
        let errors = validate_name(&json!({"name": null})).unwrap_err();
        assert_eq!(errors["name"], vec!["Missing data for required field."]);
    }

    #[test]
    fn rejects_non_string_name() {
        let errors = validate_name(&json!({"name": 42})).unwrap_err();
        assert_eq!(errors["name"], vec!["Not a valid string."]);
    }

    #[test]
    fn rejects_empty_name() {
        let errors = validate_name(&json!({"name": ""})).unwrap_err();
        assert_eq!(errors["name"], vec!["Shorter than minimum length 1."]);
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(NAME_MAX_LEN + 1);
        let errors = validate_name(&json!({"name": long})).unwrap_err();
        assert_eq!(errors["name"], vec!["Longer than maximum length 255."]);

        let max = "x".repeat(NAME_MAX_LEN);
        assert!(validate_name(&json!({"name": max})).is_ok());
    }
}
