use std::collections::HashMap;
use std::fmt::Write;
use validator::{ValidationError, ValidationErrors};

fn message_for(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match err.code.as_ref() {
            "email" => "invalid email format".to_string(),
            "length" => "invalid length".to_string(),
            "range" => "value out of range".to_string(),
            "required" => "required".to_string(),
            _ => "invalid value".to_string(),
        })
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut result = String::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            writeln!(&mut result, "{field}: {}", message_for(err)).unwrap();
        }
    }

    if result.is_empty() {
        "Validation failed".to_string()
    } else {
        result.trim().to_string()
    }
}

pub fn validation_error_map(errors: &ValidationErrors) -> HashMap<String, String> {
    let mut result = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        if let Some(err) = field_errors.first() {
            result.insert(field.to_string(), message_for(err));
        }
    }

    result
}
