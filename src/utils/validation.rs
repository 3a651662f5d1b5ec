//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para extraer campos de un cuerpo
//! JSON y para normalizar VINs.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::utils::errors::AppError;

lazy_static! {
    /// Un VIN solo admite caracteres alfanuméricos
    pub static ref VIN_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Forma canónica de un VIN (minúsculas)
pub fn normalize_vin(vin: &str) -> String {
    vin.to_lowercase()
}

/// Un valor `null` cuenta como clave ausente
fn present<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

/// Extraer un string obligatorio
pub fn required_string(body: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    let value = present(body, key).ok_or_else(|| AppError::MissingField(key.to_string()))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidField {
            field: key.to_string(),
            expected: "string",
        })
}

/// Extraer un string opcional
pub fn optional_string(body: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match present(body, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| AppError::InvalidField {
                field: key.to_string(),
                expected: "string",
            }),
    }
}

/// Extraer un entero obligatorio que quepa en i32
pub fn required_i32(body: &Map<String, Value>, key: &str) -> Result<i32, AppError> {
    let value = present(body, key).ok_or_else(|| AppError::MissingField(key.to_string()))?;
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::InvalidField {
            field: key.to_string(),
            expected: "integer",
        })
}

/// Extraer un número obligatorio; los enteros JSON también valen
pub fn required_f64(body: &Map<String, Value>, key: &str) -> Result<f64, AppError> {
    let value = present(body, key).ok_or_else(|| AppError::MissingField(key.to_string()))?;
    value.as_f64().ok_or_else(|| AppError::InvalidField {
        field: key.to_string(),
        expected: "number",
    })
}

/// Exigir que el cuerpo de la petición sea un objeto JSON
pub fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(AppError::InvalidBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_normalize_vin() {
        assert_eq!(normalize_vin("1HGCM82633A123456"), "1hgcm82633a123456");
        assert_eq!(normalize_vin("1hgcm82633a123456"), "1hgcm82633a123456");
    }

    #[test]
    fn test_vin_pattern() {
        assert!(VIN_PATTERN.is_match("1FTFW1ET1EF123456"));
        assert!(!VIN_PATTERN.is_match("1FTFW1ET-EF123456"));
        assert!(!VIN_PATTERN.is_match(""));
    }

    #[test]
    fn test_required_string() {
        let body = object(json!({"model_name": "A8", "horse_power": 335, "color": null}));
        assert_eq!(required_string(&body, "model_name").unwrap(), "A8");
        assert!(matches!(
            required_string(&body, "fuel_type"),
            Err(AppError::MissingField(key)) if key == "fuel_type"
        ));
        assert!(matches!(
            required_string(&body, "color"),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            required_string(&body, "horse_power"),
            Err(AppError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_required_numbers() {
        let body = object(json!({
            "horse_power": 335,
            "model_year": "recent",
            "purchase_price": 92000,
            "huge": 9_999_999_999i64,
        }));
        assert_eq!(required_i32(&body, "horse_power").unwrap(), 335);
        assert!(matches!(
            required_i32(&body, "model_year"),
            Err(AppError::InvalidField { expected: "integer", .. })
        ));
        assert!(required_i32(&body, "huge").is_err());
        assert_eq!(required_f64(&body, "purchase_price").unwrap(), 92000.0);
        assert!(matches!(
            required_f64(&body, "missing"),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_optional_string() {
        let body = object(json!({"description": "Silver Dawn", "other": 3}));
        assert_eq!(
            optional_string(&body, "description").unwrap().as_deref(),
            Some("Silver Dawn")
        );
        assert_eq!(optional_string(&body, "absent").unwrap(), None);
        assert!(optional_string(&body, "other").is_err());
    }

    #[test]
    fn test_into_object_rejects_arrays() {
        assert!(into_object(json!({"a": 1})).is_ok());
        assert!(matches!(
            into_object(json!([1, 2])),
            Err(AppError::InvalidBody(_))
        ));
    }
}
