//! Strict decoding of product request bodies.
//!
//! Decoding failures are classified into a small set of stable,
//! client-facing messages. The classification is pure: it looks only at the
//! `serde_json` error and the raw body.

use std::fmt;

use serde::de::{value::MapAccessDeserializer, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{error::Category, Value};
use thiserror::Error;
use uuid::Uuid;

use super::types::Product;

/// Why a request body could not be decoded into a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BodyError {
    #[error("request body contains badly-formed JSON at position: {offset}")]
    Malformed { offset: usize },
    #[error("request body contains badly-formed JSON")]
    Truncated,
    #[error("request body must not be empty")]
    Empty,
    #[error("invalid value for the \"{field}\" field at position: {offset}")]
    TypeMismatch { field: String, offset: usize },
    #[error("unknown field \"{field}\"")]
    UnknownField { field: String },
    /// Anything else. The detail is for server-side logs only.
    #[error("error decoding JSON")]
    Decode(String),
}

impl BodyError {
    /// Maps a `serde_json` failure on `body` to a body error.
    pub fn classify(err: &serde_json::Error, body: &[u8]) -> Self {
        match err.classify() {
            Category::Eof if is_blank(body) => BodyError::Empty,
            Category::Eof => BodyError::Truncated,
            Category::Syntax => BodyError::Malformed {
                offset: byte_offset(body, err.line(), err.column()),
            },
            Category::Data => classify_data(err, body),
            Category::Io => BodyError::Decode(err.to_string()),
        }
    }
}

/// Decodes a request body into a product.
///
/// Returns `Ok(None)` when the body is the JSON literal `null`.
/// Anything but an object (arrays included) is rejected.
pub fn decode_product(body: &[u8]) -> Result<Option<Product>, BodyError> {
    serde_json::from_slice::<Option<ProductObject>>(body)
        .map(|product| product.map(|ProductObject(product)| product))
        .map_err(|err| BodyError::classify(&err, body))
}

/// A product that was written as a JSON object.
struct ProductObject(Product);

impl<'de> Deserialize<'de> for ProductObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProductObjectVisitor)
    }
}

struct ProductObjectVisitor;

impl<'de> Visitor<'de> for ProductObjectVisitor {
    type Value = ProductObject;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a product object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Product::deserialize(MapAccessDeserializer::new(map)).map(ProductObject)
    }
}

/// Top-level members of a JSON object in the order they appear in the body.
struct OrderedFields(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for OrderedFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedFieldsVisitor)
    }
}

struct OrderedFieldsVisitor;

impl<'de> Visitor<'de> for OrderedFieldsVisitor {
    type Value = OrderedFields;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Value>()? {
            fields.push(entry);
        }
        Ok(OrderedFields(fields))
    }
}

fn classify_data(err: &serde_json::Error, body: &[u8]) -> BodyError {
    let message = err.to_string();

    if let Some(field) = unknown_field(&message) {
        return BodyError::UnknownField { field };
    }

    match mismatched_field(body) {
        Some(field) => BodyError::TypeMismatch {
            field,
            offset: byte_offset(body, err.line(), err.column()),
        },
        None => BodyError::Decode(message),
    }
}

/// Extracts `email` from "unknown field `email`, expected one of ...".
fn unknown_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let (field, _) = rest.split_once('`')?;
    Some(field.to_string())
}

/// Finds the first known field, in body order, whose value has the wrong
/// shape. Fields are decoded in that order, so this is the one the decoder
/// stopped at.
fn mismatched_field(body: &[u8]) -> Option<String> {
    let OrderedFields(fields) = serde_json::from_slice(body).ok()?;

    fields.into_iter().find_map(|(key, value)| {
        let fits = match key.as_str() {
            "id" => value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok()),
            "name" => value.is_string(),
            "price" => value.is_number(),
            _ => true,
        };
        (!fits).then_some(key)
    })
}

/// Converts a one-based line and column into a byte offset from the start.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    preceding + column
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_body() {
        let product = decode_product(br#"{"name":"Car","price":1.23}"#)
            .unwrap()
            .unwrap();

        assert!(product.id.is_nil());
        assert_eq!(product.name, "Car");
        assert_eq!(product.price, 1.23);
    }

    #[test]
    fn test_decode_body_with_id() {
        let product = decode_product(
            br#"{"id":"6ba7b810-9dad-11d1-80b4-00c04fd430c8","name":"Car","price":1.23}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(product.id.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    }

    #[test]
    fn test_decode_null_body() {
        assert_eq!(decode_product(b"null"), Ok(None));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(decode_product(b""), Err(BodyError::Empty));
        assert_eq!(decode_product(b"  \n"), Err(BodyError::Empty));
        assert_eq!(
            BodyError::Empty.to_string(),
            "request body must not be empty"
        );
    }

    #[test]
    fn test_truncated_body() {
        assert_eq!(decode_product(br#"{"name":"#), Err(BodyError::Truncated));
        assert_eq!(
            BodyError::Truncated.to_string(),
            "request body contains badly-formed JSON"
        );
    }

    #[test]
    fn test_malformed_body_reports_position() {
        let result = decode_product(br#"{"name": x}"#);

        match result {
            Err(BodyError::Malformed { offset }) => assert!(offset > 0),
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_message() {
        let error = BodyError::Malformed { offset: 10 };
        assert_eq!(
            error.to_string(),
            "request body contains badly-formed JSON at position: 10"
        );
    }

    #[test]
    fn test_unknown_field_is_named() {
        let result = decode_product(br#"{"name":"Car","price":1.23,"email":"a@b.c"}"#);

        assert_eq!(
            result,
            Err(BodyError::UnknownField {
                field: "email".to_string()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown field \"email\""
        );
    }

    #[test]
    fn test_wrong_type_names_the_field() {
        let result = decode_product(br#"{"name":"Car","price":"cheap"}"#);

        match result {
            Err(BodyError::TypeMismatch { field, offset }) => {
                assert_eq!(field, "price");
                assert!(offset > 0);
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_first_bad_field_in_body_order_is_named() {
        let body = br#"{"price":"cheap","name":5}"#;

        assert_eq!(
            decode_product(body),
            Err(BodyError::TypeMismatch {
                field: "price".to_string(),
                offset: 16,
            })
        );

        let body = br#"{"name":5,"price":"cheap"}"#;
        assert!(matches!(
            decode_product(body),
            Err(BodyError::TypeMismatch { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_array_body_is_rejected() {
        let body = br#"["6ba7b810-9dad-11d1-80b4-00c04fd430c8","Car",1.23]"#;

        assert!(matches!(decode_product(body), Err(BodyError::Decode(_))));
        assert!(matches!(decode_product(b"[]"), Err(BodyError::Decode(_))));
    }

    #[test]
    fn test_invalid_uuid_names_the_id_field() {
        let result = decode_product(br#"{"id":"nope","name":"Car","price":1}"#);

        assert!(matches!(
            result,
            Err(BodyError::TypeMismatch { ref field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = BodyError::TypeMismatch {
            field: "price".to_string(),
            offset: 29,
        };
        assert_eq!(
            error.to_string(),
            "invalid value for the \"price\" field at position: 29"
        );
    }

    #[test]
    fn test_non_object_body_is_a_generic_decode_error() {
        let result = decode_product(b"42");

        assert!(matches!(result, Err(BodyError::Decode(_))));
        assert_eq!(result.unwrap_err().to_string(), "error decoding JSON");
    }

    #[test]
    fn test_byte_offset_spans_lines() {
        let body = b"{\n  \"name\": x\n}";
        assert_eq!(byte_offset(body, 1, 1), 1);
        assert_eq!(byte_offset(body, 2, 11), 13);
    }
}
