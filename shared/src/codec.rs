//! Conversion between JSON text and DynamoDB attribute values.
//!
//! Numbers never pass through `f64`. Inbound, the literal text of a JSON number
//! is parsed as a [`Decimal`] and stored as the `N` attribute string; numbers
//! wider than a `Decimal` keep their literal text. Outbound, the `N` string is
//! written back into the JSON document as a raw number token, so `9.99` goes in
//! and `9.99` comes out.

use aws_sdk_dynamodb::types::AttributeValue;
use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("'{0}' is not a valid decimal number")]
    InvalidNumber(String),
    #[error("malformed JSON value: {0}")]
    Json(String),
    #[error("binary attributes cannot be rendered as JSON")]
    Binary,
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Json(e.to_string())
    }
}

/// Parses the literal text of a number, rejecting anything that would lose digits.
pub fn parse_decimal(text: &str) -> Result<Decimal, CodecError> {
    let text = text.trim();
    Decimal::from_str_exact(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| CodecError::InvalidNumber(text.to_string()))
}

/// Canonical text for a number: normalized when it fits a [`Decimal`], otherwise
/// the trimmed literal as long as it is still a valid JSON number.
fn number_text(text: &str) -> Result<String, CodecError> {
    match parse_decimal(text) {
        Ok(decimal) => Ok(decimal.normalize().to_string()),
        Err(e) => match serde_json::from_str::<serde_json::Number>(text) {
            Ok(_) => Ok(text.trim().to_string()),
            Err(_) => Err(e),
        },
    }
}

pub fn number_attribute(text: &str) -> Result<AttributeValue, CodecError> {
    number_text(text).map(AttributeValue::N)
}

/// Converts one JSON value, still in its raw text form, into an attribute value.
pub fn attribute_from_json(raw: &RawValue) -> Result<AttributeValue, CodecError> {
    let text = raw.get().trim();

    match text.as_bytes().first() {
        Some(b'{') => {
            let fields: HashMap<String, Box<RawValue>> = serde_json::from_str(text)?;
            let mut map = HashMap::with_capacity(fields.len());
            for (name, value) in fields {
                map.insert(name, attribute_from_json(&value)?);
            }
            Ok(AttributeValue::M(map))
        }
        Some(b'[') => {
            let elements: Vec<Box<RawValue>> = serde_json::from_str(text)?;
            elements
                .iter()
                .map(|e| attribute_from_json(e))
                .collect::<Result<Vec<_>, _>>()
                .map(AttributeValue::L)
        }
        Some(b'"') => Ok(AttributeValue::S(serde_json::from_str(text)?)),
        Some(b't') | Some(b'f') => Ok(AttributeValue::Bool(serde_json::from_str(text)?)),
        Some(b'n') => Ok(AttributeValue::Null(true)),
        _ => number_attribute(text),
    }
}

fn number_literal(n: &str) -> Result<Box<RawValue>, CodecError> {
    Ok(RawValue::from_string(number_text(n)?)?)
}

/// Serializes a stored item as a JSON object.
#[derive(Debug)]
pub struct JsonItem<'a>(pub &'a Item);

/// Serializes a single stored attribute as a JSON value.
#[derive(Debug)]
pub struct JsonAttribute<'a>(pub &'a AttributeValue);

impl Serialize for JsonItem<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, &JsonAttribute(value))?;
        }
        map.end()
    }
}

impl Serialize for JsonAttribute<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            AttributeValue::S(s) => serializer.serialize_str(s),
            AttributeValue::N(n) => number_literal(n)
                .map_err(S::Error::custom)?
                .serialize(serializer),
            AttributeValue::Bool(b) => serializer.serialize_bool(*b),
            AttributeValue::Null(_) => serializer.serialize_unit(),
            AttributeValue::L(list) => serializer.collect_seq(list.iter().map(JsonAttribute)),
            AttributeValue::M(map) => JsonItem(map).serialize(serializer),
            AttributeValue::Ss(set) => serializer.collect_seq(set),
            AttributeValue::Ns(set) => {
                let mut seq = serializer.serialize_seq(Some(set.len()))?;
                for n in set {
                    seq.serialize_element(&number_literal(n).map_err(S::Error::custom)?)?;
                }
                seq.end()
            }
            _ => Err(S::Error::custom(CodecError::Binary)),
        }
    }
}
