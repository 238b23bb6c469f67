//! SQLite type mappings.
//!
//! This module maps SQLite type names onto a small set of logical categories
//! and decodes single column values into JSON scalars.
//!
//! # Architecture
//!
//! Decoding uses a two-phase approach:
//! 1. `TypeCategory` classifies a type name (declared or runtime storage class)
//! 2. `decode_column` extracts the value with the matching Rust type
//!
//! Dynamic row mapping classifies by the value's runtime storage class, since
//! SQLite lets any column hold any type.

use crate::error::{OpContext, TourResult};
use serde_json::Value as JsonValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

// =============================================================================
// Type Classification
// =============================================================================

/// Logical category for SQLite column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Integer,
    Float,
    Boolean,
    Text,
    Binary,
    Null,
}

/// Classify a SQLite type name into a logical category.
///
/// Follows SQLite's affinity rules for declared types, so `NVARCHAR(120)` is
/// text and `NUMERIC(10,2)` is a float.
pub fn categorize_type(type_name: &str) -> TypeCategory {
    let lower = type_name.to_lowercase();

    if lower.is_empty() || lower == "null" {
        return TypeCategory::Null;
    }

    if lower == "bool" || lower == "boolean" {
        return TypeCategory::Boolean;
    }

    if lower.contains("int") {
        return TypeCategory::Integer;
    }

    if lower.contains("char") || lower.contains("clob") || lower.contains("text") {
        return TypeCategory::Text;
    }

    if lower.contains("blob") || lower.contains("binary") {
        return TypeCategory::Binary;
    }

    if lower.contains("real")
        || lower.contains("floa")
        || lower.contains("doub")
        || lower.contains("numeric")
        || lower.contains("decimal")
    {
        return TypeCategory::Float;
    }

    // date, time, datetime and anything unrecognised come back as text
    TypeCategory::Text
}

/// Rust type a value of the given category scans into.
pub fn scan_type(category: TypeCategory) -> &'static str {
    match category {
        TypeCategory::Integer => "i64",
        TypeCategory::Float => "f64",
        TypeCategory::Boolean => "bool",
        TypeCategory::Text => "String",
        TypeCategory::Binary => "Vec<u8>",
        TypeCategory::Null => "Option<()>",
    }
}

// =============================================================================
// Binary Encoding
// =============================================================================

/// Decode binary data to JSON value.
///
/// Valid UTF-8 is returned as text; anything else is base64 encoded.
pub fn decode_binary_value(bytes: &[u8]) -> JsonValue {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    match std::str::from_utf8(bytes) {
        Ok(s) => JsonValue::String(s.to_string()),
        Err(_) => JsonValue::String(STANDARD.encode(bytes)),
    }
}

// =============================================================================
// Value Decoding
// =============================================================================

/// Decode the value at `idx` using the storage class it actually holds.
pub fn decode_value(row: &SqliteRow, idx: usize) -> TourResult<JsonValue> {
    let raw = row.try_get_raw(idx).op("row.try_get_raw")?;
    if raw.is_null() {
        return Ok(JsonValue::Null);
    }
    let category = categorize_type(raw.type_info().name());
    decode_column(row, idx, category)
}

/// Decode the value at `idx` as the given category.
pub fn decode_column(row: &SqliteRow, idx: usize, category: TypeCategory) -> TourResult<JsonValue> {
    let value = match category {
        TypeCategory::Integer => row
            .try_get::<Option<i64>, _>(idx)
            .op("row.try_get")?
            .map(|v| JsonValue::Number(v.into())),
        TypeCategory::Boolean => row
            .try_get::<Option<bool>, _>(idx)
            .op("row.try_get")?
            .map(JsonValue::Bool),
        TypeCategory::Float => row.try_get::<Option<f64>, _>(idx).op("row.try_get")?.map(|v| {
            serde_json::Number::from_f64(v)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(v.to_string()))
        }),
        TypeCategory::Binary => row
            .try_get::<Option<Vec<u8>>, _>(idx)
            .op("row.try_get")?
            .map(|v| decode_binary_value(&v)),
        TypeCategory::Text => row
            .try_get::<Option<String>, _>(idx)
            .op("row.try_get")?
            .map(JsonValue::String),
        TypeCategory::Null => None,
    };
    Ok(value.unwrap_or(JsonValue::Null))
}
