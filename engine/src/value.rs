//! Typed field values and their wire encoding.
//!
//! Values are a closed set of kinds. Each kind has exactly one encoding, and
//! fixed-width kinds only encode into a field that declares that same width,
//! so a template's declared layout always matches the bytes written.
//!
//! Text is always written at the field's full declared size: the string's
//! bytes left-aligned, the remainder zero-filled.

use crate::{Error, FieldSpec, Result};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A single typed value supplied for one template field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Ipv4(Ipv4Addr),
    Text(String),
}

impl FieldValue {
    /// Parse a dotted-quad address into an `Ipv4` value.
    pub fn ipv4(text: &str) -> Result<Self> {
        text.parse()
            .map(FieldValue::Ipv4)
            .map_err(|_| Error::AddressFormat(text.to_string()))
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::U8(_) => "u8",
            FieldValue::U16(_) => "u16",
            FieldValue::U32(_) => "u32",
            FieldValue::U64(_) => "u64",
            FieldValue::Ipv4(_) => "ipv4",
            FieldValue::Text(_) => "text",
        }
    }

    /// Convert a JSON scalar into the value kind the field calls for.
    ///
    /// Strings become addresses on IPv4-address elements and text everywhere
    /// else. Non-negative integers take the unsigned kind matching the
    /// field's width.
    pub fn from_json(value: &serde_json::Value, field: &FieldSpec) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) if field.is_ipv4_address() => Self::ipv4(s),
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => match n.as_u64() {
                Some(v) => Self::unsigned(v, field.size),
                None if n.is_i64() => Err(unsupported("negative integer", field.size)),
                None => Err(unsupported("float", field.size)),
            },
            Value::Null => Err(unsupported("null", field.size)),
            Value::Bool(_) => Err(unsupported("bool", field.size)),
            Value::Array(_) => Err(unsupported("array", field.size)),
            Value::Object(_) => Err(unsupported("object", field.size)),
        }
    }

    fn unsigned(v: u64, size: u16) -> Result<Self> {
        let out_of_range = || unsupported(&format!("integer {v}"), size);
        match size {
            1 => u8::try_from(v).map(FieldValue::U8).map_err(|_| out_of_range()),
            2 => u16::try_from(v).map(FieldValue::U16).map_err(|_| out_of_range()),
            4 => u32::try_from(v).map(FieldValue::U32).map_err(|_| out_of_range()),
            8 => Ok(FieldValue::U64(v)),
            _ => Err(out_of_range()),
        }
    }
}

fn unsupported(kind: &str, size: u16) -> Error {
    Error::UnsupportedValue {
        kind: kind.to_string(),
        size,
    }
}

/// Encode one value for the given field.
pub fn encode(field: &FieldSpec, value: &FieldValue) -> Result<Vec<u8>> {
    let bytes = match value {
        FieldValue::U8(v) => vec![*v],
        FieldValue::U16(v) => v.to_be_bytes().to_vec(),
        FieldValue::U32(v) => v.to_be_bytes().to_vec(),
        FieldValue::U64(v) => v.to_be_bytes().to_vec(),
        FieldValue::Ipv4(addr) => addr.octets().to_vec(),
        FieldValue::Text(s) => return encode_text(field, s),
    };

    if bytes.len() != usize::from(field.size) {
        return Err(unsupported(value.kind(), field.size));
    }
    Ok(bytes)
}

fn encode_text(field: &FieldSpec, text: &str) -> Result<Vec<u8>> {
    let src = text.as_bytes();
    let size = usize::from(field.size);
    if src.len() > size {
        return Err(Error::StringTooLong {
            length: src.len(),
            size: field.size,
        });
    }

    let mut out = vec![0u8; size];
    out[..src.len()].copy_from_slice(src);
    Ok(out)
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::U8(v)
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::U16(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::U32(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::U64(v)
    }
}

impl From<Ipv4Addr> for FieldValue {
    fn from(addr: Ipv4Addr) -> Self {
        FieldValue::Ipv4(addr)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}
