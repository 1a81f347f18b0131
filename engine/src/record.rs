//! Data records.
//!
//! A record is one row of values laid out by a template. Values are encoded
//! when the record is built, so an invalid row never exists as a `Record`
//! and encoding a record cannot fail.
//!
//! ```text
//! ┌───────────────────┬─────────┬──────────────────┬───────────┐
//! │ FlowSet ID        │ Length  │ Field bytes      │ Padding   │
//! │ u16 = template id │ u16     │ in template order│ 0..=3 × 0 │
//! └───────────────────┴─────────┴──────────────────┴───────────┘
//! ```

use crate::{value, Error, FieldValue, Result, Template, Writer};
use std::sync::Arc;

/// Bytes before the field region: flowset id and length.
pub const DATA_HEADER_LEN: usize = 4;

/// One encoded data row bound to its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    template: Arc<Template>,
    fields: Vec<Vec<u8>>,
    padding: u8,
}

impl Record {
    /// Encode `values` against `template`.
    ///
    /// Values must be supplied in template field order, one per field. The
    /// first value that fails to encode aborts construction.
    pub fn new(template: Arc<Template>, values: Vec<FieldValue>) -> Result<Self> {
        if values.len() != template.field_count() {
            return Err(Error::Arity {
                expected: template.field_count(),
                actual: values.len(),
            });
        }

        let fields = template
            .fields()
            .iter()
            .zip(&values)
            .map(|(field, value)| value::encode(field, value))
            .collect::<Result<Vec<_>>>()?;

        let raw_len: usize = fields.iter().map(Vec::len).sum();
        let padding = ((4 - raw_len % 4) % 4) as u8;

        let length = DATA_HEADER_LEN + raw_len + usize::from(padding);
        if length > usize::from(u16::MAX) {
            return Err(Error::LengthOverflow {
                what: "data flowset length",
                length,
            });
        }

        Ok(Self {
            template,
            fields,
            padding,
        })
    }

    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// Encoded bytes of each field, in template order.
    pub fn fields(&self) -> &[Vec<u8>] {
        &self.fields
    }

    /// Total field bytes before padding.
    pub fn raw_len(&self) -> usize {
        self.fields.iter().map(Vec::len).sum()
    }

    /// Number of zero bytes appended to reach 4-byte alignment.
    pub fn padding_len(&self) -> usize {
        usize::from(self.padding)
    }

    /// Length of the encoded data flowset, header included.
    pub fn encoded_len(&self) -> usize {
        DATA_HEADER_LEN + self.raw_len() + self.padding_len()
    }

    /// Write the data flowset.
    pub fn encode(&self, w: &mut Writer) {
        w.append_u16(self.template.id());
        // bounded by u16::MAX in new()
        w.append_u16(self.encoded_len() as u16);
        for field in &self.fields {
            w.append_raw(field);
        }
        w.append_zeros(self.padding_len());
    }
}
