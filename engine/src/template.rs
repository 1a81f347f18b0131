//! Template definitions.
//!
//! A template names an ordered list of fields. Data records are laid out in
//! exactly this order, and a collector cannot decode a data flowset until it
//! has seen the template flowset with the matching id.
//!
//! ```text
//! ┌───────────┬─────────┬─────────────┬─────────────┬──────────────────────┐
//! │ FlowSet ID│ Length  │ Template ID │ Field Count │ (Element, Size) × N  │
//! │ u16 = 0   │ u16     │ u16         │ u16         │ u16, u16             │
//! └───────────┴─────────┴─────────────┴─────────────┴──────────────────────┘
//! ```

use crate::{Error, FieldSpec, Result, Writer};
use serde::{Deserialize, Serialize};

/// FlowSet id that marks a template definition.
pub const TEMPLATE_FLOWSET_ID: u16 = 0;

/// Bytes before the first field pair: flowset id, length, template id, count.
pub const TEMPLATE_HEADER_LEN: usize = 8;

/// Ordered field layout under a caller-chosen id.
///
/// Build once, then share as `Arc<Template>` across records and packets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    id: u16,
    fields: Vec<FieldSpec>,
}

impl Template {
    /// Create an empty template.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Create a template from an existing field list.
    pub fn with_fields(id: u16, fields: Vec<FieldSpec>) -> Self {
        Self { id, fields }
    }

    /// Append a field (builder style).
    ///
    /// A zero size is accepted here and reported when the template is
    /// encoded; use [`Template::try_with_field`] to fail immediately.
    pub fn with_field(mut self, element: impl Into<u16>, size: u16) -> Self {
        self.fields.push(FieldSpec::unchecked(element, size));
        self
    }

    /// Append a field, rejecting a zero size.
    pub fn try_with_field(mut self, element: impl Into<u16>, size: u16) -> Result<Self> {
        self.fields.push(FieldSpec::new(element, size)?);
        Ok(self)
    }

    /// Append a field in place.
    pub fn push_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Template id, also used as the flowset id of its data records.
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Length of the encoded template flowset in bytes.
    pub fn encoded_len(&self) -> usize {
        TEMPLATE_HEADER_LEN + 4 * self.fields.len()
    }

    /// Check that the template can be put on the wire.
    pub fn validate(&self) -> Result<()> {
        for field in &self.fields {
            field.validate()?;
        }
        let length = self.encoded_len();
        if length > usize::from(u16::MAX) {
            return Err(Error::LengthOverflow {
                what: "template flowset length",
                length,
            });
        }
        Ok(())
    }

    /// Write the template flowset. Nothing is written if validation fails.
    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.validate()?;

        // validate() bounds both values by u16::MAX
        w.append_u16(TEMPLATE_FLOWSET_ID);
        w.append_u16(self.encoded_len() as u16);
        w.append_u16(self.id);
        w.append_u16(self.fields.len() as u16);
        for field in &self.fields {
            w.append_u16(field.element_id);
            w.append_u16(field.size);
        }
        Ok(())
    }
}
