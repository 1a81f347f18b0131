//! A template together with the records laid out by it.

use crate::{FieldValue, Record, Result, Template, Writer};
use std::sync::Arc;

/// One template definition followed by zero or more of its data records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup {
    template: Arc<Template>,
    records: Vec<Record>,
}

impl RecordGroup {
    /// Create an empty group for a template.
    pub fn new(template: Arc<Template>) -> Self {
        Self {
            template,
            records: Vec::new(),
        }
    }

    /// Build a record from `values` and append it.
    ///
    /// On error the group is left unchanged.
    pub fn add_record(&mut self, values: Vec<FieldValue>) -> Result<&mut Self> {
        let record = Record::new(Arc::clone(&self.template), values)?;
        self.records.push(record);
        Ok(self)
    }

    /// Builder-style variant of [`RecordGroup::add_record`].
    pub fn with_record(mut self, values: Vec<FieldValue>) -> Result<Self> {
        self.add_record(values)?;
        Ok(self)
    }

    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of flowsets this group puts on the wire.
    pub fn flowset_count(&self) -> usize {
        1 + self.records.len()
    }

    /// Length of the template flowset plus all data flowsets.
    pub fn encoded_len(&self) -> usize {
        self.template.encoded_len() + self.records.iter().map(Record::encoded_len).sum::<usize>()
    }

    /// Write the template definition, then every record in append order.
    ///
    /// The template is written even when the group has no records.
    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.template.encode(w)?;
        for record in &self.records {
            record.encode(w);
        }
        Ok(())
    }
}
