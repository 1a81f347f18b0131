//! Export handler - turns JSON flow batches into NetFlow v9 packets.

use crate::error::{AppError, Result};
use crate::exporter::Exporter;
use flowexport_engine::{Error, FieldSpec, FieldValue, InformationElement, RecordGroup, Template};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for an export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Source id for the packet header; the server default when absent
    pub source_id: Option<u32>,
    /// Header time in unix seconds; the current time when absent
    pub export_time: Option<u32>,
    /// Template groups, in wire order
    pub groups: Vec<GroupRequest>,
}

/// A template and the rows laid out by it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub template: TemplateRequest,
    /// One JSON array per record, values in template field order
    #[serde(default)]
    pub records: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub id: u16,
    pub fields: Vec<FieldRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRequest {
    pub element: ElementRef,
    pub size: u16,
}

/// An element given by registry name or by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ElementRef {
    Named(InformationElement),
    Id(u16),
}

impl From<ElementRef> for u16 {
    fn from(element: ElementRef) -> u16 {
        match element {
            ElementRef::Named(e) => e.id(),
            ElementRef::Id(id) => id,
        }
    }
}

/// Response for a completed export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub sequence_number: u32,
    pub source_id: u32,
    /// Flowsets in the packet, templates included
    pub count: usize,
    /// Datagram size
    pub bytes: usize,
}

impl TemplateRequest {
    fn to_template(&self) -> flowexport_engine::Result<Template> {
        let fields = self
            .fields
            .iter()
            .map(|f| FieldSpec::new(f.element, f.size))
            .collect::<flowexport_engine::Result<Vec<_>>>()?;
        Ok(Template::with_fields(self.id, fields))
    }
}

impl GroupRequest {
    /// Build the engine group, validating every row.
    pub fn to_group(&self) -> flowexport_engine::Result<RecordGroup> {
        let template = Arc::new(self.template.to_template()?);
        let mut group = RecordGroup::new(Arc::clone(&template));
        for row in &self.records {
            group.add_record(row_values(row, &template)?)?;
        }
        Ok(group)
    }
}

fn row_values(
    row: &[serde_json::Value],
    template: &Template,
) -> flowexport_engine::Result<Vec<FieldValue>> {
    if row.len() != template.field_count() {
        return Err(Error::Arity {
            expected: template.field_count(),
            actual: row.len(),
        });
    }
    row.iter()
        .zip(template.fields())
        .map(|(value, field)| FieldValue::from_json(value, field))
        .collect()
}

/// Current unix time in seconds, saturating at `u32::MAX`.
fn now_secs() -> u32 {
    u32::try_from(chrono::Utc::now().timestamp().max(0)).unwrap_or(u32::MAX)
}

/// Process an export request.
pub async fn handle_export(exporter: &Exporter, request: ExportRequest) -> Result<ExportResponse> {
    if request.groups.is_empty() {
        return Err(AppError::BadRequest("no groups to export".to_string()));
    }

    let groups = request
        .groups
        .iter()
        .map(GroupRequest::to_group)
        .collect::<flowexport_engine::Result<Vec<_>>>()?;

    let source_id = request
        .source_id
        .unwrap_or_else(|| exporter.default_source_id());
    let export_time = request.export_time.unwrap_or_else(now_secs);

    let summary = exporter.export(source_id, groups, export_time).await?;

    Ok(ExportResponse {
        sequence_number: summary.sequence_number,
        source_id: summary.source_id,
        count: summary.count,
        bytes: summary.bytes,
    })
}
