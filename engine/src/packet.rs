//! Export packets.
//!
//! Implements the 20-byte NetFlow v9 header followed by each group's
//! flowsets:
//! ```text
//! ┌─────────┬─────────┬────────────┬───────────┬────────────┬───────────┐
//! │ Version │ Count   │ SysUpTime  │ UnixSecs  │ Sequence   │ Source ID │
//! │ u16 = 9 │ u16     │ u32        │ u32       │ u32        │ u32       │
//! └─────────┴─────────┴────────────┴───────────┴────────────┴───────────┘
//! ```
//!
//! `Count` is the number of flowsets in the packet, template definitions
//! included. Collectors fed by this exporter expect that value, so it is not
//! the data-record count some v9 producers send.
//!
//! All multi-byte integers are Big Endian.

use crate::{Error, RecordGroup, Result, Writer};

/// The only wire-format version this encoder produces.
pub const VERSION: u16 = 9;

/// Header size in bytes (fixed, exactly 20).
pub const HEADER_LEN: usize = 20;

/// A packet header plus its record groups, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPacket {
    /// Per-source packet sequence number
    pub sequence_number: u32,
    /// Observation domain / exporter instance id
    pub source_id: u32,
    groups: Vec<RecordGroup>,
}

impl ExportPacket {
    /// Create an empty packet.
    pub fn new(sequence_number: u32, source_id: u32) -> Self {
        Self {
            sequence_number,
            source_id,
            groups: Vec::new(),
        }
    }

    /// Append a group. Groups are never reordered or merged.
    pub fn add_group(&mut self, group: RecordGroup) -> &mut Self {
        self.groups.push(group);
        self
    }

    /// Builder-style variant of [`ExportPacket::add_group`].
    pub fn with_group(mut self, group: RecordGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[RecordGroup] {
        &self.groups
    }

    /// Value of the header `Count` field: one per template plus one per record.
    pub fn count(&self) -> usize {
        self.groups.iter().map(RecordGroup::flowset_count).sum()
    }

    /// Total encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.groups.iter().map(RecordGroup::encoded_len).sum::<usize>()
    }

    /// Encode the packet into a fresh buffer.
    ///
    /// Both header time fields carry `export_time_secs`.
    pub fn encode(&self, export_time_secs: u32) -> Result<Vec<u8>> {
        let mut w = Writer::with_capacity(self.encoded_len());
        self.write(&mut w, export_time_secs)?;
        Ok(w.into_bytes())
    }

    /// Encode the packet onto the end of `w`.
    ///
    /// On error `w` is left exactly as it was.
    pub fn encode_into(&self, w: &mut Writer, export_time_secs: u32) -> Result<()> {
        let mut staged = Writer::with_capacity(self.encoded_len());
        self.write(&mut staged, export_time_secs)?;
        w.append_raw(staged.as_bytes());
        Ok(())
    }

    fn write(&self, w: &mut Writer, export_time_secs: u32) -> Result<()> {
        let count = self.count();
        let count = u16::try_from(count).map_err(|_| Error::LengthOverflow {
            what: "flowset count",
            length: count,
        })?;

        w.append_u16(VERSION);
        w.append_u16(count);
        w.append_u32(export_time_secs); // sysUpTime
        w.append_u32(export_time_secs); // unixSecs
        w.append_u32(self.sequence_number);
        w.append_u32(self.source_id);

        for group in &self.groups {
            group.encode(w)?;
        }
        Ok(())
    }
}
