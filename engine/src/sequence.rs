//! Packet sequence numbering.
//!
//! Collectors use the header sequence number to detect lost export packets.
//! It counts packets per source id and wraps at `u32::MAX`.

use crate::ExportPacket;
use serde::{Deserialize, Serialize};

/// Sequence counter for one exporting source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceCounter {
    /// Source id stamped into every packet
    pub source_id: u32,
    /// Sequence number the next packet will carry
    pub next: u32,
}

impl SequenceCounter {
    /// Create a counter for a source, starting at 0.
    pub fn new(source_id: u32) -> Self {
        Self { source_id, next: 0 }
    }

    /// Create a counter that resumes at a specific sequence number.
    pub fn starting_at(source_id: u32, next: u32) -> Self {
        Self { source_id, next }
    }

    /// Sequence number the next packet will carry.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Advance the counter and return the sequence number just consumed.
    pub fn tick(&mut self) -> u32 {
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        current
    }

    /// Start a new, empty packet stamped with the next sequence number.
    pub fn next_packet(&mut self) -> ExportPacket {
        let sequence = self.tick();
        ExportPacket::new(sequence, self.source_id)
    }
}
