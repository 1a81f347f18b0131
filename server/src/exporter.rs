//! UDP export to a NetFlow collector.
//!
//! Each call to [`Exporter::export`] becomes exactly one datagram. Sequence
//! numbers are tracked per source id and only advance for packets that
//! encoded successfully, so a rejected request never shows up as loss on
//! the collector side.

use std::net::SocketAddr;

use dashmap::DashMap;
use flowexport_engine::{ExportPacket, RecordGroup, SequenceCounter};
use tokio::net::UdpSocket;

use crate::error::Result;

/// What was sent for one export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sequence_number: u32,
    pub source_id: u32,
    pub count: usize,
    pub bytes: usize,
}

/// Encodes packets and ships them to a single collector.
///
/// Thread-safe and can be shared across handlers via `Arc`.
#[derive(Debug)]
pub struct Exporter {
    socket: UdpSocket,
    collector: SocketAddr,
    default_source_id: u32,
    sequences: DashMap<u32, SequenceCounter>,
}

impl Exporter {
    /// Create an exporter on an already-bound socket.
    pub fn new(socket: UdpSocket, collector: SocketAddr, default_source_id: u32) -> Self {
        Self {
            socket,
            collector,
            default_source_id,
            sequences: DashMap::new(),
        }
    }

    /// Bind a UDP socket on `bind_addr` and resolve the collector address.
    pub async fn connect(
        bind_addr: &str,
        collector_addr: &str,
        default_source_id: u32,
    ) -> Result<Self> {
        let collector = tokio::net::lookup_host(collector_addr)
            .await?
            .next()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("collector address {collector_addr} did not resolve"),
                )
            })?;
        let socket = UdpSocket::bind(bind_addr).await?;

        tracing::info!(
            local = %socket.local_addr()?,
            collector = %collector,
            "UDP exporter ready"
        );

        Ok(Self::new(socket, collector, default_source_id))
    }

    pub fn default_source_id(&self) -> u32 {
        self.default_source_id
    }

    /// Encode `groups` into one packet and send it to the collector.
    pub async fn export(
        &self,
        source_id: u32,
        groups: Vec<RecordGroup>,
        export_time_secs: u32,
    ) -> Result<ExportSummary> {
        let (bytes, summary) = {
            // Entry guard is held only while the packet is stamped and encoded
            let mut counter = self
                .sequences
                .entry(source_id)
                .or_insert_with(|| SequenceCounter::new(source_id));

            let mut packet = ExportPacket::new(counter.peek(), source_id);
            for group in groups {
                packet.add_group(group);
            }
            let bytes = packet.encode(export_time_secs)?;
            counter.tick();

            let summary = ExportSummary {
                sequence_number: packet.sequence_number,
                source_id,
                count: packet.count(),
                bytes: bytes.len(),
            };
            (bytes, summary)
        };

        self.socket.send_to(&bytes, self.collector).await?;

        tracing::info!(
            sequence = summary.sequence_number,
            source_id = summary.source_id,
            count = summary.count,
            bytes = summary.bytes,
            "Exported packet"
        );

        Ok(summary)
    }
}
