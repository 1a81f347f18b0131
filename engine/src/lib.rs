//! # Flowexport Engine
//!
//! A deterministic NetFlow v9 export packet encoder.
//!
//! This crate turns typed flow values into the exact bytes a NetFlow v9
//! collector expects: a packet header, template flowsets describing field
//! layouts, and data flowsets shaped by those templates. Everything is
//! big-endian and every flowset is 4-byte aligned.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of sockets, clocks, or platform
//! - **Deterministic**: Same inputs always produce the same bytes
//! - **Fail early**: Invalid values are rejected when a record is built,
//!   never half-way through writing a packet
//!
//! ## Core Concepts
//!
//! ### Templates
//!
//! A [`Template`] is an ordered list of [`FieldSpec`]s (element id + byte
//! width) under a caller-chosen id. Well-known element ids are named by
//! [`InformationElement`]; vendor codes are plain `u16`s.
//!
//! ### Records and Groups
//!
//! A [`Record`] is one row of [`FieldValue`]s encoded against a template. A
//! [`RecordGroup`] holds a template and its records; on the wire the template
//! definition always precedes its data.
//!
//! ### Packets
//!
//! An [`ExportPacket`] is a header plus groups. [`SequenceCounter`] hands out
//! packets with consecutive sequence numbers for one source id.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowexport_engine::{
//!     ExportPacket, FieldValue, InformationElement as IE, RecordGroup, Template,
//! };
//! use std::sync::Arc;
//!
//! // 1. Define a template
//! let template = Arc::new(
//!     Template::new(256)
//!         .with_field(IE::SourceIPv4Address, 4)
//!         .with_field(IE::SourceTransportPort, 2),
//! );
//!
//! // 2. Add records
//! let group = RecordGroup::new(template)
//!     .with_record(vec![FieldValue::ipv4("10.0.0.1").unwrap(), 443u16.into()])
//!     .unwrap();
//!
//! // 3. Encode a packet
//! let packet = ExportPacket::new(1, 0).with_group(group);
//! let bytes = packet.encode(1706745600).unwrap();
//!
//! assert_eq!(&bytes[..2], &[0, 9]);
//! assert_eq!(bytes.len(), 20 + 16 + 12);
//! ```

pub mod element;
pub mod error;
pub mod group;
pub mod packet;
pub mod record;
pub mod sequence;
pub mod template;
pub mod value;
pub mod writer;

// Re-export main types at crate root
pub use element::{FieldSpec, InformationElement};
pub use error::{Error, Result};
pub use group::RecordGroup;
pub use packet::{ExportPacket, HEADER_LEN, VERSION};
pub use record::Record;
pub use sequence::SequenceCounter;
pub use template::Template;
pub use value::FieldValue;
pub use writer::Writer;
