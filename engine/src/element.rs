//! Information elements and template field specifications.
//!
//! Element identifiers come from the IANA IPFIX registry, which NetFlow v9
//! shares for codes below 128. Vendor-assigned codes are carried as plain
//! `u16` values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Well-known information elements used by flow exporters.
///
/// See <https://www.iana.org/assignments/ipfix/ipfix.xhtml>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u16)]
pub enum InformationElement {
    OctetDeltaCount = 1,
    PacketDeltaCount = 2,
    ProtocolIdentifier = 4,
    IpClassOfService = 5,
    TcpControlBits = 6,
    SourceTransportPort = 7,
    SourceIPv4Address = 8,
    IngressInterface = 10,
    DestinationTransportPort = 11,
    DestinationIPv4Address = 12,
    EgressInterface = 14,
    IpNextHopIPv4Address = 15,
    FlowEndSysUpTime = 21,
    FlowStartSysUpTime = 22,
    FlowDirection = 61,
    InterfaceName = 82,
    FlowStartSeconds = 150,
    FlowEndSeconds = 151,
}

impl InformationElement {
    const ALL: [InformationElement; 18] = [
        InformationElement::OctetDeltaCount,
        InformationElement::PacketDeltaCount,
        InformationElement::ProtocolIdentifier,
        InformationElement::IpClassOfService,
        InformationElement::TcpControlBits,
        InformationElement::SourceTransportPort,
        InformationElement::SourceIPv4Address,
        InformationElement::IngressInterface,
        InformationElement::DestinationTransportPort,
        InformationElement::DestinationIPv4Address,
        InformationElement::EgressInterface,
        InformationElement::IpNextHopIPv4Address,
        InformationElement::FlowEndSysUpTime,
        InformationElement::FlowStartSysUpTime,
        InformationElement::FlowDirection,
        InformationElement::InterfaceName,
        InformationElement::FlowStartSeconds,
        InformationElement::FlowEndSeconds,
    ];

    /// Numeric identifier written on the wire.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Look up a well-known element by its numeric identifier.
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.id() == id)
    }

    /// Whether values of this element are IPv4 addresses.
    pub fn is_ipv4_address(self) -> bool {
        matches!(
            self,
            InformationElement::SourceIPv4Address
                | InformationElement::DestinationIPv4Address
                | InformationElement::IpNextHopIPv4Address
        )
    }
}

impl From<InformationElement> for u16 {
    fn from(element: InformationElement) -> u16 {
        element.id()
    }
}

impl std::fmt::Display for InformationElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self, self.id())
    }
}

/// One field of a template: an element identifier and its byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Standard or vendor-assigned element identifier
    pub element_id: u16,
    /// Declared width in bytes
    pub size: u16,
}

impl FieldSpec {
    /// Create a field specification. The size must be non-zero.
    pub fn new(element: impl Into<u16>, size: u16) -> Result<Self> {
        let spec = Self::unchecked(element, size);
        spec.validate()?;
        Ok(spec)
    }

    pub(crate) fn unchecked(element: impl Into<u16>, size: u16) -> Self {
        Self {
            element_id: element.into(),
            size,
        }
    }

    /// Check the `size > 0` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroFieldSize {
                element_id: self.element_id,
            });
        }
        Ok(())
    }

    /// The well-known element this field refers to, if any.
    pub fn element(&self) -> Option<InformationElement> {
        InformationElement::from_id(self.element_id)
    }

    /// Whether this field carries an IPv4 address.
    pub fn is_ipv4_address(&self) -> bool {
        self.element().is_some_and(InformationElement::is_ipv4_address)
    }
}
