//! DNS Message Builder
//!
//! Constructs TXT query messages in wire format using `hickory-proto`.

use dnslink_domain::LookupError;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a TXT query and return its message ID with the wire bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single TXT/IN question section
    /// - EDNS(0) OPT record advertising `udp_size`
    pub fn build_txt_query(domain: &str, udp_size: u16) -> Result<(u16, Vec<u8>), LookupError> {
        let name = Name::from_str(domain).map_err(|e| {
            LookupError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(Query::query(name, RecordType::TXT));

        let mut edns = Edns::new();
        edns.set_max_payload(udp_size);
        message.set_edns(edns);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, LookupError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            LookupError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_txt_query() {
        let (id, bytes) = MessageBuilder::build_txt_query("_dnslink.example.com.", 4096).unwrap();

        assert!(bytes.len() >= 12, "DNS message too short: {} bytes", bytes.len());
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        // QDCOUNT = 1, ARCOUNT = 1 (OPT)
        assert_eq!(&bytes[4..6], &[0x00, 0x01]);
        assert_eq!(&bytes[10..12], &[0x00, 0x01]);
    }

    #[test]
    fn test_invalid_domain() {
        let long_label = "a".repeat(64);
        let result = MessageBuilder::build_txt_query(&format!("{}.com.", long_label), 4096);
        assert!(matches!(result, Err(LookupError::InvalidDomainName(_))));
    }
}
