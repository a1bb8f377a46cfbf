use dnslink_domain::{decode_txt, LookupEntry, RCodeError};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::RData;
use hickory_proto::ProtoError;
use tracing::debug;

/// The parts of a TXT reply the lookup needs.
#[derive(Debug, Clone)]
pub struct TxtResponse {
    pub id: u16,
    pub rcode: u16,
    pub is_response: bool,
    pub truncated: bool,
    /// One entry per TXT answer, character-strings joined and unescaped.
    pub entries: Vec<LookupEntry>,
}

impl TxtResponse {
    /// The TXT entries, or the response code when it is non-zero.
    pub fn into_entries(self, domain: &str) -> Result<Vec<LookupEntry>, RCodeError> {
        if self.rcode != 0 {
            return Err(RCodeError::new(self.rcode, domain));
        }
        Ok(self.entries)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<TxtResponse, ProtoError> {
        let message = Message::from_vec(response_bytes)?;

        let rcode = u16::from(message.response_code());
        let truncated = message.truncated();

        let entries: Vec<LookupEntry> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some(LookupEntry::new(
                    decode_txt(txt.txt_data()),
                    record.ttl(),
                )),
                _ => None,
            })
            .collect();

        debug!(
            id = message.id(),
            rcode = rcode,
            answers = message.answers().len(),
            txt = entries.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(TxtResponse {
            id: message.id(),
            rcode,
            is_response: message.message_type() == MessageType::Response,
            truncated,
            entries,
        })
    }
}
