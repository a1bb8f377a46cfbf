#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::{oneshot, Mutex};

/// How the mock answers one name.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// TXT records, each a list of raw character-strings with a TTL.
    Txt(Vec<(Vec<Vec<u8>>, u32)>),
    /// TXT records in a reply with the TC bit set.
    Truncated(Vec<(Vec<Vec<u8>>, u32)>),
    RCode(ResponseCode),
    WrongId,
    NotAResponse,
    Garbage,
}

impl MockReply {
    /// One single-string TXT record per value.
    pub fn txt(values: &[&str], ttl: u32) -> Self {
        Self::Txt(
            values
                .iter()
                .map(|value| (vec![value.as_bytes().to_vec()], ttl))
                .collect(),
        )
    }
}

/// What the server saw in a query.
#[derive(Debug, Clone)]
pub struct ReceivedQuery {
    pub id: u16,
    pub name: String,
    pub recursion_desired: bool,
    pub max_payload: Option<u16>,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedQuery>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Serves `zone` (keyed by fully-qualified name) on an ephemeral port.
    /// Unknown names answer NXDOMAIN.
    pub async fn start(zone: HashMap<String, MockReply>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some((query, response)) = Self::build_response(&zone, &buf[..len]) {
                                log.lock().await.push(query);
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn received(&self) -> Vec<ReceivedQuery> {
        self.received.lock().await.clone()
    }

    fn build_response(
        zone: &HashMap<String, MockReply>,
        query_bytes: &[u8],
    ) -> Option<(ReceivedQuery, Vec<u8>)> {
        let query = Message::from_vec(query_bytes).ok()?;
        let question = query.queries().first()?.clone();
        let name = question.name().to_string();

        let received = ReceivedQuery {
            id: query.id(),
            name: name.clone(),
            recursion_desired: query.recursion_desired(),
            max_payload: query.extensions().as_ref().map(|edns| edns.max_payload()),
        };

        let reply = zone
            .get(&name)
            .cloned()
            .unwrap_or(MockReply::RCode(ResponseCode::NXDomain));

        let truncated = matches!(reply, MockReply::Truncated(_));

        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .set_recursion_available(true);
        response.add_query(question.clone());

        match reply {
            MockReply::Txt(records) | MockReply::Truncated(records) => {
                response.set_truncated(truncated);
                for (strings, ttl) in records {
                    let txt = TXT::from_bytes(strings.iter().map(Vec::as_slice).collect());
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        ttl,
                        RData::TXT(txt),
                    ));
                }
            }
            MockReply::RCode(rcode) => {
                response.set_response_code(rcode);
            }
            MockReply::WrongId => {
                response.set_id(query.id().wrapping_add(1));
            }
            MockReply::NotAResponse => {
                response.set_message_type(MessageType::Query);
            }
            MockReply::Garbage => {
                return Some((received, vec![0xde, 0xad, 0xbe]));
            }
        }

        Some((received, response.to_vec().ok()?))
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
