//! HTTP client for the packing service.
//!
//! The only network interaction of the application: POST a packing request as
//! JSON, decode the response array. Failures are surfaced as explicit error
//! values so the caller can report them and leave the session retryable.
//!
//! Every request gets a monotonically increasing id. The session uses the id
//! to recognize a response that was overtaken by a newer request and drop it
//! instead of binding stale results.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ClientConfig;
use crate::wire::{ContainerPackingResult, PackingRequest};

fn user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    format!("packview/{version} ({os}; {arch})")
}

/// A decoded packing response together with the id of the request that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedResponse {
    pub request_id: u64,
    pub results: Vec<ContainerPackingResult>,
}

/// Error raised by the packing service client.
///
/// All variants are network-failure conditions from the session's point of
/// view: the request did not yield a usable response, nothing was bound, and
/// the user may retry.
#[derive(Debug)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    Setup(reqwest::Error),
    /// The request failed to complete (connect error, timeout, ...).
    Network(reqwest::Error),
    /// The service answered with a non-success status.
    Status { status: u16, body: String },
    /// The response body was not a valid packing response.
    Decode(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Setup(err) => write!(f, "Could not build HTTP client: {}", err),
            ClientError::Network(err) => write!(f, "Pack request failed: {}", err),
            ClientError::Status { status, body } => {
                write!(f, "Packing service answered with status {}: {}", status, body)
            }
            ClientError::Decode(err) => {
                write!(f, "Could not decode packing response: {}", err)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Setup(err)
            | ClientError::Network(err)
            | ClientError::Decode(err) => Some(err),
            ClientError::Status { .. } => None,
        }
    }
}

/// Client for the packing endpoint.
pub struct PackingClient {
    http: reqwest::Client,
    endpoint: String,
    sequence: AtomicU64,
}

impl PackingClient {
    /// Builds a client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(user_agent())
            .build()
            .map_err(ClientError::Setup)?;

        Ok(Self {
            http,
            endpoint: config.endpoint().to_string(),
            sequence: AtomicU64::new(0),
        })
    }

    /// Submits a packing request and decodes the response.
    ///
    /// The returned response carries the request's sequence id; compare it
    /// against `latest_request_id` (or let the session do so) before binding,
    /// since a slow response may arrive after a newer request was issued.
    pub async fn pack(&self, request: &PackingRequest) -> Result<TaggedResponse, ClientError> {
        let request_id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(_) => String::from("<unreadable body>"),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let results: Vec<ContainerPackingResult> =
            response.json().await.map_err(ClientError::Decode)?;

        Ok(TaggedResponse {
            request_id,
            results,
        })
    }

    /// Id of the most recently issued request, 0 before the first one.
    pub fn latest_request_id(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serves exactly one request with a canned response, then closes.
    fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Should bind test listener");
        let addr = listener.local_addr().expect("Listener should have an address");

        std::thread::spawn(move || {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // Drain the request (headers plus the announced body) before
            // answering, so the client never sees a reset mid-send.
            let mut received = Vec::new();
            let mut chunk = [0u8; 1024];
            let mut header_end = 0usize;
            let mut content_length = 0usize;
            loop {
                let n = match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => n,
                };
                received.extend_from_slice(&chunk[..n]);
                if header_end == 0 {
                    if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                        header_end = pos + 4;
                        let headers = String::from_utf8_lossy(&received[..header_end]);
                        for line in headers.lines() {
                            let lower = line.to_ascii_lowercase();
                            if let Some(value) = lower.strip_prefix("content-length:") {
                                content_length = value.trim().parse().unwrap_or(0);
                            }
                        }
                    }
                }
                if header_end > 0 && received.len() >= header_end + content_length {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        });

        format!("http://{}", addr)
    }

    fn empty_request() -> PackingRequest {
        PackingRequest {
            containers: Vec::new(),
            items_to_pack: Vec::new(),
            algorithm_type_ids: Vec::new(),
        }
    }

    #[test]
    fn test_client_starts_with_no_issued_requests() {
        let client = PackingClient::new(&ClientConfig::with_endpoint("http://example.test/pack"))
            .expect("Client should build");
        assert_eq!(client.latest_request_id(), 0);
        assert_eq!(client.endpoint(), "http://example.test/pack");
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(user_agent().starts_with("packview/"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported_with_body() {
        let endpoint = spawn_one_shot_server("HTTP/1.1 500 Internal Server Error", "pack failed");
        let client = PackingClient::new(&ClientConfig::with_endpoint(endpoint))
            .expect("Client should build");

        match client.pack(&empty_request()).await {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "pack failed");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        assert_eq!(client.latest_request_id(), 1);
    }

    #[tokio::test]
    async fn test_invalid_response_body_is_a_decode_error() {
        let endpoint = spawn_one_shot_server("HTTP/1.1 200 OK", "this is not a packing response");
        let client = PackingClient::new(&ClientConfig::with_endpoint(endpoint))
            .expect("Client should build");

        let err = match client.pack(&empty_request()).await {
            Err(err) => err,
            Ok(response) => panic!("Expected decode error, got {:?}", response),
        };
        assert!(matches!(err, ClientError::Decode(_)));
        // The reqwest cause stays reachable for error reporting.
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_display_and_source_wiring() {
        let err = ClientError::Status {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Packing service answered with status 503: busy"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
