//! Round-trip tests against the live mock server.
//!
//! Each test boots the mock server on an ephemeral port inside a background
//! current-thread runtime, then drives the core request routine over real
//! HTTP with a reqwest-blocking transport.

use std::net::TcpListener as StdTcpListener;

use pingx_core::{
    ApiError, ApiService, Dispatcher, HttpClient, HttpMethod, RawResponse, TransportError,
};

struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl HttpClient for ReqwestClient {
    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse, TransportError> {
        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        for (k, v) in headers {
            builder = builder.header(k.as_str(), v.as_str());
        }
        if let Some(b) = body {
            builder = builder.body(b.to_vec());
        }

        let response = builder
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?
            .to_vec();

        Ok(RawResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Boot the mock server on an ephemeral port; returns its base URL.
fn start_server() -> String {
    let std_listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn get_test_endpoint_round_trip() {
    let service = ApiService::new(&start_server());
    let body = service.fetch(&ReqwestClient::new(), "/api/ai/test").unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[test]
fn post_ping_round_trip() {
    let service = ApiService::new(&start_server());
    let payload = serde_json::json!({ "content": "hello" });
    let body = service
        .post(&ReqwestClient::new(), "/api/ai/ping", &payload)
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["reply"], "hello");
}

#[test]
fn unknown_route_maps_to_http_404() {
    let service = ApiService::new(&start_server());
    let err = service
        .fetch(&ReqwestClient::new(), "/api/ai/missing")
        .unwrap_err();
    assert!(matches!(err, ApiError::Http(404)));
}

#[test]
fn empty_body_maps_to_no_data() {
    let service = ApiService::new(&start_server());
    let err = service
        .fetch(&ReqwestClient::new(), "/api/ai/empty")
        .unwrap_err();
    assert!(matches!(err, ApiError::NoData));
}

#[test]
fn binary_body_maps_to_decoding_error() {
    let service = ApiService::new(&start_server());
    let err = service
        .fetch(&ReqwestClient::new(), "/api/ai/binary")
        .unwrap_err();
    assert!(matches!(err, ApiError::Decoding(_)));
}

#[test]
fn unreachable_server_maps_to_network_error() {
    // Grab a free port, then close the listener so nothing answers on it.
    let port = {
        let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let service = ApiService::new(&format!("http://127.0.0.1:{port}"));
    let err = service
        .fetch(&ReqwestClient::new(), "/api/ai/test")
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn dispatcher_round_trip_leaves_flag_clear() {
    let base = start_server();
    let dispatcher = Dispatcher::new(ApiService::new(&base), ReqwestClient::new());

    let fetch_rx = dispatcher.spawn_fetch("/api/ai/test");
    let post_rx =
        dispatcher.spawn_post("/api/ai/ping", serde_json::json!({ "content": "hello" }));

    assert!(fetch_rx.recv().unwrap().is_ok());
    assert!(post_rx.recv().unwrap().is_ok());
    assert!(!dispatcher.busy());
}
