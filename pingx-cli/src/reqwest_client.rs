use pingx_core::client::{HttpClient, HttpMethod, RawResponse, TransportError};

/// A default HTTP client using `reqwest` blocking client.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
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

        let mut out_headers = Vec::new();
        for (k, v) in response.headers() {
            out_headers.push((
                k.as_str().to_string(),
                v.to_str().unwrap_or("(binary)").to_string(),
            ));
        }

        // A send() that succeeded but a body that cannot be read means the
        // response itself is malformed, not that the network went away.
        let body = response
            .bytes()
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?
            .to_vec();

        Ok(RawResponse {
            status,
            headers: out_headers,
            body,
        })
    }
}
