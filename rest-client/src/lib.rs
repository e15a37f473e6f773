//! Private REST client for Juke controller communication
//!
//! This crate provides a minimal JSON-over-HTTP client specifically designed
//! for talking to a Juke Audio controller on the local network. Every request
//! carries an HTTP Basic authorization header derived once from the
//! configured credentials.

mod error;

pub use error::RestError;

use std::time::Duration;

use base64::Engine;
use serde::de::DeserializeOwned;

/// Factory-default password documented for the controller's `Admin` account.
pub const DEFAULT_PASSWORD: &str = "Admin";

/// The controller exposes a single fixed account.
const USERNAME: &str = "Admin";

/// Login credentials for the controller's HTTP interface
///
/// The controller ships with a fixed `Admin` account; an empty password
/// selects the factory default.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    password: String,
}

impl Credentials {
    /// Create credentials with the given password
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// The effective password, falling back to the factory default when empty
    pub fn password(&self) -> &str {
        if self.password.is_empty() {
            DEFAULT_PASSWORD
        } else {
            &self.password
        }
    }

    /// Render the `authorization` header value for these credentials
    fn auth_header(&self) -> String {
        let raw = format!("{}:{}", USERNAME, self.password());
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw.as_bytes())
        )
    }
}

/// A minimal JSON HTTP client for the Juke controller
///
/// Wraps a `ureq` agent with fixed timeouts. The authorization header is
/// computed once at construction and is immutable thereafter.
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: String,
}

impl RestClient {
    /// Create a new client for the controller at `host` (e.g. `juke.local`)
    pub fn new(host: &str, credentials: &Credentials) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            base_url: format!("http://{}", host),
            auth_header: credentials.auth_header(),
        }
    }

    /// GET `path` and deserialize the JSON response body
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .agent
            .get(&url)
            .set("accept", "application/json")
            .set("authorization", &self.auth_header)
            .call()
            .map_err(map_request_error)?;

        response
            .into_json::<T>()
            .map_err(|e| RestError::Parse(e.to_string()))
    }

    /// PUT a single form-encoded `key=value` pair to `path`
    ///
    /// The HTTP success envelope is the only success signal; the response
    /// body is discarded.
    pub fn put_form(&self, path: &str, key: &str, value: &str) -> Result<(), RestError> {
        let url = format!("{}/{}", self.base_url, path);

        self.agent
            .put(&url)
            .set("accept", "application/json")
            .set("authorization", &self.auth_header)
            .send_form(&[(key, value)])
            .map_err(map_request_error)?;

        Ok(())
    }
}

fn map_request_error(error: ureq::Error) -> RestError {
    match error {
        ureq::Error::Status(code, _) => RestError::Status(code),
        ureq::Error::Transport(transport) => RestError::Network(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        message: String,
    }

    #[test]
    fn test_empty_password_uses_default() {
        let credentials = Credentials::new("");
        assert_eq!(credentials.password(), "Admin");
    }

    #[test]
    fn test_explicit_password() {
        let credentials = Credentials::new("hunter2");
        assert_eq!(credentials.password(), "hunter2");
    }

    #[test]
    fn test_auth_header_for_default_credentials() {
        // base64("Admin:Admin")
        let credentials = Credentials::default();
        assert_eq!(credentials.auth_header(), "Basic QWRtaW46QWRtaW4=");
    }

    #[test]
    fn test_get_json_deserializes_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/hello")
            .match_header("authorization", "Basic QWRtaW46QWRtaW4=")
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "hi"}"#)
            .create();

        let client = RestClient::new(&server.host_with_port(), &Credentials::default());
        let greeting: Greeting = client.get_json("hello").unwrap();

        assert_eq!(greeting.message, "hi");
        mock.assert();
    }

    #[test]
    fn test_get_json_maps_status_errors() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/missing").with_status(404).create();

        let client = RestClient::new(&server.host_with_port(), &Credentials::default());
        let result: Result<Greeting, RestError> = client.get_json("missing");

        match result.unwrap_err() {
            RestError::Status(code) => assert_eq!(code, 404),
            other => panic!("expected RestError::Status, got {:?}", other),
        }
    }

    #[test]
    fn test_get_json_maps_undecodable_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/garbled")
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create();

        let client = RestClient::new(&server.host_with_port(), &Credentials::default());
        let result: Result<Greeting, RestError> = client.get_json("garbled");

        assert!(matches!(result.unwrap_err(), RestError::Parse(_)));
    }

    #[test]
    fn test_put_form_sends_encoded_pair() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v2/zones/A1-Z1/volume")
            .match_header("authorization", "Basic QWRtaW46QWRtaW4=")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("volume=45")
            .create();

        let client = RestClient::new(&server.host_with_port(), &Credentials::default());
        client
            .put_form("api/v2/zones/A1-Z1/volume", "volume", "45")
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_put_form_surfaces_server_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("PUT", "/api/v2/zones/A1-Z1/volume")
            .with_status(500)
            .create();

        let client = RestClient::new(&server.host_with_port(), &Credentials::default());
        let result = client.put_form("api/v2/zones/A1-Z1/volume", "volume", "45");

        assert!(matches!(result.unwrap_err(), RestError::Status(500)));
    }
}
