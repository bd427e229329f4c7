//! Inventory service integration (`/inventory` listing and `/kpi/{kind}` lookups).
//!
//! Both calls are best-effort: a transport failure, a non-success status or an
//! undecodable body is logged and turned into an empty result. Nothing is
//! retried.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::domain::{InventoryTable, SourceConfig};
use crate::error::AppError;
use crate::io::ingest::{self, IngestedTable};

const INVENTORY_PATH: &str = "inventory";
const KPI_PATH: &str = "kpi";

pub struct InventoryClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl InventoryClient {
    pub fn new(config: &SourceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::input(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Fetch the full inventory listing as a validated table.
    ///
    /// Returns an empty table when the service is unreachable or answers with
    /// something other than a record list.
    pub fn fetch_inventory(&self) -> InventoryTable {
        self.fetch_inventory_records().into_table()
    }

    /// Like `fetch_inventory`, but keeps the per-record validation errors.
    pub fn fetch_inventory_records(&self) -> IngestedTable {
        let body = match self.get_json(INVENTORY_PATH) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Error fetching inventory data: {e}");
                return IngestedTable::empty();
            }
        };

        match ingest::records_from_json(body) {
            Some(records) => ingest::table_from_records(records),
            None => {
                tracing::warn!("Inventory response is neither a record array nor a `content` envelope");
                IngestedTable::empty()
            }
        }
    }

    /// Fetch a named KPI resource as a JSON object.
    pub fn fetch_kpi(&self, kind: &str) -> Map<String, Value> {
        match self.get_json(&format!("{KPI_PATH}/{kind}")) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!("Unexpected {kind} KPI payload (expected an object): {other}");
                Map::new()
            }
            Err(e) => {
                tracing::error!("Error fetching {kind} KPI data: {e}");
                Map::new()
            }
        }
    }

    fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, authenticated = self.auth_token.is_some(), "GET");

        let mut req = self.client.get(&url).header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .map_err(|e| AppError::fetch(format!("request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::fetch(format!(
                "request to {url} failed with status {}",
                resp.status()
            )));
        }

        resp.json()
            .map_err(|e| AppError::fetch(format!("failed to parse response from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// Serve a single canned HTTP response on loopback and hand back the
    /// request head the client sent.
    fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            tx.send(head).unwrap();
        });

        (format!("http://{addr}/api"), rx)
    }

    fn config(api_url: String, token: Option<&str>) -> SourceConfig {
        SourceConfig {
            api_url,
            auth_token: token.map(str::to_string),
            input: None,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn fetch_inventory_unwraps_envelope_and_sends_bearer_token() {
        let body = r#"{"content":[
            {"vendor_name":"AutoParts Pro","location":"Dallas","quantity":150,"unit_price":12.99,"status":"ACTIVE"},
            {"vendor_name":"MotorCity Supplies","location":"Chicago","quantity":120,"unit_price":45.99,"status":"ACTIVE"}
        ]}"#;
        let (url, head) = serve_once("200 OK", body);
        let client = InventoryClient::new(&config(url, Some("secret-token"))).unwrap();

        let table = client.fetch_inventory();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].vendor_name, "MotorCity Supplies");

        let head = head.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(head.starts_with("GET /api/inventory "), "{head}");
        assert!(
            head.to_ascii_lowercase().contains("authorization: bearer secret-token"),
            "{head}"
        );
    }

    #[test]
    fn empty_token_sends_no_authorization_header() {
        let (url, head) = serve_once("200 OK", "[]");
        let client = InventoryClient::new(&config(url, Some(""))).unwrap();

        assert!(client.fetch_inventory().is_empty());
        let head = head.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(!head.to_ascii_lowercase().contains("authorization"), "{head}");
    }

    #[test]
    fn non_success_status_degrades_to_empty() {
        let (url, _head) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let client = InventoryClient::new(&config(url, None)).unwrap();
        assert!(client.fetch_inventory().is_empty());
    }

    #[test]
    fn unreachable_service_degrades_to_empty() {
        // Bind then drop to get a loopback port nothing is listening on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let client = InventoryClient::new(&config(format!("http://127.0.0.1:{port}/api"), None)).unwrap();

        assert!(client.fetch_inventory().is_empty());
        assert!(client.fetch_kpi("vendor").is_empty());
    }

    #[test]
    fn fetch_kpi_returns_object_payload() {
        let (url, head) = serve_once("200 OK", r#"{"totalItems":42,"lowStock":3}"#);
        let client = InventoryClient::new(&config(format!("{url}/"), None)).unwrap();

        let kpi = client.fetch_kpi("summary");
        assert_eq!(kpi.get("totalItems"), Some(&Value::from(42)));

        let head = head.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(head.starts_with("GET /api/kpi/summary "), "{head}");
    }
}
