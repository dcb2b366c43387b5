use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::ReactomeError;

const FI_SERVICE_BASE: &str = "http://cpws.reactome.org/caBigR3WebApp2018/FIService";

pub const DEFAULT_PATHWAY_STID: &str = "R-HSA-177929";
pub const HUMAN_SPECIES_PREFIX: &str = "R-HSA-";

/// Remove the first occurrence of the species prefix from a pathway stId.
/// Identifiers that do not contain the pattern pass through unchanged.
pub fn strip_species_prefix(st_id: &str, pattern: &str) -> String {
    if !pattern.is_empty() && st_id.contains(pattern) {
        st_id.replacen(pattern, "", 1)
    } else {
        st_id.to_string()
    }
}

/// Pathway conversions served by the Reactome FI network service. The JSON
/// payloads are passed through verbatim; their schema is owned by the remote
/// service.
pub trait FiClient: Send + Sync {
    fn pathway_fi(&self, st_id: &str, pattern: &str) -> Result<Value, ReactomeError>;
    fn pathway_boolean_network(
        &self,
        st_id: &str,
        pattern: &str,
    ) -> Result<Value, ReactomeError>;
    fn pathway_factor_graph(&self, st_id: &str, pattern: &str) -> Result<Value, ReactomeError>;
}

#[derive(Clone)]
pub struct FiHttpClient {
    client: Client,
}

impl FiHttpClient {
    pub fn new() -> Result<Self, ReactomeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("reactome-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| ReactomeError::FiHttp(err.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ReactomeError::FiHttp(err.to_string()))?;
        Ok(Self { client })
    }

    pub fn fi_url(st_id: &str, pattern: &str) -> String {
        let id = strip_species_prefix(st_id, pattern);
        format!("{FI_SERVICE_BASE}/network/convertPathwayToFIs/{id}")
    }

    pub fn boolean_network_url(st_id: &str, pattern: &str) -> String {
        let id = strip_species_prefix(st_id, pattern);
        format!("{FI_SERVICE_BASE}/network/convertPathwayToBooleanNetwork/{id}")
    }

    pub fn factor_graph_url(st_id: &str, pattern: &str) -> String {
        let id = strip_species_prefix(st_id, pattern);
        format!("{FI_SERVICE_BASE}/network/convertPathwayToFactorGraph/{id}")
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ReactomeError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "FI service request failed".to_string());
        Err(ReactomeError::FiStatus { status, message })
    }

    fn get_json(&self, url: &str) -> Result<Value, ReactomeError> {
        debug!(url, "converting pathway");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ReactomeError::FiHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        response
            .json()
            .map_err(|err| ReactomeError::FiHttp(err.to_string()))
    }
}

impl FiClient for FiHttpClient {
    fn pathway_fi(&self, st_id: &str, pattern: &str) -> Result<Value, ReactomeError> {
        self.get_json(&Self::fi_url(st_id, pattern))
    }

    fn pathway_boolean_network(
        &self,
        st_id: &str,
        pattern: &str,
    ) -> Result<Value, ReactomeError> {
        self.get_json(&Self::boolean_network_url(st_id, pattern))
    }

    // The factor-graph endpoint is POST-only; the body stays empty.
    fn pathway_factor_graph(&self, st_id: &str, pattern: &str) -> Result<Value, ReactomeError> {
        let url = Self::factor_graph_url(st_id, pattern);
        debug!(url, "converting pathway");
        let response = self
            .client
            .post(&url)
            .send()
            .map_err(|err| ReactomeError::FiHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        response
            .json()
            .map_err(|err| ReactomeError::FiHttp(err.to_string()))
    }
}
