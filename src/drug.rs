use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::domain::DrugSource;
use crate::error::ReactomeError;

const DRUG_SERVICE_BASE: &str = "http://cpws.reactome.org/caBigR3WebApp2018/FIService/drug";

/// Drug-target interaction queries served by the Reactome FI service.
pub trait DrugClient: Send + Sync {
    fn list_drugs(&self, source: DrugSource) -> Result<Value, ReactomeError>;
    fn drug_target_interactions(
        &self,
        genes: &[String],
        source: DrugSource,
    ) -> Result<Value, ReactomeError>;
    fn interactions_for_pe_in_diagram(
        &self,
        source: DrugSource,
        pd_id: &str,
        pe_id: &str,
    ) -> Result<Value, ReactomeError>;
    fn interactions_for_diagram(
        &self,
        source: DrugSource,
        pd_id: &str,
    ) -> Result<Value, ReactomeError>;
}

#[derive(Clone)]
pub struct DrugHttpClient {
    client: Client,
}

impl DrugHttpClient {
    pub fn new() -> Result<Self, ReactomeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("reactome-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| ReactomeError::DrugHttp(err.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ReactomeError::DrugHttp(err.to_string()))?;
        Ok(Self { client })
    }

    pub fn list_drugs_url(source: DrugSource) -> String {
        format!("{DRUG_SERVICE_BASE}/listDrugs/{source}")
    }

    pub fn interactions_url(source: DrugSource) -> String {
        format!("{DRUG_SERVICE_BASE}/queryDrugTargetInteractions/{source}")
    }

    pub fn pe_in_diagram_url(source: DrugSource, pd_id: &str, pe_id: &str) -> String {
        format!("{DRUG_SERVICE_BASE}/queryInteractionsForPEInDiagram/{source}/{pd_id}/{pe_id}")
    }

    pub fn diagram_url(source: DrugSource, pd_id: &str) -> String {
        format!("{DRUG_SERVICE_BASE}/queryInteractionsForDiagram/{source}/{pd_id}")
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
            .unwrap_or_else(|_| "drug service request failed".to_string());
        Err(ReactomeError::DrugStatus { status, message })
    }

    fn get_json(&self, url: &str) -> Result<Value, ReactomeError> {
        debug!(url, "querying drug service");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ReactomeError::DrugHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        response
            .json()
            .map_err(|err| ReactomeError::DrugHttp(err.to_string()))
    }
}

impl DrugClient for DrugHttpClient {
    fn list_drugs(&self, source: DrugSource) -> Result<Value, ReactomeError> {
        self.get_json(&Self::list_drugs_url(source))
    }

    // Gene symbols travel as a newline-joined plain-text body.
    fn drug_target_interactions(
        &self,
        genes: &[String],
        source: DrugSource,
    ) -> Result<Value, ReactomeError> {
        let url = Self::interactions_url(source);
        debug!(url, genes = genes.len(), "querying drug service");
        let response = self
            .client
            .post(&url)
            .body(genes.join("\n"))
            .send()
            .map_err(|err| ReactomeError::DrugHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        response
            .json()
            .map_err(|err| ReactomeError::DrugHttp(err.to_string()))
    }

    fn interactions_for_pe_in_diagram(
        &self,
        source: DrugSource,
        pd_id: &str,
        pe_id: &str,
    ) -> Result<Value, ReactomeError> {
        self.get_json(&Self::pe_in_diagram_url(source, pd_id, pe_id))
    }

    fn interactions_for_diagram(
        &self,
        source: DrugSource,
        pd_id: &str,
    ) -> Result<Value, ReactomeError> {
        self.get_json(&Self::diagram_url(source, pd_id))
    }
}
