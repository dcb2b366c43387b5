use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::archive;
use crate::domain::PathwayGeneMapping;
use crate::error::ReactomeError;

pub const EHLD_SUMMARY_URL: &str = "https://reactome.org/download/current/ehld/svgsummary.txt";
pub const SBGN_ARCHIVE_URL: &str =
    "https://reactome.org/download/current/homo_sapiens.sbgn.tar.gz";
pub const GMT_ARCHIVE_URL: &str =
    "https://reactome.org/download/current/ReactomePathways.gmt.zip";

pub trait DownloadClient: Send + Sync {
    fn ehld_stids(&self) -> Result<Vec<String>, ReactomeError>;
    fn sbgn_stids(&self) -> Result<Vec<String>, ReactomeError>;
    fn gene_mappings(&self) -> Result<Vec<PathwayGeneMapping>, ReactomeError>;
}

#[derive(Clone)]
pub struct DownloadHttpClient {
    client: Client,
}

impl DownloadHttpClient {
    pub fn new() -> Result<Self, ReactomeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("reactome-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))?;
        Ok(Self { client })
    }

    fn fetch_text(&self, url: &str) -> Result<String, ReactomeError> {
        debug!(url, "fetching bulk download");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "download request failed".to_string());
            return Err(ReactomeError::DownloadStatus { status, message });
        }
        response
            .text()
            .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ReactomeError> {
        debug!(url, "fetching bulk download");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "download request failed".to_string());
            return Err(ReactomeError::DownloadStatus { status, message });
        }
        let bytes = response
            .bytes()
            .map_err(|err| ReactomeError::DownloadHttp(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl DownloadClient for DownloadHttpClient {
    fn ehld_stids(&self) -> Result<Vec<String>, ReactomeError> {
        let summary = self.fetch_text(EHLD_SUMMARY_URL)?;
        Ok(ehld_stids_from_summary(&summary))
    }

    fn sbgn_stids(&self) -> Result<Vec<String>, ReactomeError> {
        let bytes = self.fetch_bytes(SBGN_ARCHIVE_URL)?;
        let ehld = self.ehld_stids()?;
        sbgn_only_stids(&bytes, &ehld)
    }

    fn gene_mappings(&self) -> Result<Vec<PathwayGeneMapping>, ReactomeError> {
        let bytes = self.fetch_bytes(GMT_ARCHIVE_URL)?;
        parse_gmt_archive(&bytes)
    }
}

/// Lines of the EHLD svg summary that name a pathway stId.
pub fn ehld_stids_from_summary(summary: &str) -> Vec<String> {
    summary
        .lines()
        .filter(|line| line.contains("R-"))
        .map(|line| line.to_string())
        .collect()
}

/// SBGN archive member names without the `.sbgn` extension, minus every
/// pathway already covered by an EHLD. Archive order is preserved.
pub fn sbgn_only_stids(tar_gz: &[u8], ehld: &[String]) -> Result<Vec<String>, ReactomeError> {
    let ehld: HashSet<&str> = ehld.iter().map(|st_id| st_id.as_str()).collect();
    let names = archive::tar_gz_member_names(tar_gz)?;
    Ok(names
        .iter()
        .map(|name| name.strip_suffix(".sbgn").unwrap_or(name).to_string())
        .filter(|st_id| !ehld.contains(st_id.as_str()))
        .collect())
}

/// Pathway-to-gene records from the first member of the GMT zip archive.
/// Fields are whitespace-trimmed; blank and truncated lines are skipped.
pub fn parse_gmt_archive(data: &[u8]) -> Result<Vec<PathwayGeneMapping>, ReactomeError> {
    let rows = archive::zip_first_member_fields(data)?;
    let mut mappings = Vec::new();
    for fields in rows {
        let fields: Vec<&str> = fields.iter().map(|field| field.trim()).collect();
        if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty() {
            if fields.iter().any(|field| !field.is_empty()) {
                warn!(line = ?fields, "skipping malformed gene mapping line");
            }
            continue;
        }
        mappings.push(PathwayGeneMapping {
            name: fields[0].to_string(),
            st_id: fields[1].to_string(),
            genes: fields[2..]
                .iter()
                .filter(|field| !field.is_empty())
                .map(|field| field.to_string())
                .collect(),
        });
    }
    Ok(mappings)
}
