//! Blocking client for the Reactome pathway database: bulk download files
//! (EHLD/SBGN diagram listings, pathway-gene GMT mappings), FI network
//! pathway conversions, and drug-target interaction queries.
//!
//! Each service sits behind a trait seam (`DownloadClient`, `FiClient`,
//! `DrugClient`) with one HTTP implementation apiece, so callers can swap in
//! fakes for tests. Every operation is stateless and issues at most one
//! request per remote call.

mod archive;
pub mod domain;
pub mod download;
pub mod drug;
pub mod error;
pub mod fi;
