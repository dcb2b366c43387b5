use serde_json::{Value, json};

use reactome_fetch::error::ReactomeError;
use reactome_fetch::fi::{
    DEFAULT_PATHWAY_STID, FiClient, FiHttpClient, HUMAN_SPECIES_PREFIX, strip_species_prefix,
};

#[test]
fn prefix_is_stripped_once() {
    assert_eq!(
        strip_species_prefix("R-HSA-177929", HUMAN_SPECIES_PREFIX),
        "177929"
    );
    // Only the first occurrence goes away.
    assert_eq!(
        strip_species_prefix("R-HSA-R-HSA-1", HUMAN_SPECIES_PREFIX),
        "R-HSA-1"
    );
}

#[test]
fn prefix_free_identifier_passes_through() {
    assert_eq!(strip_species_prefix("177929", HUMAN_SPECIES_PREFIX), "177929");
    assert_eq!(
        strip_species_prefix("R-MMU-177929", HUMAN_SPECIES_PREFIX),
        "R-MMU-177929"
    );
}

#[test]
fn conversion_urls_use_the_stripped_identifier() {
    let url = FiHttpClient::fi_url(DEFAULT_PATHWAY_STID, HUMAN_SPECIES_PREFIX);
    assert!(url.ends_with("/convertPathwayToFIs/177929"));

    let url = FiHttpClient::boolean_network_url("R-HSA-109582", HUMAN_SPECIES_PREFIX);
    assert!(url.ends_with("/convertPathwayToBooleanNetwork/109582"));

    let url = FiHttpClient::factor_graph_url("68886", HUMAN_SPECIES_PREFIX);
    assert!(url.ends_with("/convertPathwayToFactorGraph/68886"));
}

struct CannedFi;

impl FiClient for CannedFi {
    fn pathway_fi(&self, st_id: &str, pattern: &str) -> Result<Value, ReactomeError> {
        Ok(json!({ "pathway": strip_species_prefix(st_id, pattern) }))
    }

    fn pathway_boolean_network(
        &self,
        _st_id: &str,
        _pattern: &str,
    ) -> Result<Value, ReactomeError> {
        Err(ReactomeError::FiStatus {
            status: 404,
            message: "no such pathway".to_string(),
        })
    }

    fn pathway_factor_graph(&self, _st_id: &str, _pattern: &str) -> Result<Value, ReactomeError> {
        Err(ReactomeError::FiHttp("connection refused".to_string()))
    }
}

#[test]
fn trait_seam_substitutes_without_network() {
    let client: &dyn FiClient = &CannedFi;

    let value = client
        .pathway_fi(DEFAULT_PATHWAY_STID, HUMAN_SPECIES_PREFIX)
        .unwrap();
    assert_eq!(value["pathway"], "177929");

    let err = client
        .pathway_boolean_network(DEFAULT_PATHWAY_STID, HUMAN_SPECIES_PREFIX)
        .unwrap_err();
    assert!(err.to_string().contains("404"));

    // Transport failures surface as an error value, never a panic.
    let err = client
        .pathway_factor_graph(DEFAULT_PATHWAY_STID, HUMAN_SPECIES_PREFIX)
        .unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}
