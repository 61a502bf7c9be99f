use gerg_core::errors::{ErrorInfo, GergError};

use crate::network::Network;

/// Serialises a network as a JSON array of rows.
pub fn network_to_json(network: &Network) -> Result<String, GergError> {
    serde_json::to_string_pretty(network).map_err(|err| {
        GergError::Serde(
            ErrorInfo::new("network-serialize", err.to_string())
                .with_context("node_count", network.nodes()),
        )
    })
}

/// Parses a network from a JSON array of rows.
pub fn network_from_json(json: &str) -> Result<Network, GergError> {
    serde_json::from_str(json)
        .map_err(|err| GergError::Serde(ErrorInfo::new("network-parse", err.to_string())))
}
