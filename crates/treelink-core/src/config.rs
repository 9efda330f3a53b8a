//! Persistent node settings.
//!
//! The contract between the codec's callers and whatever stores controller
//! settings between power cycles. Storage format and integrity checking
//! belong to the storage layer; this is only the exchanged record.

use serde::{Deserialize, Serialize};

/// Settings a controller or tree unit keeps across power cycles.
///
/// # Examples
/// ```
/// use treelink_core::config::NodeConfig;
///
/// let config = NodeConfig {
///     node_id: 2,
///     group: 212,
///     stored_message: Some("north garden".to_string()),
/// };
/// assert_eq!(config.node_id, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Radio node id of this unit.
    pub node_id: u8,
    /// Radio group shared by the whole installation.
    pub group: u8,
    /// Free-form note stored alongside the radio settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::NodeConfig;

    #[test]
    fn omits_message_when_absent() {
        let config = NodeConfig {
            node_id: 1,
            group: 212,
            stored_message: None,
        };
        let value = serde_json::to_value(&config).expect("config json");
        assert!(value.get("stored_message").is_none());
        assert_eq!(value["group"], 212);
    }
}
