//! Instance records as reported by `vastai show instances --raw`.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

/// Port map key for the container's ssh daemon.
pub const SSH_PORT_KEY: &str = "22/tcp";

/// One rented instance from the inventory feed.
///
/// The raw feed carries many more fields; only those the renderer
/// consumes are modeled, everything else is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    pub id: u64,
    #[serde(default)]
    pub actual_status: String,
    #[serde(default)]
    pub public_ipaddr: String,
    #[serde(default)]
    pub ports: HashMap<String, Vec<PortBinding>>,
}

/// A single container-port to host-port binding.
#[derive(Debug, Clone, Deserialize)]
pub struct PortBinding {
    #[serde(rename = "HostPort")]
    pub host_port: String,
}

impl Instance {
    /// Whether the instance is up and reachable over ssh.
    pub fn is_running(&self) -> bool {
        self.actual_status == "running"
    }

    /// The externally exposed ssh port, if it resolves to exactly one
    /// distinct binding. Zero bindings or several distinct host ports
    /// yield `None`; the caller decides how loudly to complain.
    pub fn ssh_port(&self) -> Option<&str> {
        let distinct: BTreeSet<&str> = self
            .ports
            .get(SSH_PORT_KEY)
            .map(|bindings| bindings.iter().map(|b| b.host_port.as_str()).collect())
            .unwrap_or_default();

        if distinct.len() == 1 {
            distinct.into_iter().next()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance(value: serde_json::Value) -> Instance {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_from_raw_feed_shape() {
        let inst = instance(json!({
            "id": 42,
            "actual_status": "running",
            "public_ipaddr": "1.2.3.4",
            "ports": {"22/tcp": [{"HostPort": "40022", "HostIp": "0.0.0.0"}]},
            "machine_id": 999
        }));
        assert_eq!(inst.id, 42);
        assert!(inst.is_running());
        assert_eq!(inst.ssh_port(), Some("40022"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let inst = instance(json!({"id": 1}));
        assert!(!inst.is_running());
        assert_eq!(inst.ssh_port(), None);
    }

    #[test]
    fn ssh_port_none_when_key_absent() {
        let inst = instance(json!({
            "id": 1,
            "ports": {"8080/tcp": [{"HostPort": "30080"}]}
        }));
        assert_eq!(inst.ssh_port(), None);
    }

    #[test]
    fn ssh_port_none_when_bindings_empty() {
        let inst = instance(json!({"id": 1, "ports": {"22/tcp": []}}));
        assert_eq!(inst.ssh_port(), None);
    }

    #[test]
    fn ssh_port_none_when_multiple_distinct_ports() {
        let inst = instance(json!({
            "id": 1,
            "ports": {"22/tcp": [{"HostPort": "40022"}, {"HostPort": "40023"}]}
        }));
        assert_eq!(inst.ssh_port(), None);
    }

    #[test]
    fn duplicate_bindings_of_the_same_port_resolve() {
        let inst = instance(json!({
            "id": 1,
            "ports": {"22/tcp": [{"HostPort": "40022"}, {"HostPort": "40022"}]}
        }));
        assert_eq!(inst.ssh_port(), Some("40022"));
    }
}
