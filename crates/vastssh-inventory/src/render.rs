//! Rendering instance records into ssh config entry lines.

use tracing::{info, warn};

use crate::instance::Instance;

/// Options controlling the rendered entries.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// User name for the wildcard `Host` entry.
    pub ssh_user: String,
    /// Prefix for generated host aliases, e.g. `vast` yields `vast42`.
    pub host_prefix: String,
    /// Identity file for the wildcard `Host` entry.
    pub key_path: String,
}

/// Render the interior lines of the managed block.
///
/// Always emits a wildcard `Host <prefix>*` header carrying the shared
/// user and identity file, then one entry per usable instance. An
/// instance is usable when it is running and its ssh port resolves to
/// exactly one distinct binding; anything else is skipped with a log
/// line rather than rendered with a hole in it.
pub fn render_config_lines(instances: &[Instance], opts: &RenderOptions) -> Vec<String> {
    let mut lines = vec![
        format!("Host {}*", opts.host_prefix),
        format!("\tuser {}", opts.ssh_user),
        format!("\tidentityfile {}", opts.key_path),
    ];

    for instance in instances {
        if !instance.is_running() {
            info!(
                id = instance.id,
                status = %instance.actual_status,
                "instance is not running, leaving it out of the ssh config"
            );
            continue;
        }

        let Some(port) = instance.ssh_port() else {
            warn!(
                id = instance.id,
                "failed to resolve a unique ssh port, skipping instance"
            );
            continue;
        };

        let host_name = format!("{}{}", opts.host_prefix, instance.id);
        lines.push(String::new());
        lines.push(format!("Host {host_name}"));
        lines.push(format!("\thostname {}", instance.public_ipaddr));
        lines.push(format!("\tport {port}"));

        info!(id = instance.id, "found instance, use `ssh {host_name}` to connect");
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn opts() -> RenderOptions {
        RenderOptions {
            ssh_user: "root".to_string(),
            host_prefix: "vast".to_string(),
            key_path: "/k".to_string(),
        }
    }

    fn running(id: u64, addr: &str, port: &str) -> Instance {
        serde_json::from_value(json!({
            "id": id,
            "actual_status": "running",
            "public_ipaddr": addr,
            "ports": {"22/tcp": [{"HostPort": port}]}
        }))
        .unwrap()
    }

    #[test]
    fn empty_inventory_renders_header_only() {
        let lines = render_config_lines(&[], &opts());
        assert_eq!(
            lines,
            vec!["Host vast*", "\tuser root", "\tidentityfile /k"]
        );
    }

    #[test]
    fn running_instance_renders_full_entry() {
        let lines = render_config_lines(&[running(7, "1.2.3.4", "2222")], &opts());
        assert_eq!(
            lines,
            vec![
                "Host vast*",
                "\tuser root",
                "\tidentityfile /k",
                "",
                "Host vast7",
                "\thostname 1.2.3.4",
                "\tport 2222",
            ]
        );
    }

    #[test]
    fn stopped_instance_is_skipped() {
        let stopped: Instance = serde_json::from_value(json!({
            "id": 9,
            "actual_status": "exited",
            "public_ipaddr": "5.6.7.8",
            "ports": {"22/tcp": [{"HostPort": "2222"}]}
        }))
        .unwrap();

        let lines = render_config_lines(&[stopped, running(7, "1.2.3.4", "2222")], &opts());
        assert!(!lines.iter().any(|l| l.contains("vast9")));
        assert!(lines.iter().any(|l| l == "Host vast7"));
    }

    #[test]
    fn instance_with_unresolvable_port_is_skipped() {
        let ambiguous: Instance = serde_json::from_value(json!({
            "id": 3,
            "actual_status": "running",
            "public_ipaddr": "9.9.9.9",
            "ports": {"22/tcp": [{"HostPort": "1000"}, {"HostPort": "1001"}]}
        }))
        .unwrap();

        let lines = render_config_lines(&[ambiguous], &opts());
        assert_eq!(
            lines,
            vec!["Host vast*", "\tuser root", "\tidentityfile /k"]
        );
    }

    #[test]
    fn entries_keep_inventory_order() {
        let lines = render_config_lines(
            &[running(2, "2.2.2.2", "2002"), running(1, "1.1.1.1", "2001")],
            &opts(),
        );
        let hosts: Vec<&String> = lines.iter().filter(|l| l.starts_with("Host vast")).collect();
        assert_eq!(hosts, ["Host vast*", "Host vast2", "Host vast1"]);
    }
}
