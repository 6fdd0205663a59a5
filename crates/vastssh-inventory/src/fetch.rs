//! Inventory fetch via the `vastai` CLI.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::instance::Instance;

const VASTAI_ARGS: [&str; 3] = ["show", "instances", "--raw"];

/// Source of instance records.
///
/// The one real implementation shells out to `vastai`; tests inject
/// canned record sets instead.
pub trait InstanceSource {
    fn list_instances(&self) -> Result<Vec<Instance>>;
}

/// The real `vastai show instances --raw` invocation.
#[derive(Debug, Default)]
pub struct VastaiCli;

impl InstanceSource for VastaiCli {
    fn list_instances(&self) -> Result<Vec<Instance>> {
        fetch_instances()
    }
}

/// Run `vastai show instances --raw` and deserialize its JSON output.
///
/// Any failure here aborts the run before the config file is touched,
/// so a broken fetch can never overwrite the block with empty data.
pub fn fetch_instances() -> Result<Vec<Instance>> {
    let command = format!("vastai {}", VASTAI_ARGS.join(" "));

    let output = Command::new("vastai")
        .args(VASTAI_ARGS)
        .output()
        .map_err(|e| Error::FetchFailed {
            command: command.clone(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::FetchFailed {
            command,
            message: format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| Error::FetchFailed {
        command,
        message: e.to_string(),
    })?;

    let instances: Vec<Instance> = serde_json::from_str(&stdout)?;
    debug!(count = instances.len(), "fetched instance list");
    Ok(instances)
}
