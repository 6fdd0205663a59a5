//! One synchronization run against the ssh config file.
//!
//! A run moves the file through a small state machine: no block yet,
//! block created, block populated. Later runs re-derive the block
//! boundaries from disk and collapse to populated -> populated.

use std::path::Path;

use tracing::info;
use vastssh_block::{ensure_exists, Error as BlockError, ManagedFile, Markers};
use vastssh_inventory::{render_config_lines, InstanceSource, RenderOptions};

use crate::error::Result;

/// Synchronize the managed block at `config_path` with the instance
/// records reported by `source`.
pub fn run_sync(
    config_path: &Path,
    source: &dyn InstanceSource,
    opts: &RenderOptions,
) -> Result<()> {
    let markers = Markers::default();

    ensure_exists(config_path)?;

    let mut file = ManagedFile::load(config_path)?;
    let region = match file.locate(&markers)? {
        Some(region) => region,
        None => {
            info!(path = %config_path.display(), "no managed block found, creating one");
            file.append_empty_block(&markers)?;
            // Re-derive from disk; the block must be locatable now
            file = ManagedFile::load(config_path)?;
            file.locate(&markers)?.ok_or_else(|| BlockError::RegionInitFailed {
                path: config_path.to_path_buf(),
            })?
        }
    };

    // Fetch and render before touching the block, so a failed fetch
    // never replaces the previous interior with stale or empty data.
    let instances = source.list_instances()?;
    let new_lines = render_config_lines(&instances, opts);

    file.splice(region.interior(), new_lines)?;
    info!(path = %config_path.display(), "ssh config updated");
    Ok(())
}
