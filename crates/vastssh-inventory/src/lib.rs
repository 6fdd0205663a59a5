//! Vast.ai instance inventory and ssh config entry rendering
//!
//! Fetches the current instance list from the `vastai` CLI and turns
//! it into the config lines that make up the interior of the managed
//! block. The block splicing itself lives in `vastssh-block`.

pub mod error;
pub mod fetch;
pub mod instance;
pub mod render;

pub use error::{Error, Result};
pub use fetch::{fetch_instances, InstanceSource, VastaiCli};
pub use instance::{Instance, PortBinding};
pub use render::{render_config_lines, RenderOptions};
