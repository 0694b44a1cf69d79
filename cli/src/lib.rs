//! campus-paths-cli: script driver and text interface over campus-paths-core.

pub mod directions;
pub mod script;

pub use directions::{compass, describe_route, list_buildings};
pub use script::{run_script, CommandError, ScriptDriver};
