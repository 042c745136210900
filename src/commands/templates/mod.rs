pub mod project;

use serde::Serialize;
use serde_json::{Map, Value};

/// Shape of the `package.json` written into every scaffold.
///
/// Serialization preserves declaration order, and the dependency map keeps
/// insertion order, so the generated manifest is a deterministic function
/// of the toggle combination.
#[derive(Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub main: &'static str,
    pub scripts: Scripts,
    pub dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,
}

#[derive(Serialize)]
pub struct Scripts {
    pub start: &'static str,
    pub dev: &'static str,
}
