pub mod html;
pub mod json;

use serde::Deserialize;

/// Settings for markup output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prepended to the token kind to form each span's class name.
    pub class_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: "token-".to_string(),
        }
    }
}
