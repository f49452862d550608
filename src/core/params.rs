use serde::{Deserialize, Serialize};

use crate::types::{CogProfile, Product};

/// Translation parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateParams {
    pub product: Product,
    pub profile: CogProfile,
    /// Internal tile dimension for both X and Y
    pub blocksize: usize,
    /// Driver creation-option overrides, merged last over the preset
    pub creation_options: Vec<(String, String)>,
    /// Resolve bands by positional index and synthesize georeferencing
    /// from free-text tags
    pub debug_mode: bool,
}

impl TranslateParams {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            profile: CogProfile::Deflate,
            blocksize: 256,
            creation_options: Vec::new(),
            debug_mode: false,
        }
    }
}
