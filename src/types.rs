//! Shared types and enums used across HLSCOG.
//! Includes the `Product` selector and the `CogProfile` encoder presets.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// HLS product variant. Selects the band-name table and, for the angle
/// variants, the metadata-patching path.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Product {
    #[value(name = "S30")]
    S30,
    #[value(name = "L30")]
    L30,
    #[value(name = "S30_ANGLES")]
    S30Angles,
    #[value(name = "L30_ANGLES")]
    L30Angles,
}

impl Product {
    /// Angle variants carry per-pixel sun/view geometry and always go
    /// through the metadata patcher.
    pub fn is_angle(&self) -> bool {
        matches!(self, Product::S30Angles | Product::L30Angles)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Product::S30 => "S30",
            Product::L30 => "L30",
            Product::S30Angles => "S30_ANGLES",
            Product::L30Angles => "L30_ANGLES",
        };
        write!(f, "{}", s)
    }
}

/// Named COG encoder presets, mirrored onto GDAL COG driver creation options.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum CogProfile {
    #[value(name = "jpeg")]
    Jpeg,
    #[value(name = "webp")]
    Webp,
    #[value(name = "zstd")]
    Zstd,
    #[value(name = "lzw")]
    Lzw,
    #[value(name = "deflate")]
    Deflate,
    #[value(name = "packbits")]
    Packbits,
    #[value(name = "lzma")]
    Lzma,
    #[value(name = "lerc")]
    Lerc,
    #[value(name = "lerc_deflate")]
    LercDeflate,
    #[value(name = "lerc_zstd")]
    LercZstd,
    #[value(name = "raw")]
    Raw,
}

impl std::fmt::Display for CogProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CogProfile::Jpeg => "jpeg",
            CogProfile::Webp => "webp",
            CogProfile::Zstd => "zstd",
            CogProfile::Lzw => "lzw",
            CogProfile::Deflate => "deflate",
            CogProfile::Packbits => "packbits",
            CogProfile::Lzma => "lzma",
            CogProfile::Lerc => "lerc",
            CogProfile::LercDeflate => "lerc_deflate",
            CogProfile::LercZstd => "lerc_zstd",
            CogProfile::Raw => "raw",
        };
        write!(f, "{}", s)
    }
}
