use clap::Parser;
use std::path::PathBuf;

use hlscog::{CogProfile, Product};

/// Parse one `NAME=VALUE` creation option
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got: {s}")),
    }
}

#[derive(Parser)]
#[command(name = "hlscog", version, about = "Translate an HLS HDF granule to Cloud Optimized GeoTIFFs")]
pub struct CliArgs {
    /// Input HDF granule
    pub input: PathBuf,

    /// Destination directory, created if absent
    #[arg(long)]
    pub output_dir: PathBuf,

    /// HLS product variant (selects the band-name table)
    #[arg(long, value_enum)]
    pub product: Product,

    /// CloudOptimized GeoTIFF profile (default: deflate)
    #[arg(short = 'p', long, value_enum, default_value_t = CogProfile::Deflate)]
    pub cog_profile: CogProfile,

    /// Overwrite internal tile size (default is set to 256)
    #[arg(long, default_value_t = 256)]
    pub blocksize: usize,

    /// Resolve bands by positional index and synthesize georeferencing
    /// from free-text tags (intermediate/malformed inputs)
    #[arg(long, default_value_t = false)]
    pub debug_mode: bool,

    /// Driver specific creation options, repeatable. See the documentation
    /// for the COG driver for more information
    #[arg(long = "co", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub creation_options: Vec<(String, String)>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_option_requires_key() {
        assert!(parse_key_val("COMPRESS=ZSTD").is_ok());
        assert!(parse_key_val("=ZSTD").is_err());
        assert!(parse_key_val("COMPRESS").is_err());
    }

    #[test]
    fn value_may_contain_equals() {
        let (key, value) = parse_key_val("EXTRA=A=B").unwrap();
        assert_eq!(key, "EXTRA");
        assert_eq!(value, "A=B");
    }
}
