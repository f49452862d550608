//! Conversion driver: hands a (possibly patched) raster to GDAL's COG
//! encoder and validates the result.
use std::path::Path;

use gdal::raster::RasterCreationOptions;
use gdal::{Dataset, DriverManager};
use tracing::info;

use crate::core::profiles::OutputProfile;
use crate::error::Result;
use crate::io::writers::validate::validate_cog;

/// Runtime knobs for the encoder, passed by value into every conversion
/// call rather than read from ambient configuration.
#[derive(Debug, Clone, Copy)]
pub struct TranslateConfig {
    /// Worker threads for pixel encoding, forwarded to the driver
    pub num_threads: &'static str,
    /// Internal block size of overview levels
    pub overview_blocksize: u32,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            num_threads: "ALL_CPUS",
            overview_blocksize: 128,
        }
    }
}

/// Encode `src` as a Cloud Optimized GeoTIFF at `output`.
///
/// Overviews are always built with nearest-neighbor resampling so that
/// categorical and quality-mask bands survive without interpolation
/// artifacts. Band tags and descriptions ride along with the copy. A
/// structural validation pass runs after the file is closed; its failure
/// is fatal and the invalid file is left in place for inspection.
pub fn translate(
    src: &Dataset,
    output: &Path,
    profile: &OutputProfile,
    config: TranslateConfig,
) -> Result<()> {
    gdal::config::set_config_option(
        "GDAL_TIFF_OVR_BLOCKSIZE",
        &config.overview_blocksize.to_string(),
    )?;

    let mut option_strings = profile.creation_strings();
    option_strings.push("OVERVIEW_RESAMPLING=NEAREST".to_string());
    option_strings.push(format!("NUM_THREADS={}", config.num_threads));

    let options = RasterCreationOptions::from_iter(option_strings.iter().map(String::as_str));
    let driver = DriverManager::get_driver_by_name("COG")?;
    let written = driver.create_copy(output, src, &options)?;
    // Close (flush) before the validation pass reads the file back.
    drop(written);

    info!("Wrote {:?}", output);
    validate_cog(output)
}
