//! High-level, ergonomic library API: translate an HLS HDF granule into
//! per-band Cloud Optimized GeoTIFFs. Prefer this entrypoint over the
//! low-level io modules when embedding HLSCOG.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::bands::{granule_basename, resolve_band};
use crate::core::params::TranslateParams;
use crate::core::profiles::build_profile;
use crate::error::{Error, Result};
use crate::io::HdfReader;
use crate::io::georef::Georeference;
use crate::io::memory;
use crate::io::writers::cog::{self, TranslateConfig};

/// Translate every matched band of `input` into a COG under `output_dir`,
/// returning the produced paths in subdataset order.
///
/// Subdatasets whose key is not in the product's band set are skipped
/// silently; zero matches is a success with an empty result. The first
/// fatal condition (unresolvable CRS, failed validation) aborts the run
/// with files already written left in place.
pub fn translate_granule(
    input: &Path,
    output_dir: &Path,
    params: &TranslateParams,
) -> Result<Vec<PathBuf>> {
    if !input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hdf"))
    {
        return Err(Error::UnsupportedInput(input.to_path_buf()));
    }

    fs::create_dir_all(output_dir)?;

    let profile = build_profile(params.profile, params.blocksize, &params.creation_options);
    let config = TranslateConfig::default();
    let table = params.product.band_table();
    let basename = granule_basename(params.product, input);
    // Angle layers never carry usable embedded georeferencing, and debug
    // inputs may carry none at all; both go through the patcher.
    let patch = params.debug_mode || params.product.is_angle();

    let reader = HdfReader::open(input)?;
    let container_tags = reader.tags();

    let mut produced = Vec::new();
    for sds in reader.subdatasets() {
        let short_name = match resolve_band(table, &sds.key, params.debug_mode) {
            Some(name) => name,
            None => {
                debug!("Skipping subdataset with unexpected key: {}", sds.key);
                continue;
            }
        };

        let output = output_dir.join(format!("{}.{}.tif", basename, short_name));
        info!("Translating {} -> {:?}", sds.key, output);

        let src = sds.open()?;
        if patch {
            let georef = Georeference::resolve(&src, &container_tags)?;
            let synthetic = memory::synthesize(&src, &georef)?;
            cog::translate(&synthetic, &output, &profile, config)?;
        } else {
            cog::translate(&src, &output, &profile, config)?;
        }

        produced.push(output);
    }

    info!("Produced {} file(s) from {:?}", produced.len(), input);
    Ok(produced)
}
