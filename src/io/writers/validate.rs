//! Structural validation of written COG files: reopen the output and
//! check the layout GDAL reports for it.
use std::path::Path;

use gdal::Dataset;
use tracing::warn;

use crate::error::{Error, Result};

/// Check that `path` is a structurally sound Cloud Optimized GeoTIFF: the
/// file must open cleanly and its main image must be internally tiled.
///
/// A raster that has outgrown a single tile but carries no overviews
/// degrades cloud reads without breaking them, so that case is reported
/// as a warning rather than an error.
pub fn validate_cog(path: &Path) -> Result<()> {
    let dataset = Dataset::open(path).map_err(|e| Error::InvalidCog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (width, height) = dataset.raster_size();
    let band = dataset.rasterband(1)?;
    let (block_width, block_height) = band.block_size();

    // Strips come back as full-width blocks of arbitrary height; tile
    // dimensions are always multiples of 16.
    let tiled = block_width < width || (block_width % 16 == 0 && block_height % 16 == 0);
    if !tiled {
        return Err(Error::InvalidCog {
            path: path.to_path_buf(),
            reason: format!(
                "main image is striped ({}x{} blocks), not tiled",
                block_width, block_height
            ),
        });
    }

    if band.overview_count()? == 0 && width.max(height) > block_width.max(block_height) {
        warn!(
            "{:?}: no overviews present for a {}x{} raster",
            path, width, height
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdal::DriverManager;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn junk_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-cog.tif");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"plainly not a TIFF").unwrap();
        drop(file);

        let err = validate_cog(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidCog { .. }));
    }

    #[test]
    fn missing_file_fails_validation() {
        let err = validate_cog(Path::new("/nonexistent/out.tif")).unwrap_err();
        assert!(matches!(err, Error::InvalidCog { .. }));
    }

    #[test]
    fn striped_geotiff_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("striped.tif");
        // GTiff writes strips unless TILED=YES is asked for.
        let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
        let ds = driver
            .create_with_band_type::<u8, _>(&path, 100, 100, 1)
            .unwrap();
        drop(ds);

        let err = validate_cog(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidCog { .. }));
    }
}
