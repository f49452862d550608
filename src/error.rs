//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and GDAL errors, and provides semantic variants
//! for argument validation, georeferencing, and COG validation failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("Unsupported input (expected an .hdf granule): {0}")]
    UnsupportedInput(PathBuf),

    #[error("Missing metadata tag `{0}` in HDF container")]
    MissingTag(&'static str),

    #[error(
        "No usable CRS source (no embedded projection, HORIZONTAL_CS_CODE, or HORIZONTAL_CS_NAME)"
    )]
    MissingCrs,

    #[error("Unsupported raster data type: {0}")]
    UnsupportedDataType(String),

    #[error("Output is not a valid Cloud Optimized GeoTIFF: {path}: {reason}")]
    InvalidCog { path: PathBuf, reason: String },
}
