//! Reader for HDF granule containers via GDAL: subdataset enumeration and
//! free-text metadata tags.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gdal::{Dataset, Metadata};

use crate::error::{Error, Result};

/// One named raster layer inside the container. `name` is the full
/// driver-specific connection string; `key` is its final colon-delimited
/// segment, which is what the band tables are keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdatasetRef {
    pub name: String,
    pub key: String,
}

impl SubdatasetRef {
    pub fn open(&self) -> Result<Dataset> {
        Ok(Dataset::open(&self.name)?)
    }
}

/// Reader for an HDF granule container
pub struct HdfReader {
    pub dataset: Dataset,
    pub path: PathBuf,
}

impl HdfReader {
    /// Open an HDF container. The extension constraint is enforced here as
    /// well as in the CLI so library callers get the same contract.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("hdf"))
        {
            return Err(Error::UnsupportedInput(path.to_path_buf()));
        }
        let dataset = Dataset::open(path)?;
        Ok(HdfReader {
            dataset,
            path: path.to_path_buf(),
        })
    }

    /// Contained rasters, in container order. A container without
    /// subdatasets yields an empty list, not an error.
    pub fn subdatasets(&self) -> Vec<SubdatasetRef> {
        let mut refs = Vec::new();
        if let Some(entries) = self.dataset.metadata_domain("SUBDATASETS") {
            for entry in entries {
                if let Some((key, value)) = entry.split_once('=') {
                    if key.ends_with("_NAME") {
                        refs.push(SubdatasetRef {
                            name: value.to_string(),
                            key: raw_band_key(value),
                        });
                    }
                }
            }
        }
        refs
    }

    /// All free-text tags from the container's default metadata domain.
    pub fn tags(&self) -> HashMap<String, String> {
        let mut tags = HashMap::new();
        if let Some(entries) = self.dataset.metadata_domain("") {
            for entry in entries {
                if let Some((key, value)) = entry.split_once('=') {
                    tags.insert(key.to_string(), value.to_string());
                }
            }
        }
        tags
    }
}

/// Final colon-delimited segment of a subdataset connection string.
pub fn raw_band_key(subdataset_name: &str) -> String {
    subdataset_name
        .rsplit(':')
        .next()
        .unwrap_or(subdataset_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_key_is_last_colon_segment() {
        let name = "HDF4_EOS:EOS_GRID:\"HLS.S30.T01LAH.2020097T222759.v1.5.hdf\":Grid:B01";
        assert_eq!(raw_band_key(name), "B01");
    }

    #[test]
    fn band_key_of_unstructured_name_is_identity() {
        assert_eq!(raw_band_key("solar_zenith"), "solar_zenith");
    }

    #[test]
    fn non_hdf_extension_is_rejected() {
        let err = HdfReader::open("granule.tif").unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput(_)));
    }
}
