//! Georeferencing derivation for the metadata-patching path: a CRS and
//! affine transform for subdatasets whose embedded referencing is missing
//! or only expressible as free-text tags.
use std::collections::HashMap;

use gdal::Dataset;
use gdal::spatial_ref::SpatialRef;

use crate::error::{Error, Result};

/// Ground sample distance of every HLS band, in meters. A fixed property
/// of the product line, not derived from the data.
pub const ANGLE_PIXEL_SIZE: f64 = 30.0;

/// Tag carrying the horizontal coordinate-system code, when present.
pub const HORIZONTAL_CS_CODE_TAG: &str = "HORIZONTAL_CS_CODE";
/// Fallback tag whose last whitespace-delimited token is the UTM zone.
pub const HORIZONTAL_CS_NAME_TAG: &str = "HORIZONTAL_CS_NAME";

/// CRS and geotransform to stamp onto a synthetic raster before encoding.
pub struct Georeference {
    pub crs: SpatialRef,
    pub transform: [f64; 6],
}

impl Georeference {
    /// Derive the output georeferencing for one subdataset.
    ///
    /// A subdataset that already carries a projection keeps its transform;
    /// its CRS is re-expressed as PROJ4 with an explicit WGS84 datum
    /// clause. Otherwise both are synthesized from the container's
    /// free-text tags, with the fixed 30 m pixel size.
    pub fn resolve(subdataset: &Dataset, container_tags: &HashMap<String, String>) -> Result<Self> {
        if !subdataset.projection().is_empty() {
            let proj4 = subdataset.spatial_ref()?.to_proj4()?;
            let crs = SpatialRef::from_proj4(&append_wgs84_datum(&proj4))?;
            let transform = subdataset.geo_transform()?;
            Ok(Georeference { crs, transform })
        } else {
            Ok(Georeference {
                crs: crs_from_tags(container_tags)?,
                transform: transform_from_tags(container_tags)?,
            })
        }
    }
}

/// Append an explicit WGS84 datum clause to a PROJ4 string, once.
pub fn append_wgs84_datum(proj4: &str) -> String {
    let trimmed = proj4.trim_end();
    if trimmed.contains("+datum=WGS84") {
        trimmed.to_string()
    } else {
        format!("{} +datum=WGS84", trimmed)
    }
}

/// Build a CRS from the container tags: the CS code when present, else a
/// UTM zone parsed out of the CS name.
pub fn crs_from_tags(tags: &HashMap<String, String>) -> Result<SpatialRef> {
    if let Some(code) = tags.get(HORIZONTAL_CS_CODE_TAG) {
        return crs_from_code(code);
    }
    if let Some(name) = tags.get(HORIZONTAL_CS_NAME_TAG) {
        if let Some(zone) = utm_zone_from_cs_name(name) {
            return Ok(SpatialRef::from_proj4(&utm_proj4(zone))?);
        }
    }
    Err(Error::MissingCrs)
}

fn crs_from_code(code: &str) -> Result<SpatialRef> {
    let trimmed = code.trim();
    let crs = match trimmed.parse::<u32>() {
        Ok(epsg) => SpatialRef::from_epsg(epsg)?,
        Err(_) => SpatialRef::from_definition(trimmed)?,
    };
    Ok(crs)
}

/// Last whitespace-delimited token of the CS name, as a zone number.
pub fn utm_zone_from_cs_name(name: &str) -> Option<u32> {
    name.split_whitespace().next_back()?.parse().ok()
}

fn utm_proj4(zone: u32) -> String {
    format!("+proj=utm +zone={} +datum=WGS84 +units=m +no_defs", zone)
}

/// North-up transform from the explicit upper-left tags and the fixed
/// pixel size.
pub fn transform_from_tags(tags: &HashMap<String, String>) -> Result<[f64; 6]> {
    let ulx = parse_tag(tags, "ULX")?;
    let uly = parse_tag(tags, "ULY")?;
    Ok([ulx, ANGLE_PIXEL_SIZE, 0.0, uly, 0.0, -ANGLE_PIXEL_SIZE])
}

fn parse_tag(tags: &HashMap<String, String>, tag: &'static str) -> Result<f64> {
    tags.get(tag)
        .ok_or(Error::MissingTag(tag))?
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::MissingTag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_clause_is_appended_once() {
        let patched = append_wgs84_datum("+proj=utm +zone=1 +south +units=m +no_defs");
        assert!(patched.ends_with("+datum=WGS84"));
        assert_eq!(append_wgs84_datum(&patched), patched);
    }

    #[test]
    fn zone_is_last_token_of_cs_name() {
        assert_eq!(utm_zone_from_cs_name("UTM, WGS84, UTM ZONE 5"), Some(5));
        assert_eq!(utm_zone_from_cs_name("Universal Transverse Mercator"), None);
    }

    #[test]
    fn transform_uses_fixed_pixel_size() {
        let mut tags = HashMap::new();
        tags.insert("ULX".to_string(), "199980.0".to_string());
        tags.insert("ULY".to_string(), "8300020.0".to_string());
        let gt = transform_from_tags(&tags).unwrap();
        assert_eq!(gt, [199980.0, 30.0, 0.0, 8300020.0, 0.0, -30.0]);
    }

    #[test]
    fn missing_upper_left_tag_is_an_error() {
        let mut tags = HashMap::new();
        tags.insert("ULX".to_string(), "199980.0".to_string());
        let err = transform_from_tags(&tags).unwrap_err();
        assert!(matches!(err, Error::MissingTag("ULY")));
    }
}
