//! Static band-name tables for each HLS product and the resolution logic
//! mapping raw subdataset keys onto canonical output band names.
use std::path::Path;

use crate::types::Product;

/// Sentinel-2 derived surface reflectance bands, in subdataset order.
pub const S30_BAND_NAMES: &[&str] = &[
    "B01", "B02", "B03", "B04", "B05", "B06", "B07", "B08", "B09", "B10", "B11", "B12", "B8A",
    "Fmask",
];

/// Landsat 8/9 derived surface reflectance bands, in subdataset order.
pub const L30_BAND_NAMES: &[&str] = &[
    "B01", "B02", "B03", "B04", "B05", "B06", "B07", "B09", "B10", "B11", "Fmask",
];

/// Sun/view geometry layers, raw subdataset key to short name.
pub const ANGLE_BAND_NAMES: &[(&str, &str)] = &[
    ("solar_zenith", "SZA"),
    ("solar_azimuth", "SAA"),
    ("view_zenith", "VZA"),
    ("view_azimuth", "VAA"),
];

/// Name given to positional lookups that fall outside the table.
pub const INVALID_BAND: &str = "invalid";

/// Lookup structure for one product's expected band set. Positional tables
/// are indexed in debug mode and membership-tested otherwise; named tables
/// map raw keys to short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTable {
    Positional(&'static [&'static str]),
    Named(&'static [(&'static str, &'static str)]),
}

impl Product {
    pub fn band_table(&self) -> BandTable {
        match self {
            Product::S30 => BandTable::Positional(S30_BAND_NAMES),
            Product::L30 => BandTable::Positional(L30_BAND_NAMES),
            Product::S30Angles | Product::L30Angles => BandTable::Named(ANGLE_BAND_NAMES),
        }
    }
}

/// Resolve a raw subdataset key to the canonical output band name.
///
/// Returns `None` when the key is not part of the product's expected band
/// set and should be silently skipped. In debug mode nothing is skipped:
/// positional keys are treated as indices (out-of-bounds resolves to
/// [`INVALID_BAND`]) and anything unresolvable is captured under its raw
/// key so unlabeled bands stay inspectable.
pub fn resolve_band(table: BandTable, raw_key: &str, debug_mode: bool) -> Option<String> {
    match table {
        BandTable::Positional(names) => {
            if debug_mode {
                match raw_key.parse::<usize>() {
                    Ok(index) => Some(names.get(index).copied().unwrap_or(INVALID_BAND).to_string()),
                    Err(_) => Some(raw_key.to_string()),
                }
            } else if names.contains(&raw_key) {
                Some(raw_key.to_string())
            } else {
                None
            }
        }
        BandTable::Named(pairs) => match pairs.iter().find(|(key, _)| *key == raw_key) {
            Some((_, short)) => Some((*short).to_string()),
            None if debug_mode => Some(raw_key.to_string()),
            None => None,
        },
    }
}

/// Output basename for a granule: the input filename without its `.hdf`
/// extension, and for angle products also without the trailing
/// ANGLE-designating segment.
pub fn granule_basename(product: Product, input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if product.is_angle() {
        match stem.rsplit_once('.') {
            Some((head, _)) => head.to_string(),
            None => stem,
        }
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn named_table_maps_every_key() {
        let table = Product::S30Angles.band_table();
        for (raw, short) in ANGLE_BAND_NAMES {
            assert_eq!(resolve_band(table, raw, false), Some((*short).to_string()));
        }
    }

    #[test]
    fn named_table_miss_is_skipped_unless_debug() {
        let table = Product::L30Angles.band_table();
        assert_eq!(resolve_band(table, "cloud_shadow", false), None);
        assert_eq!(
            resolve_band(table, "cloud_shadow", true),
            Some("cloud_shadow".to_string())
        );
    }

    #[test]
    fn positional_membership_without_debug() {
        let table = Product::S30.band_table();
        assert_eq!(resolve_band(table, "B8A", false), Some("B8A".to_string()));
        assert_eq!(resolve_band(table, "QA", false), None);
    }

    #[test]
    fn positional_index_in_debug_mode() {
        let table = Product::L30.band_table();
        assert_eq!(resolve_band(table, "0", true), Some("B01".to_string()));
        assert_eq!(resolve_band(table, "10", true), Some("Fmask".to_string()));
    }

    #[test]
    fn out_of_bounds_index_resolves_to_sentinel() {
        let table = Product::L30.band_table();
        assert_eq!(
            resolve_band(table, "11", true),
            Some(INVALID_BAND.to_string())
        );
        assert_eq!(
            resolve_band(table, "9999", true),
            Some(INVALID_BAND.to_string())
        );
    }

    #[test]
    fn unparseable_debug_key_is_used_verbatim() {
        let table = Product::S30.band_table();
        assert_eq!(
            resolve_band(table, "mystery", true),
            Some("mystery".to_string())
        );
    }

    #[test]
    fn basename_keeps_version_segment() {
        let input = PathBuf::from("HLS.S30.T01LAH.2020097T222759.v1.5.hdf");
        assert_eq!(
            granule_basename(Product::S30, &input),
            "HLS.S30.T01LAH.2020097T222759.v1.5"
        );
    }

    #[test]
    fn basename_strips_angle_suffix() {
        let input = PathBuf::from("HLS.S30.T35JMG.2020192T074619.v1.5.ANGLE.hdf");
        assert_eq!(
            granule_basename(Product::S30Angles, &input),
            "HLS.S30.T35JMG.2020192T074619.v1.5"
        );
    }
}
