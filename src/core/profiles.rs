//! Named encoder presets and the merge logic producing the final set of
//! GDAL COG creation options for one output file.
use crate::types::CogProfile;

/// Compressions for which the COG driver honors a predictor.
const PREDICTOR_COMPRESSIONS: &[&str] = &["DEFLATE", "LZW", "ZSTD", "LERC_DEFLATE", "LERC_ZSTD"];

/// Ordered creation-option map for one output file. Built once by
/// [`build_profile`], then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputProfile {
    options: Vec<(String, String)>,
}

impl OutputProfile {
    /// Insert or replace; later writers win, which gives the
    /// preset < blocksize < user-override precedence.
    fn set(&mut self, key: &str, value: &str) {
        let key = key.to_ascii_uppercase();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.options.push((key, value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_uppercase();
        self.options
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Options as `KEY=VALUE` strings, ready for the GDAL driver.
    pub fn creation_strings(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }
}

fn preset_options(profile: CogProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        CogProfile::Jpeg => &[("COMPRESS", "JPEG"), ("QUALITY", "85")],
        CogProfile::Webp => &[("COMPRESS", "WEBP"), ("QUALITY", "75")],
        CogProfile::Zstd => &[("COMPRESS", "ZSTD"), ("LEVEL", "9")],
        CogProfile::Lzw => &[("COMPRESS", "LZW")],
        CogProfile::Deflate => &[("COMPRESS", "DEFLATE"), ("LEVEL", "6")],
        CogProfile::Packbits => &[("COMPRESS", "PACKBITS")],
        CogProfile::Lzma => &[("COMPRESS", "LZMA")],
        CogProfile::Lerc => &[("COMPRESS", "LERC"), ("MAX_Z_ERROR", "0")],
        CogProfile::LercDeflate => &[("COMPRESS", "LERC_DEFLATE"), ("MAX_Z_ERROR", "0")],
        CogProfile::LercZstd => &[("COMPRESS", "LERC_ZSTD"), ("MAX_Z_ERROR", "0")],
        CogProfile::Raw => &[("COMPRESS", "NONE")],
    }
}

/// Merge a named preset with the tile size and user-supplied overrides.
/// Overrides are applied last and take precedence over everything else.
pub fn build_profile(
    profile: CogProfile,
    blocksize: usize,
    overrides: &[(String, String)],
) -> OutputProfile {
    let mut out = OutputProfile::default();

    for (key, value) in preset_options(profile) {
        out.set(key, value);
    }

    out.set("BLOCKSIZE", &blocksize.to_string());

    for (key, value) in overrides {
        out.set(key, value);
    }

    // Horizontal differencing helps the byte-level codecs; the COG driver
    // rejects it elsewhere. Decided from the merged compression so a
    // `--co COMPRESS=...` override is honored, and never set over an
    // explicit user PREDICTOR.
    if out.get("PREDICTOR").is_none()
        && out.get("COMPRESS").is_some_and(|c| {
            PREDICTOR_COMPRESSIONS
                .iter()
                .any(|p| p.eq_ignore_ascii_case(c))
        })
    {
        out.set("PREDICTOR", "YES");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deflate_profile() {
        let profile = build_profile(CogProfile::Deflate, 256, &[]);
        assert_eq!(profile.get("COMPRESS"), Some("DEFLATE"));
        assert_eq!(profile.get("BLOCKSIZE"), Some("256"));
        assert_eq!(profile.get("PREDICTOR"), Some("YES"));
    }

    #[test]
    fn lossy_profiles_carry_no_predictor() {
        let profile = build_profile(CogProfile::Jpeg, 256, &[]);
        assert_eq!(profile.get("COMPRESS"), Some("JPEG"));
        assert_eq!(profile.get("PREDICTOR"), None);
    }

    #[test]
    fn blocksize_overrides_preset() {
        let profile = build_profile(CogProfile::Lzw, 512, &[]);
        assert_eq!(profile.get("BLOCKSIZE"), Some("512"));
    }

    #[test]
    fn user_overrides_win_last() {
        let overrides = vec![
            ("COMPRESS".to_string(), "ZSTD".to_string()),
            ("blocksize".to_string(), "1024".to_string()),
        ];
        let profile = build_profile(CogProfile::Deflate, 256, &overrides);
        assert_eq!(profile.get("COMPRESS"), Some("ZSTD"));
        assert_eq!(profile.get("BLOCKSIZE"), Some("1024"));
    }

    #[test]
    fn predictor_follows_merged_compression() {
        let overrides = vec![("COMPRESS".to_string(), "JPEG".to_string())];
        let profile = build_profile(CogProfile::Deflate, 256, &overrides);
        assert_eq!(profile.get("PREDICTOR"), None);
    }

    #[test]
    fn explicit_predictor_override_wins() {
        let overrides = vec![("PREDICTOR".to_string(), "NO".to_string())];
        let profile = build_profile(CogProfile::Deflate, 256, &overrides);
        assert_eq!(profile.get("PREDICTOR"), Some("NO"));
    }

    #[test]
    fn creation_strings_are_key_value_pairs() {
        let profile = build_profile(CogProfile::Raw, 256, &[]);
        let strings = profile.creation_strings();
        assert!(strings.contains(&"COMPRESS=NONE".to_string()));
        assert!(strings.contains(&"BLOCKSIZE=256".to_string()));
    }
}
