#![doc = r#"
HLSCOG — an HLS HDF to Cloud Optimized GeoTIFF translator.

This crate extracts the named subdatasets of an HLS (Harmonized Landsat
Sentinel-2) HDF granule and re-encodes each as a standalone Cloud Optimized
GeoTIFF, with optional CRS correction and metadata propagation. It powers
the HLSCOG CLI and can be embedded in your own Rust applications. The heavy
lifting (HDF decoding, tiling, overview generation, compression) is
delegated to GDAL's COG driver.

Requirements
------------
- GDAL development headers and runtime (>= 3.1 for the COG driver)
  available on your system.
- Rust 2024 edition toolchain.

Add dependency
--------------
```toml
[dependencies]
hlscog = "0.1"
```

Quick start: translate a granule
--------------------------------
```rust,no_run
use std::path::Path;
use hlscog::{api::translate_granule, Product, TranslateParams};

fn main() -> hlscog::Result<()> {
    let params = TranslateParams::new(Product::S30);

    let produced = translate_granule(
        Path::new("/data/HLS.S30.T01LAH.2020097T222759.v1.5.hdf"),
        Path::new("/out"),
        &params,
    )?;

    println!("wrote {} band file(s)", produced.len());
    Ok(())
}
```

Choosing an encoder preset
--------------------------
```rust,no_run
use std::path::Path;
use hlscog::{api::translate_granule, CogProfile, Product, TranslateParams};

fn main() -> hlscog::Result<()> {
    let params = TranslateParams {
        product: Product::S30Angles,
        profile: CogProfile::Zstd,
        blocksize: 512,
        creation_options: vec![("BIGTIFF".to_string(), "IF_SAFER".to_string())],
        debug_mode: false,
    };

    translate_granule(
        Path::new("/data/HLS.S30.T35JMG.2020192T074619.v1.5.ANGLE.hdf"),
        Path::new("/out"),
        &params,
    )?;
    Ok(())
}
```

Error handling
--------------
All public functions return `hlscog::Result<T>`; match on `hlscog::Error`
to handle specific cases, e.g. missing georeferencing or a failed COG
validation.

```rust,no_run
use std::path::Path;
use hlscog::{api::translate_granule, Error, Product, TranslateParams};

fn main() {
    let params = TranslateParams::new(Product::L30);

    match translate_granule(Path::new("/bad/granule.hdf"), Path::new("/out"), &params) {
        Ok(files) => println!("{} file(s)", files.len()),
        Err(Error::MissingCrs) => eprintln!("granule carries no usable CRS source"),
        Err(Error::InvalidCog { path, reason }) => eprintln!("bad output {path:?}: {reason}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry point.
- [`types`] — enums and core types (`Product`, `CogProfile`).
- [`io`] — HDF container reader, georeferencing, and COG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::TranslateParams;
pub use error::{Error, Result};
pub use types::{CogProfile, Product};

// Band resolution
pub use crate::core::bands::{BandTable, INVALID_BAND, granule_basename, resolve_band};
pub use crate::core::profiles::{OutputProfile, build_profile};

// Readers
pub use io::georef::Georeference;
pub use io::hdf::{HdfReader, SubdatasetRef};

// Selected writer helpers
pub use io::writers::cog::{TranslateConfig, translate};
pub use io::writers::validate::validate_cog;

// High-level API re-export
pub use api::translate_granule;
