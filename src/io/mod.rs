//! I/O layer for reading HDF granule containers and writing COG outputs.
//! Provides the `hdf` container reader, `georef` derivation, the `memory`
//! synthetic-raster builder, and `writers` for COG encoding/validation.
pub mod hdf;
pub use hdf::{HdfReader, SubdatasetRef};

pub mod georef;
pub use georef::Georeference;

pub mod memory;

pub mod writers;
