//! Core building blocks: band-name tables and resolution, translation
//! parameters, and output-profile presets. These are internal primitives
//! consumed by the high-level `api` module.
pub mod bands;
pub mod params;
pub mod profiles;
