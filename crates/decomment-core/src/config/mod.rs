//! Configuration system for decomment.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod decomment_config;
pub mod scan_config;

pub use decomment_config::DecommentConfig;
pub use scan_config::ScanConfig;
