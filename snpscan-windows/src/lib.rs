//! Sliding-window variant scans over a genomic region.
//!
//! A region is cut into windows of a fixed size that advance by a fixed
//! slide, and every window collects the variant sites lying entirely inside
//! it:
//!
//! - [`WindowGenerator`] produces the windows, ending with a closing window
//!   that reaches the region stop
//! - [`WindowScanner`] reads a [`VariantSource`](snpscan_core::VariantSource)
//!   once and fills a [`WindowScanResult`], optionally in parallel
//! - [`ScanConfig`] holds the scan settings and can be read from TOML
//!
//! # Example
//!
//! ```
//! use snpscan_core::models::{RawRecord, Region};
//! use snpscan_core::VecSource;
//! use snpscan_windows::scan;
//!
//! let fields: Vec<String> = ["chrM", "45", ".", "A", "G", "30", ".", ".", "GT", "0/1"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let source = VecSource::new(vec![RawRecord::new("chrM", 44, 45, fields)]);
//! let region: Region = "chrM:0-300".parse().unwrap();
//!
//! let result = scan(&source, &region, 50, 100).unwrap();
//! assert_eq!(result.len(), 4);
//! assert_eq!(result.get_by_key("chrM:0-50").unwrap().len(), 1);
//! ```
pub mod config;
pub mod generator;
pub mod scanner;

// re-exports
pub use config::{DEFAULT_PREVIEW, DEFAULT_WINDOW_SIZE, ScanConfig, ScanConfigError};
pub use generator::{BoundaryPolicy, WindowGenerator, Windows};
pub use scanner::{WindowScanResult, WindowScanner, scan};
