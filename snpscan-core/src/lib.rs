//! # Core models for snpscan.
//!
//! This crate holds the data types shared by the rest of the workspace:
//!
//! - [`Region`](models::Region): the span a scan runs over, parsed from `chrom:start-stop`
//! - [`Window`](models::Window): one sliding window over a region, also the key of scan results
//! - [`VariantSite`](models::VariantSite) / [`VariantRecord`](models::VariantRecord): a variant
//!   locus and its per-sample genotype calls
//! - [`VariantSource`](source::VariantSource): the seam through which variant records are read
//!
//! # Example
//!
//! ```
//! use snpscan_core::models::{Region, VariantSite};
//!
//! let region: Region = "chrM:0-300".parse().unwrap();
//! assert_eq!(region.width(), 300);
//!
//! let fields: Vec<String> = ["chrM", "45", ".", "A", "G", "30", ".", ".", "GT", "0/1"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let site = VariantSite::try_from(fields).unwrap();
//! assert_eq!(site.records()[0].genotype, "0/1");
//! ```
pub mod errors;
pub mod models;
pub mod source;
pub mod utils;

pub use errors::{Result, SnpScanError};
pub use source::{VariantSource, VecSource};
