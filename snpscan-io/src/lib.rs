//! # Input utilities for snpscan.
//!
//! This small crate provides the concrete variant sources used by the command-line tool. Most
//! importantly, it contains [`VcfSource`], which reads plain or gzipped VCF text and hands out
//! region-filtered [`RawRecord`](snpscan_core::models::RawRecord)s through the
//! [`VariantSource`](snpscan_core::VariantSource) trait.
//!
pub mod vcf;

// re-expose core functions
pub use vcf::*;
