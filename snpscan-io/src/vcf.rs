//! VCF-backed variant source.
//!
//! Reads a VCF file (plain text or gzipped/bgzf) line by line and exposes
//! its data lines as [RawRecord]s with zero-based half-open coordinates:
//! `start = POS - 1`, `end = start + len(REF)`.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::{debug, info};

use snpscan_core::errors::{Result, SnpScanError};
use snpscan_core::models::variant::FIRST_SAMPLE_COLUMN;
use snpscan_core::models::{RawRecord, Region};
use snpscan_core::source::VariantSource;
use snpscan_core::utils::get_dynamic_reader;

/// VCF data lines need at least CHROM..INFO.
const MIN_VCF_FIELDS: usize = 8;

#[derive(Debug, Clone)]
pub struct VcfSource {
    path: PathBuf,
    sample_names: Vec<String>,
}

impl VcfSource {
    ///
    /// Open a VCF file and read its header.
    ///
    /// # Arguments
    /// - path: path to a `.vcf`, `.vcf.gz` or `.vcf.bgz` file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let reader = get_dynamic_reader(&path).map_err(|e| source_error(&path, e))?;

        let mut sample_names = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| source_error(&path, e))?;
            if line.starts_with("##") {
                continue;
            }
            if line.starts_with("#CHROM") {
                sample_names = line
                    .trim_end()
                    .split('\t')
                    .skip(FIRST_SAMPLE_COLUMN)
                    .map(String::from)
                    .collect();
            }
            break;
        }

        info!(
            "Opened VCF {} ({} samples)",
            path.display(),
            sample_names.len()
        );

        Ok(VcfSource { path, sample_names })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sample names from the `#CHROM` header line, in column order.
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }
}

impl VariantSource for VcfSource {
    fn fetch(&self, region: &Region) -> Result<Vec<RawRecord>> {
        let reader = get_dynamic_reader(&self.path).map_err(|e| source_error(&self.path, e))?;

        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| source_error(&self.path, e))?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let record = parse_record(line).map_err(|e| match e {
                SnpScanError::MalformedRecord(msg) => {
                    SnpScanError::MalformedRecord(format!("line {}: {}", i + 1, msg))
                }
                other => other,
            })?;

            if region.overlaps(&record.chrom, record.start, record.end) {
                records.push(record);
            }
        }

        debug!(
            "Fetched {} records in {} from {}",
            records.len(),
            region,
            self.path.display()
        );

        Ok(records)
    }
}

///
/// Parse one VCF data line into a [RawRecord].
///
/// Only the coordinate columns are interpreted here; every other column is
/// kept verbatim for the consumer.
pub fn parse_record(line: &str) -> Result<RawRecord> {
    let fields: Vec<String> = line.split('\t').map(String::from).collect();
    if fields.len() < MIN_VCF_FIELDS {
        return Err(SnpScanError::MalformedRecord(format!(
            "expected at least {} tab-separated fields, found {}",
            MIN_VCF_FIELDS,
            fields.len()
        )));
    }

    let pos = fields[1].parse::<u32>().map_err(|_| {
        SnpScanError::MalformedRecord(format!("invalid POS field '{}'", fields[1]))
    })?;

    // VCF is 1-based -> 0-based
    let start = pos.saturating_sub(1);
    let ref_len = u32::try_from(fields[3].len().max(1)).unwrap_or(u32::MAX);
    let end = start.saturating_add(ref_len);

    Ok(RawRecord::new(fields[0].clone(), start, end, fields))
}

fn source_error(path: &Path, err: std::io::Error) -> SnpScanError {
    SnpScanError::Source(format!("{}: {}", path.display(), err))
}
