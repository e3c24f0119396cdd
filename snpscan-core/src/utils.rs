use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{Result, SnpScanError};

///
/// Check whether a path points to a gzip (or bgzip) compressed file, judged
/// by its extension.
///
pub fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("gz") | Some("bgz")
    )
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// bgzip output is a series of gzip members, so the multi-member decoder is
/// used for both.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Parse a locus string of the form `chrom:start-end` into its parts.
///
/// The chromosome is split off at the last colon so contig names that
/// contain colons (e.g. `HLA-A*01:01:01:01`) survive. Thousands separators
/// in the coordinates are ignored, so `chr1:1,000-2,000` is accepted.
///
pub fn parse_locus(s: &str) -> Result<(String, u32, u32)> {
    let (chrom, coords) = s
        .trim()
        .rsplit_once(':')
        .ok_or_else(|| SnpScanError::InvalidRegion(format!("missing ':' in '{}'", s)))?;

    if chrom.is_empty() {
        return Err(SnpScanError::InvalidRegion(format!(
            "missing chromosome name in '{}'",
            s
        )));
    }

    let (start, end) = coords
        .split_once('-')
        .ok_or_else(|| SnpScanError::InvalidRegion(format!("missing '-' in '{}'", s)))?;

    Ok((
        chrom.to_string(),
        parse_coordinate(start, s)?,
        parse_coordinate(end, s)?,
    ))
}

fn parse_coordinate(value: &str, whole: &str) -> Result<u32> {
    value.replace(',', "").parse::<u32>().map_err(|_| {
        SnpScanError::InvalidRegion(format!("invalid coordinate '{}' in '{}'", value, whole))
    })
}
