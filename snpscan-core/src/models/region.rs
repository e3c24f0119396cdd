use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::{Result, SnpScanError};
use crate::utils::parse_locus;

///
/// Region struct, the genomic span `[start, stop)` a scan runs over.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chrom: String,
    pub start: u32,
    pub stop: u32,
}

impl Region {
    ///
    /// Create a new region, checking that `start < stop`.
    ///
    pub fn new(chrom: impl Into<String>, start: u32, stop: u32) -> Result<Self> {
        let chrom = chrom.into();
        if chrom.is_empty() {
            return Err(SnpScanError::InvalidRegion(
                "chromosome name is empty".to_string(),
            ));
        }
        if start >= stop {
            return Err(SnpScanError::InvalidRegion(format!(
                "start ({}) must be smaller than stop ({})",
                start, stop
            )));
        }

        Ok(Region { chrom, start, stop })
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.stop - self.start
    }

    ///
    /// Check whether a half-open interval on `chrom` shares at least one base
    /// with this region. A zero-width interval is a point, and matches when it
    /// lies in `[start, stop]`, region stop included.
    ///
    pub fn overlaps(&self, chrom: &str, start: u32, end: u32) -> bool {
        if self.chrom != chrom {
            return false;
        }
        if end <= start {
            return start >= self.start && start <= self.stop;
        }
        start < self.stop && end > self.start
    }

    ///
    /// Get the `chrom:start-stop` string of the region
    ///
    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.stop)
    }
}

impl FromStr for Region {
    type Err = SnpScanError;

    fn from_str(s: &str) -> Result<Self> {
        let (chrom, start, stop) = parse_locus(s)?;
        Region::new(chrom, start, stop)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
