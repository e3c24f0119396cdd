use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::{Result, SnpScanError};
use crate::utils::parse_locus;

///
/// One sliding window `[start, end)` over a scan region.
///
/// Windows are plain values and are used directly as keys of a scan result.
/// The closing window of a scan may be degenerate (`start >= end`), so no
/// ordering between `start` and `end` is enforced here.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct Window {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
}

impl Window {
    pub fn new(chrom: impl Into<String>, start: u32, end: u32) -> Self {
        Window {
            chrom: chrom.into(),
            start,
            end,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }

    ///
    /// Full containment test: the interval `[start, end)` on `chrom` lies
    /// entirely inside the window. Touching the window edges counts as
    /// inside; sticking out by a single base does not.
    ///
    #[inline]
    pub fn contains(&self, chrom: &str, start: u32, end: u32) -> bool {
        self.chrom == chrom && start >= self.start && end <= self.end
    }

    ///
    /// Get the `chrom:start-end` key string of the window
    ///
    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.end)
    }
}

impl FromStr for Window {
    type Err = SnpScanError;

    fn from_str(s: &str) -> Result<Self> {
        let (chrom, start, end) = parse_locus(s)?;
        Ok(Window::new(chrom, start, end))
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
