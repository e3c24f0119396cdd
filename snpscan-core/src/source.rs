use crate::errors::Result;
use crate::models::{RawRecord, Region};

///
/// Anything that can enumerate variant records for a region.
///
/// Implementations return the records on `region.chrom` whose span overlaps
/// `[region.start, region.stop)` (see [Region::overlaps]), in source order. Read failures must be
/// returned as errors, never swallowed.
///
pub trait VariantSource {
    fn fetch(&self, region: &Region) -> Result<Vec<RawRecord>>;
}

impl<T: VariantSource + ?Sized> VariantSource for &T {
    fn fetch(&self, region: &Region) -> Result<Vec<RawRecord>> {
        (**self).fetch(region)
    }
}

impl<T: VariantSource + ?Sized> VariantSource for Box<T> {
    fn fetch(&self, region: &Region) -> Result<Vec<RawRecord>> {
        (**self).fetch(region)
    }
}

///
/// In-memory variant source backed by a vector of records.
///
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    pub records: Vec<RawRecord>,
}

impl VecSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        VecSource { records }
    }
}

impl From<Vec<RawRecord>> for VecSource {
    fn from(records: Vec<RawRecord>) -> Self {
        VecSource::new(records)
    }
}

impl VariantSource for VecSource {
    fn fetch(&self, region: &Region) -> Result<Vec<RawRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| region.overlaps(&r.chrom, r.start, r.end))
            .cloned()
            .collect())
    }
}
