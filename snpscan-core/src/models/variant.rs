use std::fmt::{self, Display};

use crate::errors::{Result, SnpScanError};

/// Index of the first sample column in a VCF data line.
pub const FIRST_SAMPLE_COLUMN: usize = 9;

///
/// A record as handed out by a variant source: zero-based, half-open
/// coordinates plus the untouched tab-separated fields of the line.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RawRecord {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(chrom: impl Into<String>, start: u32, end: u32, fields: Vec<String>) -> Self {
        RawRecord {
            chrom: chrom.into(),
            start,
            end,
            fields,
        }
    }
}

///
/// One sample's genotype call at a variant site.
///
#[derive(PartialEq, Debug, Clone)]
pub struct VariantRecord {
    pub chrom: String,
    pub pos: u32,
    pub ref_allele: String,
    pub alt_allele: String,
    pub score: f64,
    pub genotype: String,
    /// 1-based, in sample column order
    pub sample_index: usize,
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sample={}:[{}:{}, {}, {}, {}, {}]",
            self.sample_index,
            self.chrom,
            self.pos,
            self.ref_allele,
            self.alt_allele,
            self.genotype,
            self.score.trunc() as i64
        )
    }
}

///
/// A variant locus shared by all samples, exploded into one [VariantRecord]
/// per sample column at construction time.
///
#[derive(PartialEq, Debug, Clone)]
pub struct VariantSite {
    pub chrom: String,
    pub pos: u32,
    pub ref_allele: String,
    pub alt_allele: String,
    pub score: f64,
    pub fields: Vec<String>,
    records: Vec<VariantRecord>,
}

impl VariantSite {
    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    pub fn num_samples(&self) -> usize {
        self.records.len()
    }
}

impl TryFrom<Vec<String>> for VariantSite {
    type Error = SnpScanError;

    ///
    /// Build a site from the raw fields of a record line.
    ///
    /// Columns are CHROM, POS, ID, REF, ALT, QUAL, FILTER, INFO, FORMAT and
    /// then one column per sample. ID is ignored. QUAL must be numeric.
    fn try_from(fields: Vec<String>) -> Result<Self> {
        if fields.len() < 6 {
            return Err(SnpScanError::MalformedRecord(format!(
                "expected at least 6 fields, found {}: {:?}",
                fields.len(),
                fields
            )));
        }

        let chrom = fields[0].clone();
        let pos = fields[1].parse::<u32>().map_err(|_| {
            SnpScanError::MalformedRecord(format!(
                "invalid position '{}' at {}",
                fields[1], chrom
            ))
        })?;
        let ref_allele = fields[3].clone();
        let alt_allele = fields[4].clone();
        let score = fields[5].parse::<f64>().map_err(|_| {
            SnpScanError::MalformedRecord(format!(
                "non-numeric score '{}' at {}:{}",
                fields[5], chrom, pos
            ))
        })?;

        let records = fields
            .iter()
            .skip(FIRST_SAMPLE_COLUMN)
            .enumerate()
            .map(|(i, sample)| VariantRecord {
                chrom: chrom.clone(),
                pos,
                ref_allele: ref_allele.clone(),
                alt_allele: alt_allele.clone(),
                score,
                genotype: sample.split(':').next().unwrap_or_default().to_string(),
                sample_index: i + 1,
            })
            .collect();

        Ok(VariantSite {
            chrom,
            pos,
            ref_allele,
            alt_allele,
            score,
            fields,
            records,
        })
    }
}

impl TryFrom<&RawRecord> for VariantSite {
    type Error = SnpScanError;

    fn try_from(record: &RawRecord) -> Result<Self> {
        VariantSite::try_from(record.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn to_fields(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[fixture]
    fn two_sample_fields() -> Vec<String> {
        to_fields(&[
            "chrM", "45", "rs1", "A", "G", "30", "PASS", ".", "GT:GQ", "0/1:30", "1/1:25",
        ])
    }

    #[rstest]
    fn test_samples_are_one_based_in_column_order(two_sample_fields: Vec<String>) {
        let site = VariantSite::try_from(two_sample_fields).unwrap();

        assert_eq!(site.num_samples(), 2);
        let records = site.records();
        assert_eq!(records[0].sample_index, 1);
        assert_eq!(records[0].genotype, "0/1");
        assert_eq!(records[1].sample_index, 2);
        assert_eq!(records[1].genotype, "1/1");
    }

    #[rstest]
    fn test_site_metadata(two_sample_fields: Vec<String>) {
        let site = VariantSite::try_from(two_sample_fields).unwrap();

        assert_eq!(site.chrom, "chrM");
        assert_eq!(site.pos, 45);
        assert_eq!(site.ref_allele, "A");
        assert_eq!(site.alt_allele, "G");
        assert_eq!(site.score, 30.0);
        assert_eq!(site.fields[FIRST_SAMPLE_COLUMN..], ["0/1:30", "1/1:25"]);
        assert!(site.records().iter().all(|r| r.score == 30.0 && r.pos == 45));
    }

    #[rstest]
    fn test_genotype_without_format_subfields() {
        let site = VariantSite::try_from(to_fields(&[
            "chrM", "45", ".", "A", "G", "30", ".", ".", "GT", "0|1",
        ]))
        .unwrap();
        assert_eq!(site.records()[0].genotype, "0|1");
    }

    #[rstest]
    fn test_sites_only_record_has_no_samples() {
        let site = VariantSite::try_from(to_fields(&[
            "chrM", "45", ".", "A", "G", "12.5", "PASS", ".",
        ]))
        .unwrap();
        assert_eq!(site.num_samples(), 0);
    }

    #[rstest]
    #[case(&["chrM", "45", ".", "A", "G", "."])]
    #[case(&["chrM", "45", ".", "A", "G", "high"])]
    #[case(&["chrM", "pos", ".", "A", "G", "30"])]
    #[case(&["chrM", "45", ".", "A", "G"])]
    fn test_malformed_records_are_rejected(#[case] fields: &[&str]) {
        let result = VariantSite::try_from(to_fields(fields));
        assert!(matches!(result, Err(SnpScanError::MalformedRecord(_))));
    }

    #[rstest]
    fn test_from_raw_record(two_sample_fields: Vec<String>) {
        let raw = RawRecord::new("chrM", 44, 45, two_sample_fields);
        let site = VariantSite::try_from(&raw).unwrap();
        assert_eq!(site.fields, raw.fields);
    }

    #[rstest]
    fn test_record_display_truncates_score() {
        let site = VariantSite::try_from(to_fields(&[
            "chrM", "45", ".", "A", "G", "30.9", ".", ".", "GT", "0/1",
        ]))
        .unwrap();
        assert_eq!(
            site.records()[0].to_string(),
            "sample=1:[chrM:45, A, G, 0/1, 30]"
        );
    }
}
