use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use snpscan_core::VariantSource;
use snpscan_core::models::{Region, VariantSite};
use snpscan_io::VcfSource;

#[fixture]
fn path_to_small_vcf() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/vcf/small.vcf")
}

#[fixture]
fn chrm_region() -> Region {
    "chrM:0-300".parse().unwrap()
}

#[rstest]
fn test_small_vcf_header(path_to_small_vcf: PathBuf) {
    let source = VcfSource::open(&path_to_small_vcf).unwrap();
    assert_eq!(source.sample_names(), &["NA12878", "NA12891", "NA12892"]);
}

#[rstest]
fn test_small_vcf_fetch_region(path_to_small_vcf: PathBuf, chrm_region: Region) {
    let source = VcfSource::open(&path_to_small_vcf).unwrap();
    let records = source.fetch(&chrm_region).unwrap();

    let spans: Vec<(u32, u32)> = records.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(spans, vec![(44, 45), (72, 73), (147, 149), (149, 150), (262, 263)]);
}

#[rstest]
fn test_small_vcf_records_build_sites(path_to_small_vcf: PathBuf, chrm_region: Region) {
    let source = VcfSource::open(&path_to_small_vcf).unwrap();
    let records = source.fetch(&chrm_region).unwrap();

    let sites = records
        .iter()
        .map(VariantSite::try_from)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert!(sites.iter().all(|s| s.num_samples() == 3));
    assert_eq!(sites[1].score, 99.5);
    assert_eq!(sites[2].records()[2].genotype, "./.");
}

#[rstest]
fn test_gzipped_vcf_matches_plain(path_to_small_vcf: PathBuf, chrm_region: Region) {
    let content = std::fs::read(&path_to_small_vcf).unwrap();

    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = tempdir.path().join("small.vcf.gz");
    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::best());
    encoder.write_all(&content).unwrap();
    encoder.finish().unwrap();

    let plain = VcfSource::open(&path_to_small_vcf).unwrap();
    let gzipped = VcfSource::open(&gz_path).unwrap();

    assert_eq!(gzipped.sample_names(), plain.sample_names());
    assert_eq!(
        gzipped.fetch(&chrm_region).unwrap(),
        plain.fetch(&chrm_region).unwrap()
    );
}

#[rstest]
fn test_other_chromosome(path_to_small_vcf: PathBuf) {
    let source = VcfSource::open(&path_to_small_vcf).unwrap();
    let records = source.fetch(&"chr1:0-1000".parse().unwrap()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].chrom, "chr1");
}
