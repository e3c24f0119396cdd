use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use snpscan_core::models::{Region, Window};
use snpscan_io::VcfSource;
use snpscan_windows::{BoundaryPolicy, ScanConfig, WindowScanner};

use super::display::{write_json, write_window_counts, write_window_sites};

pub fn run_scan(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("VCF")
        .expect("A path to a VCF file is required.");

    let region_str = matches
        .get_one::<String>("REGION")
        .expect("A region is required.");
    let region: Region = region_str
        .parse()
        .with_context(|| format!("Invalid region '{}'", region_str))?;

    let show = matches
        .get_one::<String>("show")
        .map(|key| {
            key.parse::<Window>()
                .with_context(|| format!("Invalid window '{}'", key))
        })
        .transpose()?;

    let config = resolve_config(matches)?;
    let scanner = WindowScanner::from_config(&config)?;

    let source =
        VcfSource::open(vcf).with_context(|| format!("Failed to open VCF file: {}", vcf))?;
    info!(
        "Scanning {} with {} samples",
        source.path().display(),
        source.sample_names().len()
    );

    let result = scanner
        .scan(&source, &region)
        .with_context(|| format!("Failed to scan {} in {}", region, vcf))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match matches.get_flag("json") {
        true => write_json(&mut out, &result)?,
        false => write_window_counts(&mut out, &result)?,
    }

    if let Some(window) = show {
        let sites = result
            .get(&window)
            .ok_or_else(|| anyhow::anyhow!("Window {} is not one of the scanned windows", window))?;
        write_window_sites(&mut out, &window, sites, config.preview, source.sample_names())?;
    }

    out.flush()?;
    Ok(())
}

///
/// Merge the scan settings: command line flags win over the config file,
/// which wins over the defaults.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<ScanConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            info!("Loading scan config from {}", path);
            ScanConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path))?
        }
        None => ScanConfig::default(),
    };

    if let Some(size) = matches.get_one::<u32>("size") {
        config.window_size = *size;
    }
    if let Some(slide) = matches.get_one::<u32>("SLIDE") {
        config.slide = Some(*slide);
    }
    if matches.get_flag("clamp") {
        config.boundary = BoundaryPolicy::Clamp;
    }
    if matches.get_flag("parallel") {
        config.parallel = true;
    }
    if matches.get_flag("progress") {
        config.progress = true;
    }
    if let Some(preview) = matches.get_one::<usize>("preview") {
        config.preview = *preview;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::scan::cli::create_scan_cli;

    fn matches(args: &[&str]) -> ArgMatches {
        create_scan_cli().try_get_matches_from(args).unwrap()
    }

    #[rstest]
    fn test_defaults() {
        let config = resolve_config(&matches(&["snpscan", "a.vcf", "chrM:0-300", "100"])).unwrap();

        assert_eq!(config.window_size, 50);
        assert_eq!(config.slide, Some(100));
        assert_eq!(config.boundary, BoundaryPolicy::Faithful);
        assert!(!config.parallel);
    }

    #[rstest]
    fn test_flags_override_config_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("scan.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "window_size = 100\nslide = 10\nparallel = true\npreview = 1").unwrap();

        let config_path = path.to_str().unwrap();
        let config = resolve_config(&matches(&[
            "snpscan",
            "a.vcf",
            "chrM:0-300",
            "25",
            "--config",
            config_path,
            "--size",
            "75",
        ]))
        .unwrap();

        assert_eq!(config.window_size, 75);
        assert_eq!(config.slide, Some(25));
        assert!(config.parallel);
        assert_eq!(config.preview, 1);
    }

    #[rstest]
    fn test_missing_config_file() {
        let result = resolve_config(&matches(&[
            "snpscan",
            "a.vcf",
            "chrM:0-300",
            "25",
            "--config",
            "does/not/exist.toml",
        ]));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_run_scan_rejects_bad_region() {
        let result = run_scan(&matches(&["snpscan", "a.vcf", "chrM:300-0", "25"]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("Invalid region 'chrM:300-0'"));
    }

    #[rstest]
    fn test_run_scan_rejects_missing_vcf() {
        let result = run_scan(&matches(&["snpscan", "does/not/exist.vcf", "chrM:0-300", "25"]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("Failed to open VCF file"));
    }

    #[rstest]
    fn test_run_scan_small_vcf() {
        let vcf = std::env::current_dir()
            .unwrap()
            .join("../tests/data/vcf/small.vcf");
        let vcf = vcf.to_str().unwrap();

        let result = run_scan(&matches(&[
            "snpscan",
            vcf,
            "chrM:0-300",
            "100",
            "--show",
            "chrM:0-50",
        ]));
        assert!(result.is_ok());
    }

    #[rstest]
    fn test_run_scan_unknown_window() {
        let vcf = std::env::current_dir()
            .unwrap()
            .join("../tests/data/vcf/small.vcf");
        let vcf = vcf.to_str().unwrap();

        let result = run_scan(&matches(&[
            "snpscan",
            vcf,
            "chrM:0-300",
            "100",
            "--show",
            "chrM:0-60",
        ]));
        assert!(result.is_err());
    }
}
