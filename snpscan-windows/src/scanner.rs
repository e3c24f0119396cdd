use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use snpscan_core::errors::{Result, SnpScanError};
use snpscan_core::models::{RawRecord, Region, VariantSite, Window};
use snpscan_core::source::VariantSource;

use crate::config::ScanConfig;
use crate::generator::{BoundaryPolicy, WindowGenerator};

///
/// Variant sites per window, in window generation order.
///
/// Re-inserting a window replaces its sites but keeps its position.
///
#[derive(Debug, Clone, Default)]
pub struct WindowScanResult {
    windows: IndexMap<Window, Vec<VariantSite>>,
}

/// Equal only when windows, sites and their ordering all match.
impl PartialEq for WindowScanResult {
    fn eq(&self, other: &Self) -> bool {
        self.windows.iter().eq(other.windows.iter())
    }
}

impl WindowScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WindowScanResult {
            windows: IndexMap::with_capacity(capacity),
        }
    }

    /// Store the sites of a window, returning the sites it replaced, if any.
    pub fn insert(&mut self, window: Window, sites: Vec<VariantSite>) -> Option<Vec<VariantSite>> {
        self.windows.insert(window, sites)
    }

    /// Number of windows in the result.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, window: &Window) -> Option<&[VariantSite]> {
        self.windows.get(window).map(Vec::as_slice)
    }

    ///
    /// Look up a window by its `chrom:start-end` key string.
    ///
    pub fn get_by_key(&self, key: &str) -> Option<&[VariantSite]> {
        let window = key.parse::<Window>().ok()?;
        self.get(&window)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Window, &[VariantSite])> {
        self.windows.iter().map(|(w, sites)| (w, sites.as_slice()))
    }

    /// Number of contained sites per window, in window order.
    pub fn counts(&self) -> impl Iterator<Item = (&Window, usize)> {
        self.windows.iter().map(|(w, sites)| (w, sites.len()))
    }

    /// Number of sites over all windows. Sites in overlapping windows are
    /// counted once per window.
    pub fn total_sites(&self) -> usize {
        self.windows.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a WindowScanResult {
    type Item = (&'a Window, &'a Vec<VariantSite>);
    type IntoIter = indexmap::map::Iter<'a, Window, Vec<VariantSite>>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}

///
/// Counts variant sites per sliding window.
///
/// The source is read once per scan; every window is then evaluated against
/// the fetched records with a full-containment test.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowScanner {
    size: u32,
    slide: u32,
    boundary: BoundaryPolicy,
    parallel: bool,
    progress: bool,
}

impl WindowScanner {
    pub fn new(size: u32, slide: u32) -> Result<Self> {
        if size == 0 || slide == 0 {
            return Err(SnpScanError::InvalidWindowParameter(format!(
                "window size and slide must be greater than 0 (size={}, slide={})",
                size, slide
            )));
        }

        Ok(WindowScanner {
            size,
            slide,
            boundary: BoundaryPolicy::default(),
            parallel: false,
            progress: false,
        })
    }

    ///
    /// Build a scanner from a [ScanConfig]. The config must carry a slide.
    ///
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let slide = config.slide.ok_or_else(|| {
            SnpScanError::InvalidWindowParameter("no slide given".to_string())
        })?;

        Ok(WindowScanner::new(config.window_size, slide)?
            .with_boundary(config.boundary)
            .with_parallel(config.parallel)
            .with_progress(config.progress))
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn slide(&self) -> u32 {
        self.slide
    }

    pub fn generator(&self, region: &Region) -> Result<WindowGenerator> {
        Ok(WindowGenerator::new(region.clone(), self.size, self.slide)?.with_boundary(self.boundary))
    }

    ///
    /// Scan a region of a variant source.
    ///
    /// Any read failure or malformed contained record aborts the scan; no
    /// partial result is returned.
    ///
    pub fn scan<S: VariantSource + ?Sized>(
        &self,
        source: &S,
        region: &Region,
    ) -> Result<WindowScanResult> {
        let generator = self.generator(region)?;
        let records = source.fetch(region)?;

        info!(
            "Scanning {} windows over {} (size={}, slide={}, boundary={:?}, {} records)",
            generator.len(),
            generator.region(),
            generator.size(),
            generator.slide(),
            generator.boundary(),
            records.len()
        );

        let pb = self.progress_bar(generator.len());
        let result = match self.parallel {
            true => scan_parallel(&generator, &records, &pb)?,
            false => scan_sequential(&generator, &records, &pb)?,
        };
        pb.finish_and_clear();

        info!(
            "Scanned {} windows, {} contained sites",
            result.len(),
            result.total_sites()
        );

        Ok(result)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Scanning windows");
        pb
    }
}

///
/// Scan `region` with windows of `size` bases moved by `slide` bases, using
/// the default (faithful, sequential) settings.
///
pub fn scan<S: VariantSource + ?Sized>(
    source: &S,
    region: &Region,
    size: u32,
    slide: u32,
) -> Result<WindowScanResult> {
    WindowScanner::new(size, slide)?.scan(source, region)
}

fn scan_sequential(
    generator: &WindowGenerator,
    records: &[RawRecord],
    pb: &ProgressBar,
) -> Result<WindowScanResult> {
    let mut result = WindowScanResult::with_capacity(generator.len());

    for window in generator {
        let sites = contained_sites(&window, records)?;
        debug!("{}: {} sites", window, sites.len());
        result.insert(window, sites);
        pb.inc(1);
    }

    Ok(result)
}

fn scan_parallel(
    generator: &WindowGenerator,
    records: &[RawRecord],
    pb: &ProgressBar,
) -> Result<WindowScanResult> {
    let windows: Vec<Window> = generator.iter().collect();

    let scanned = windows
        .into_par_iter()
        .map(|window| -> Result<(Window, Vec<VariantSite>)> {
            let sites = contained_sites(&window, records)?;
            pb.inc(1);
            Ok((window, sites))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut result = WindowScanResult::with_capacity(scanned.len());
    for (window, sites) in scanned {
        debug!("{}: {} sites", window, sites.len());
        result.insert(window, sites);
    }

    Ok(result)
}

/// Build the sites of every record lying entirely inside `window`.
fn contained_sites(window: &Window, records: &[RawRecord]) -> Result<Vec<VariantSite>> {
    records
        .iter()
        .filter(|r| window.contains(&r.chrom, r.start, r.end))
        .map(VariantSite::try_from)
        .collect()
}
