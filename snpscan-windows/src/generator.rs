use std::iter::FusedIterator;

use log::warn;
use serde::{Deserialize, Serialize};

use snpscan_core::errors::{Result, SnpScanError};
use snpscan_core::models::{Region, Window};

///
/// What to do with the start of the closing window when the last slide step
/// overshoots the end of the region.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Keep the overshooting start, which can yield a window with `start > end`.
    #[default]
    Faithful,
    /// Clamp the closing window start to the region stop.
    Clamp,
}

///
/// Produces the sliding windows over a region.
///
/// Windows of `size` bases are emitted every `slide` bases for as long as
/// both the window start and end stay below the region stop. One closing
/// window that ends exactly at the stop is always emitted last, starting
/// wherever the sliding left off.
///
/// The generator is a plain value; every call to [WindowGenerator::iter]
/// starts over and yields the same windows.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowGenerator {
    region: Region,
    size: u32,
    slide: u32,
    boundary: BoundaryPolicy,
}

impl WindowGenerator {
    pub fn new(region: Region, size: u32, slide: u32) -> Result<Self> {
        if size == 0 {
            return Err(SnpScanError::InvalidWindowParameter(
                "window size must be greater than 0".to_string(),
            ));
        }
        if slide == 0 {
            return Err(SnpScanError::InvalidWindowParameter(
                "slide must be greater than 0".to_string(),
            ));
        }

        Ok(WindowGenerator {
            region,
            size,
            slide,
            boundary: BoundaryPolicy::default(),
        })
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn slide(&self) -> u32 {
        self.slide
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Total number of windows, the closing window included.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Always false: the closing window is emitted unconditionally.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Windows<'_> {
        Windows {
            generator: self,
            window_start: self.region.start,
            window_end: self.region.start.saturating_add(self.size),
            finished: false,
        }
    }
}

impl<'a> IntoIterator for &'a WindowGenerator {
    type Item = Window;
    type IntoIter = Windows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the windows of a [WindowGenerator].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    generator: &'a WindowGenerator,
    window_start: u32,
    window_end: u32,
    finished: bool,
}

impl Windows<'_> {
    #[inline]
    fn sliding(&self) -> bool {
        let stop = self.generator.region.stop;
        self.window_end < stop && self.window_start < stop
    }

    fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        if !self.sliding() {
            return 1;
        }
        // number of k >= 0 with window_end + k * slide < stop
        let gap = (self.generator.region.stop - self.window_end) as usize;
        gap.div_ceil(self.generator.slide as usize) + 1
    }
}

impl Iterator for Windows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.finished {
            return None;
        }

        let generator = self.generator;
        let chrom = &generator.region.chrom;

        if self.sliding() {
            let window = Window::new(chrom.as_str(), self.window_start, self.window_end);
            self.window_start = self.window_start.saturating_add(generator.slide);
            self.window_end = self.window_end.saturating_add(generator.slide);
            return Some(window);
        }

        self.finished = true;
        let stop = generator.region.stop;
        let start = match generator.boundary {
            BoundaryPolicy::Faithful => self.window_start,
            BoundaryPolicy::Clamp => self.window_start.min(stop),
        };
        let window = Window::new(chrom.as_str(), start, stop);
        if window.is_degenerate() {
            warn!("Closing window {} starts past the region stop", window);
        }

        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}
