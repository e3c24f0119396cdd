use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;

use snpscan_core::models::{VariantSite, Window};
use snpscan_windows::WindowScanResult;

/// One `chrom:start-end, total SNPs=N` line per window, in scan order.
pub fn write_window_counts<W: Write>(out: &mut W, result: &WindowScanResult) -> io::Result<()> {
    for (window, n) in result.counts() {
        writeln!(out, "{}, total SNPs={}", window, n)?;
    }
    Ok(())
}

///
/// List the sites of a single window, each followed by at most `preview`
/// of its per-sample records.
///
pub fn write_window_sites<W: Write>(
    out: &mut W,
    window: &Window,
    sites: &[VariantSite],
    preview: usize,
    sample_names: &[String],
) -> io::Result<()> {
    writeln!(out, "{} ({} sites)", window, sites.len())?;

    for site in sites {
        writeln!(
            out,
            "{}:{} {}>{} score={}",
            site.chrom, site.pos, site.ref_allele, site.alt_allele, site.score
        )?;

        for record in site.records().iter().take(preview) {
            let name = record
                .sample_index
                .checked_sub(1)
                .and_then(|i| sample_names.get(i));
            match name {
                Some(name) => writeln!(out, "  {} {}", record, name)?,
                None => writeln!(out, "  {}", record)?,
            }
        }

        let hidden = site.num_samples().saturating_sub(preview);
        if hidden > 0 {
            writeln!(out, "  ... {} more samples", hidden)?;
        }
    }

    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, result: &WindowScanResult) -> Result<()> {
    let rows: Vec<serde_json::Value> = result
        .counts()
        .map(|(w, n)| {
            json!({
                "window": w.to_string(),
                "chrom": w.chrom,
                "start": w.start,
                "end": w.end,
                "count": n,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
