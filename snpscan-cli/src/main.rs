mod scan;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "snpscan";
}

fn build_parser() -> Command {
    scan::cli::create_scan_cli()
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Count the variant sites of a VCF file in sliding windows over a genomic region.")
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let matches = build_parser().get_matches();
    scan::handlers::run_scan(&matches)
}
