use clap::{Command, arg, value_parser};

pub const SCAN_CMD: &str = "snpscan";

pub fn create_scan_cli() -> Command {
    Command::new(SCAN_CMD)
        .arg_required_else_help(true)
        .arg(arg!(<VCF> "Variant file to scan (.vcf, .vcf.gz or .vcf.bgz)"))
        .arg(arg!(<REGION> "Region to scan, formatted chrom:start-stop"))
        .arg(
            arg!(<SLIDE> "Number of bases each window moves by")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            arg!(-s --size <SIZE> "Window size in bases [default: 50]")
                .value_parser(value_parser!(u32).range(1..))
                .required(false),
        )
        .arg(arg!(-c --config <CONFIG> "TOML file with scan settings").required(false))
        .arg(arg!(--clamp "Clamp the closing window so it never starts past the region stop"))
        .arg(arg!(--parallel "Evaluate windows in parallel"))
        .arg(arg!(--progress "Show a progress bar while scanning"))
        .arg(
            arg!(--show <WINDOW> "List the variant sites of one window (chrom:start-end)")
                .required(false),
        )
        .arg(
            arg!(--preview <N> "Sample records shown per site with --show [default: 5]")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(arg!(--json "Print window counts as JSON"))
}
