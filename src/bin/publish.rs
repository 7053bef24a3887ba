use clap::Parser;
use std::path::PathBuf;

/// generate the complete perfect-play site
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// where the generated pages land
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// where the page templates live
    #[arg(long, default_value = "templates")]
    templates: PathBuf,
}

fn main() -> anyhow::Result<()> {
    roboxo::log();
    let args = Args::parse();
    roboxo::site::book::publish(&args.out, &args.templates)
}
