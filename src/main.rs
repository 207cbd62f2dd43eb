use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "hwicon-gen",
    about = "Generate the hardware component icons used by the simulator UI"
)]
struct Args {
    /// Output directory for the rendered PNG icons.
    #[clap(short, long, value_name = "DIR", default_value = "./resources")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    hwicon_gen::icons::generate_icons(&args.output)
}
