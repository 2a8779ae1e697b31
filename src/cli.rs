use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "iccdump", version, about = "Dump ICC profile metadata to JSON")]
pub struct Cli {
    #[arg(long, help = "Wrap each tag value as {id, val} with its hex tag id")]
    pub hex_ids: bool,
    #[arg(help = "Directory containing .icc profiles")]
    pub profile_dir: PathBuf,
    #[arg(help = "Directory that receives one .json dump per profile")]
    pub output_dir: PathBuf,
}
