use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qrsheet")]
#[command(
    about = "Generate participant QR code sheets: SVGs, PNGs, and a printable PDF grid",
    long_about = None
)]
pub struct Cli {
    /// First participant number (inclusive); defaults come from config
    pub start: Option<u32>,

    /// Last participant number (inclusive)
    pub end: Option<u32>,

    /// Config file to read (default: qrsheet.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
