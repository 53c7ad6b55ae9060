use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Pose table CSV: time column followed by (x, y, angle) groups, one
    /// group per body point
    #[arg(default_value = "simdata.csv")]
    pub pose_file: PathBuf,

    /// WCON schema used to validate the written document when present
    #[arg(long, env = "WCON_EXPORT_SCHEMA", default_value = "wcon_schema.json")]
    pub schema: PathBuf,

    /// Record id for the emitted track
    #[arg(long, default_value = "wormTest")]
    pub track_id: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
