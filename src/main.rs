mod cli;
mod convert;
mod error;
mod io;
mod validate;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::Args;
use error::WconError;
use std::path::Path;
use validate::ValidationOutcome;

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse_args();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let series = io::reader::read_pose_file(&args.pose_file)
        .with_context(|| format!("failed to read pose table {}", args.pose_file.display()))?;
    let objects = io::reader::read_objects_file(Path::new(io::reader::OBJECTS_FILE))?;

    tracing::info!(
        "read {} samples x {} body points from {}",
        series.samples(),
        series.body_points(),
        args.pose_file.display()
    );

    let perimeter = convert::outline::reconstruct_outline(&series)?;
    let doc = convert::document::assemble(
        &series,
        &perimeter,
        &objects,
        &args.pose_file.display().to_string(),
        &args.track_id,
        Utc::now(),
    );

    let out_path = io::writer::wcon_output_path(&args.pose_file);
    io::writer::write_document(&doc, &out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!("Generated WCON file: {}", out_path.display());

    match validate::validate_file(&out_path, &args.schema)? {
        ValidationOutcome::Passed => {
            tracing::info!("{} is valid WCON", out_path.display());
        }
        ValidationOutcome::Skipped => {
            tracing::warn!(
                "cannot validate {}: schema {} not found",
                out_path.display(),
                args.schema.display()
            );
        }
        // The file stays on disk; the violation is reported after the fact
        ValidationOutcome::Failed(reason) => {
            return Err(WconError::SchemaViolation(reason).into());
        }
    }

    Ok(())
}
