use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::config::CropJob;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the job to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save an example CropJob as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = CropJob::example().to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write job to {}", path.display()))?;
        println!("Example job saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
