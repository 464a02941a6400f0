use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::gate::check_resolution;
use cropper_core::geometry::{Size, Viewport};
use cropper_core::io::image_io::load_source;
use cropper_core::transform::DisplayTransform;

use super::{parse_size, spinner};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Primary display size used to derive the preview viewport
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    pub display: Size,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let pb = spinner("Decoding");
    let source = load_source(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()));
    pb.finish_and_clear();
    let source = source?;

    let viewport = Viewport::from_display(args.display);
    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}", source.size());

    match check_resolution(source.size()) {
        Ok(()) => println!("Resolution:  ok"),
        Err(e) => {
            println!("Resolution:  rejected ({e})");
            return Ok(());
        }
    }

    let t = DisplayTransform::compute(source.size(), viewport, None);
    println!(
        "Viewport:    {}x{} (display {})",
        viewport.max_width, viewport.max_height, args.display
    );
    println!("Scale:       {:.4}", t.scale);
    println!("Preview:     {}", t.display_size());

    Ok(())
}
