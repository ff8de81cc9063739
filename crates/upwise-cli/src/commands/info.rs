use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use upwise_core::codec;
use upwise_core::media::SelectedFile;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    for path in &args.files {
        let file = SelectedFile::from_path(path)?;
        let decoded = codec::decode(&file.bytes)?;

        println!("File:        {}", file.name);
        println!("Container:   {}", codec::sniff_mime(&file.bytes));
        println!("Dimensions:  {}x{}", decoded.width, decoded.height);
        println!(
            "Size:        {:.1} KB",
            file.bytes.len() as f64 / 1024.0
        );
        println!();
    }

    Ok(())
}
