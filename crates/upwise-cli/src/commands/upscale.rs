use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use upwise_core::media::{Profile, SelectedFile};
use upwise_core::pipeline::config::RunConfig;
use upwise_core::pipeline::ProgressReporter;
use upwise_core::session::SessionState;

use crate::summary::print_run_summary;

#[derive(Clone, ValueEnum)]
pub enum ProfileArg {
    GeneralPhoto,
    RealEsrgan,
    LightPhoto,
    UltraHd,
}

impl From<&ProfileArg> for Profile {
    fn from(arg: &ProfileArg) -> Profile {
        match arg {
            ProfileArg::GeneralPhoto => Profile::GeneralPhoto,
            ProfileArg::RealEsrgan => Profile::RealEsrgan,
            ProfileArg::LightPhoto => Profile::LightPhoto,
            ProfileArg::UltraHd => Profile::UltraHd,
        }
    }
}

#[derive(Args)]
pub struct UpscaleArgs {
    /// Input image files (PNG, JPEG or WEBP)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Magnification factor (1-16)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub scale: u8,

    /// Processing profile
    #[arg(long, value_enum, default_value = "general-photo")]
    pub profile: ProfileArg,

    /// Display label for the output folder (no files are written)
    #[arg(long)]
    pub output_folder: Option<String>,

    /// Load scale and profile from a TOML config file instead of the flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Indicatif-backed progress reporter: one tick per processed file.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_file(&self, _index: usize, _total: usize, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn finish_file(&self, _index: usize, _total: usize) {
        self.bar.inc(1);
    }
}

pub fn run(args: &UpscaleArgs) -> Result<()> {
    let mut session = SessionState::new();

    if let Some(ref path) = args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: RunConfig = toml::from_str(&text)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        session.set_scale(config.scale.get());
        session.set_profile(config.profile);
    } else {
        session.set_scale(args.scale);
        session.set_profile(Profile::from(&args.profile));
    }

    if let Some(ref label) = args.output_folder {
        session.set_output_folder(label.clone());
    }

    let files = args
        .files
        .iter()
        .map(|path| SelectedFile::from_path(path))
        .collect::<upwise_core::error::Result<Vec<_>>>()?;
    session.select_files(files);

    println!(
        "Upscaling {} file(s) at {} with profile {}",
        session.selected_files().len(),
        session.scale(),
        session.profile()
    );

    let bar = ProgressBar::new(session.selected_files().len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("Processing [{bar:40}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let reporter = BarReporter { bar: bar.clone() };
    session.run_upscale(&reporter)?;
    bar.finish_and_clear();

    print_run_summary(&session);
    Ok(())
}
