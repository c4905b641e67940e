use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use peaking_core::io::image_io::{load_color_image, save_color_image, save_gray_png, save_mask_png};
use peaking_core::params::{EdgeColor, RequestParameters, SourceKind};
use peaking_core::pipeline::{run_pipeline, OverlayMode, PeakingConfig, PeakingOutput};
use peaking_server::ServerConfig;
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Webcam,
    File,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Webcam => SourceKind::Webcam,
            SourceArg::File => SourceKind::File,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Blend,
    Replace,
}

impl From<ModeArg> for OverlayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Blend => OverlayMode::AlphaBlend,
            ModeArg::Replace => OverlayMode::Replace,
        }
    }
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Sensitivity (1-100); higher shows more highlighted areas
    #[arg(short, long, default_value = "50", allow_negative_numbers = true)]
    pub sensitivity: i64,

    /// Highlight color (red, green, blue, yellow)
    #[arg(short, long, default_value = "red")]
    pub color: String,

    /// Source profile to tune for
    #[arg(long, value_enum, default_value = "file")]
    pub source: SourceArg,

    /// Overlay mode (defaults to the config value)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Config file (TOML); its `peaking` table is used
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for annotated images (default: next to each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write focus map, focus mask, edges and final mask PNGs here
    #[arg(long)]
    pub debug_dir: Option<PathBuf>,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => {
            ServerConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
                .peaking
        }
        None => PeakingConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.overlay.mode = mode.into();
    }

    let params = RequestParameters::new(
        args.sensitivity,
        EdgeColor::parse(&args.color),
        args.source.into(),
    );

    for dir in [&args.output_dir, &args.debug_dir].into_iter().flatten() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    crate::summary::print_apply_summary(&config, &params, args.files.len());

    let pb = if args.files.len() > 1 {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref pb) = pb {
            pb.set_message(display_name(file));
        }

        let output_path = output_path_for(file, args.output_dir.as_deref());
        let output = apply_one(file, &output_path, &params, &config)?;
        if let Some(ref dir) = args.debug_dir {
            write_debug_maps(&output, file, dir)?;
        }
        results.push((output_path, output));

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    println!();
    for (path, output) in &results {
        crate::summary::print_frame_result(path, output);
    }

    Ok(())
}

fn apply_one(
    input: &Path,
    output_path: &Path,
    params: &RequestParameters,
    config: &PeakingConfig,
) -> Result<PeakingOutput> {
    let frame = load_color_image(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    debug!(file = %input.display(), width = frame.width(), height = frame.height(), "loaded");

    let output = run_pipeline(&frame, params, config)
        .with_context(|| format!("Focus peaking failed on {}", input.display()))?;

    save_color_image(&output.frame, output_path, output.policy.encode_quality)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;
    Ok(output)
}

fn write_debug_maps(output: &PeakingOutput, input: &Path, dir: &Path) -> Result<()> {
    let stem = file_stem(input);
    save_gray_png(&output.focus_map, &dir.join(format!("{stem}_focus_map.png")))?;
    save_mask_png(&output.focus_mask, &dir.join(format!("{stem}_focus_mask.png")))?;
    save_mask_png(&output.edges, &dir.join(format!("{stem}_edges.png")))?;
    save_mask_png(&output.mask, &dir.join(format!("{stem}_mask.png")))?;
    Ok(())
}

/// `<stem>_peaking.jpg` in `output_dir`, or beside the input.
fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = format!("{}_peaking.jpg", file_stem(input));
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        assert_eq!(
            output_path_for(Path::new("/shots/moon.png"), None),
            PathBuf::from("/shots/moon_peaking.jpg")
        );
        assert_eq!(
            output_path_for(Path::new("moon.tif"), Some(Path::new("out"))),
            PathBuf::from("out/moon_peaking.jpg")
        );
    }

    #[test]
    fn apply_writes_outputs_and_debug_maps() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("board.png");
        let img = image::RgbImage::from_fn(120, 80, |x, y| {
            let v = if (x / 20 + y / 20) % 2 == 0 { 100 } else { 200 };
            image::Rgb([v, v, v])
        });
        img.save(&input).unwrap();

        let debug_dir = dir.path().join("debug");
        let args = ApplyArgs {
            files: vec![input.clone()],
            sensitivity: 90,
            color: "yellow".into(),
            source: SourceArg::File,
            mode: None,
            config: None,
            output_dir: None,
            debug_dir: Some(debug_dir.clone()),
        };
        run(&args).unwrap();

        assert!(dir.path().join("board_peaking.jpg").is_file());
        for suffix in ["focus_map", "focus_mask", "edges", "mask"] {
            assert!(debug_dir.join(format!("board_{suffix}.png")).is_file());
        }
    }
}
