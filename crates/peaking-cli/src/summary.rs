use std::path::Path;

use console::Style;
use peaking_core::frame::mask_count;
use peaking_core::params::RequestParameters;
use peaking_core::pipeline::{OverlayMode, PeakingConfig, PeakingOutput, SourcePolicy};
use peaking_server::ServerConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_overlay(s: &Styles, config: &PeakingConfig) {
    let mode = match config.overlay.mode {
        OverlayMode::AlphaBlend => format!("{} ({:.2})", config.overlay.mode, config.overlay.alpha),
        OverlayMode::Replace => config.overlay.mode.to_string(),
    };
    println!("    {:<12}{}", s.label.apply_to("Mode"), s.method.apply_to(mode));
}

pub fn print_server_summary(config: &ServerConfig) {
    let s = Styles::new();
    print_title(&s, "Focus Peaking Server");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Listen"),
        s.path.apply_to(format!("ws://{}/ws", config.bind_address()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Queue"),
        s.value.apply_to(format!(
            "{} frame(s) per client, drop oldest",
            config.server.queue_capacity.max(1)
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Log level"),
        s.value.apply_to(&config.logging.level)
    );
    println!();

    println!("  {}", s.header.apply_to("Overlay"));
    print_overlay(&s, &config.peaking);
    println!();

    for (name, profile) in [("Webcam", &config.peaking.webcam), ("File", &config.peaking.file)] {
        println!("  {}", s.header.apply_to(name));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Edge base"),
            s.value.apply_to(profile.edge_base)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Dilate >"),
            s.value.apply_to(profile.dilation_cutoff)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("JPEG"),
            s.value.apply_to(profile.encode_quality)
        );
        let flag = |on: bool, label: &str| {
            if on {
                s.method.apply_to(label.to_string())
            } else {
                s.disabled.apply_to("off".to_string())
            }
        };
        println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            flag(profile.smooth_focus, "block")
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Downscale"),
            flag(profile.downscale, "by sensitivity")
        );
        println!();
    }
}

pub fn print_apply_summary(config: &PeakingConfig, params: &RequestParameters, files: usize) {
    let s = Styles::new();
    let policy = SourcePolicy::resolve(config, params);
    print_title(&s, "Focus Peaking");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Files"),
        s.value.apply_to(files)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.method.apply_to(params.source_kind)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sensitivity"),
        s.value.apply_to(params.sensitivity)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.method.apply_to(params.edge_color)
    );
    match policy.max_dimension {
        Some(max) => println!(
            "  {:<14}{}",
            s.label.apply_to("Max size"),
            s.value.apply_to(format!("{max} px"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Max size"),
            s.disabled.apply_to("original")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Overlay"));
    print_overlay(&s, config);
    println!();
}

pub fn print_frame_result(path: &Path, output: &PeakingOutput) {
    let s = Styles::new();
    let (height, width) = output.frame.dim();
    println!(
        "  {}  {}x{}  {} px highlighted  (focus > {:.1}, edges {}/{})",
        s.path.apply_to(path.display()),
        width,
        height,
        s.value.apply_to(mask_count(&output.mask)),
        output.threshold.threshold,
        output.edge_thresholds.low,
        output.edge_thresholds.high,
    );
}
