//! Subcommand implementations

use crate::cli::{DumpArgs, ResolveArgs, SimulateArgs, ThemeArgs};
use anyhow::{Context, Result};
use sheen::{
    AnimationMode, Color, ColorOptions, ColorResolver, ColorRole, EngineKind, InteractionState,
    Style, StyleConfig, ThemeColors, ThemeVariant,
};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub fn load_config(path: Option<&Path>) -> Result<StyleConfig> {
    match path {
        Some(path) => StyleConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(StyleConfig::default()),
    }
}

/// Variant and colors after applying the config and `--variant`/`--theme`
fn theme_colors(config: &StyleConfig, args: &ThemeArgs) -> Result<(ThemeVariant, ThemeColors)> {
    let variant = args.variant.unwrap_or(config.variant);
    let colors = config.theme.load_colors();
    let colors = match &args.theme {
        Some(path) => colors
            .with_file(variant, path)
            .with_context(|| format!("Failed to load theme {}", path.display()))?,
        None => colors,
    };
    Ok((variant, colors))
}

fn format_color(color: Option<Color>) -> String {
    color.map_or_else(|| "none".to_string(), |color| color.to_hex_string())
}

pub fn dump(config: &StyleConfig, args: &DumpArgs) -> Result<()> {
    let (variant, colors) = theme_colors(config, &args.theme)?;
    let table = colors.table(variant);

    for (key, color) in table.sorted() {
        println!("{key:<48} {color}");
    }

    let report = colors.report(variant);
    println!();
    println!(
        "# {variant}: {} entries, {} definitions, {} rules, {} skipped lines, {} skipped declarations",
        table.len(),
        report.definitions,
        report.rules,
        report.skipped_lines,
        report.skipped_declarations
    );
    Ok(())
}

pub fn resolve(config: &StyleConfig, args: &ResolveArgs) -> Result<()> {
    let (variant, colors) = theme_colors(config, &args.theme)?;
    let state = args.state.to_state();
    let mut options = ColorOptions::new(variant, state);
    if let Some(mode) = args.mode {
        options = options.with_animation(mode.into(), args.opacity);
    }

    let resolver = colors.resolver();
    if let ColorRole::Widget(role) = args.role {
        println!("key      {}", ColorResolver::state_key(role, &state));
    }
    println!("group    {}", options.color_group());
    println!("color    {}", format_color(resolver.resolve(args.role, &options)));
    if let Some(gradient) = resolver.resolve_gradient(args.role, &options) {
        if !gradient.is_solid() {
            println!("gradient {} -> {}", gradient.start, gradient.stop);
        }
    }
    Ok(())
}

/// Offset and instant of a simulated frame
fn frame_time(start: Instant, frame_ms: u64, frame: u32) -> Result<(Duration, Instant)> {
    let elapsed = frame_ms
        .checked_mul(u64::from(frame))
        .map(Duration::from_millis)
        .with_context(|| format!("Frame {frame} at {frame_ms} ms per frame overflows"))?;
    let now = start
        .checked_add(elapsed)
        .with_context(|| format!("Frame {frame} is too far in the future"))?;
    Ok((elapsed, now))
}

pub fn simulate(config: &StyleConfig, args: &SimulateArgs) -> Result<()> {
    let (variant, colors) = theme_colors(config, &args.theme)?;
    let config = StyleConfig {
        variant,
        ..config.clone()
    };
    let mut style = Style::new(config)
        .context("Invalid style configuration")?
        .with_colors(Arc::new(colors));

    let control = style.create_control("simulated");
    let start = style.animations().frame_time();
    let idle = InteractionState::default();
    let hovered = InteractionState {
        hovered: true,
        ..idle
    };

    style.update_widget_state(control, &idle);
    style.update_widget_state(control, &hovered);
    let mut state = hovered;

    println!("{:>5} {:>7} {:>8}  color", "frame", "ms", "opacity");
    for frame in 0..=args.frames {
        let (elapsed, now) = frame_time(start, args.frame_ms, frame)?;
        style.begin_frame(now);

        if args.leave_after == Some(frame) {
            state = idle;
            style.update_widget_state(control, &state);
        }

        let opacity = style
            .engine(EngineKind::WidgetState)
            .opacity(control, AnimationMode::Hover);
        let color = style.color(control, args.role, state);
        println!(
            "{frame:>5} {:>7} {opacity:>8.3}  {}",
            elapsed.as_millis(),
            format_color(color)
        );
    }

    style.destroy_control(control);
    tracing::debug!(
        remaining = style.animations().tracked_entries(),
        "simulation finished"
    );
    Ok(())
}
