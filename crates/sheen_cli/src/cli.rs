//! Command line definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use sheen::{AnimationMode, ColorRole, InteractionState, ThemeVariant};
use std::path::PathBuf;

/// Inspect Sheen theme colors and state animations
#[derive(Parser, Debug)]
#[command(name = "sheen", version, about = "Inspect Sheen theme colors and state animations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Style configuration file (sheen.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parsed color table of a variant, sorted by key
    Dump(DumpArgs),
    /// Resolve one color role for a given interaction state
    Resolve(ResolveArgs),
    /// Hover a control and print opacity and color for every frame
    Simulate(SimulateArgs),
}

/// Variant selection and theme file override
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// light, dark, hc or hc-dark (default: from config)
    #[arg(long)]
    pub variant: Option<ThemeVariant>,

    /// Theme definition replacing the selected variant
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub theme: ThemeArgs,
}

#[derive(Args, Debug)]
pub struct StateArgs {
    #[arg(long)]
    pub hovered: bool,
    #[arg(long)]
    pub sunken: bool,
    #[arg(long)]
    pub checked: bool,
    #[arg(long)]
    pub disabled: bool,
    /// The window does not have focus
    #[arg(long)]
    pub inactive: bool,
    #[arg(long)]
    pub focus: bool,
    #[arg(long)]
    pub flat: bool,
}

impl StateArgs {
    pub fn to_state(&self) -> InteractionState {
        InteractionState {
            enabled: !self.disabled,
            window_active: !self.inactive,
            sunken: self.sunken,
            checked: self.checked,
            hovered: self.hovered,
            has_focus: self.focus,
            flat: self.flat,
        }
    }
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Widget role (button-background, ...) or semantic key (window_background, ...)
    pub role: ColorRole,

    #[command(flatten)]
    pub theme: ThemeArgs,

    #[command(flatten)]
    pub state: StateArgs,

    /// Transition in flight
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Transition progress
    #[arg(long, default_value_t = 1.0)]
    pub opacity: f32,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Widget role to paint every frame
    #[arg(default_value = "button-background")]
    pub role: ColorRole,

    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Number of frames to run
    #[arg(long, default_value_t = 12)]
    pub frames: u32,

    /// Time between frames
    #[arg(long, default_value_t = 20)]
    pub frame_ms: u64,

    /// Move the pointer away after this many frames
    #[arg(long, value_name = "FRAME")]
    pub leave_after: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Hover,
    Focus,
    Pressed,
    Enable,
}

impl From<ModeArg> for AnimationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hover => AnimationMode::Hover,
            ModeArg::Focus => AnimationMode::Focus,
            ModeArg::Pressed => AnimationMode::Pressed,
            ModeArg::Enable => AnimationMode::Enable,
        }
    }
}
