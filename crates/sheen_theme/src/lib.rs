//! Sheen Theme Colors
//!
//! Theme definitions, per-variant color tables and state-aware color
//! resolution.
//!
//! # Overview
//!
//! - **Definitions**: a line-oriented, CSS-like text per variant
//!   (`@define-color` entries and one-line widget rules), parsed
//!   best-effort by [`parser`]
//! - **Tables**: flat [`ColorTable`]s with a fallback chain for compound
//!   widget keys
//! - **Palettes**: active, inactive and disabled [`Palette`]s of the
//!   [`SemanticColorId`]s
//! - **Resolution**: [`ColorResolver`] maps a [`ColorRole`] and
//!   [`ColorOptions`] to a color, blending the two sides of an in-flight
//!   transition
//!
//! Unresolvable colors are `None`: the caller skips that layer.
//!
//! # Example
//!
//! ```rust
//! use sheen_theme::{ColorOptions, InteractionState, ThemeColors, ThemeVariant, WidgetRole};
//!
//! let colors = ThemeColors::builtin();
//! let hovered = InteractionState { hovered: true, ..Default::default() };
//! let options = ColorOptions::new(ThemeVariant::Dark, hovered);
//!
//! let background = colors.resolver().resolve(WidgetRole::ButtonBackground, &options);
//! assert!(background.is_some());
//! ```

pub mod colors;
pub mod error;
pub mod ids;
pub mod palette;
pub mod parser;
pub mod resolve;
pub mod table;
pub mod variant;

pub use colors::{ThemeColors, VariantColors};
pub use error::{Result, ThemeError};
pub use ids::SemanticColorId;
pub use palette::{ColorGroup, Palette};
pub use parser::{parse_definition, ParseReport, ParsedDefinition};
pub use resolve::{ColorOptions, ColorResolver, ColorRole, InteractionState, WidgetRole};
pub use table::ColorTable;
pub use variant::ThemeVariant;

pub use sheen_animation::AnimationMode;
pub use sheen_core::{Color, ColorGradient};
