//! Sheen Core
//!
//! Foundational types shared by the Sheen widget theme:
//!
//! - **Colors**: 8-bit RGBA [`Color`] with deterministic interpolation, and
//!   two-stop [`ColorGradient`]s
//! - **Control handles**: generational [`ControlId`]s handed out by a
//!   [`ControlTable`], so destroyed controls are detectable in O(1)
//!
//! # Example
//!
//! ```rust
//! use sheen_core::{Color, ControlInfo, ControlTable};
//!
//! let idle = Color::from_hex(0xE0E0E0);
//! let hover = Color::from_hex(0xFFFFFF);
//! assert_eq!(Color::lerp(&idle, &hover, 0.5), Color::from_hex(0xF0F0F0));
//!
//! let controls = ControlTable::new();
//! let button = controls.create(ControlInfo::named("button"));
//! assert!(controls.is_alive(button));
//! ```

pub mod color;
pub mod control;

pub use color::{Color, ColorGradient, ColorParseError};
pub use control::{ControlId, ControlInfo, ControlTable};
