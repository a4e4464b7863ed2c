//! Semantic color ids
//!
//! The closed set of named colors every theme definition is expected to
//! provide. Each id is stored in the color table under its snake-case key,
//! exactly as written after `@define-color`.

use std::fmt;

/// Semantic color keys for static lookups
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum SemanticColorId {
    // Window
    WindowBackground,
    WindowForeground,

    // Views (lists, text edits)
    ViewBackground,
    ViewForeground,
    ViewAlternateBackground,
    ViewHoverBackground,

    // Buttons
    ButtonBackground,
    ButtonForeground,
    ButtonHoverBackground,

    // Selection
    SelectedBackground,
    SelectedForeground,

    // Links
    LinkForeground,
    LinkVisitedForeground,

    // Tooltips
    TooltipBackground,
    TooltipForeground,

    PlaceholderForeground,

    // Borders
    Border,
    DarkBorder,
    FocusBorder,

    // Bevel shades
    LightShade,
    MidShade,
    DarkShade,
    Shadow,

    // Status
    SuccessForeground,
    WarningForeground,
    ErrorForeground,
}

impl SemanticColorId {
    pub const COUNT: usize = 26;

    pub const ALL: [SemanticColorId; Self::COUNT] = [
        Self::WindowBackground,
        Self::WindowForeground,
        Self::ViewBackground,
        Self::ViewForeground,
        Self::ViewAlternateBackground,
        Self::ViewHoverBackground,
        Self::ButtonBackground,
        Self::ButtonForeground,
        Self::ButtonHoverBackground,
        Self::SelectedBackground,
        Self::SelectedForeground,
        Self::LinkForeground,
        Self::LinkVisitedForeground,
        Self::TooltipBackground,
        Self::TooltipForeground,
        Self::PlaceholderForeground,
        Self::Border,
        Self::DarkBorder,
        Self::FocusBorder,
        Self::LightShade,
        Self::MidShade,
        Self::DarkShade,
        Self::Shadow,
        Self::SuccessForeground,
        Self::WarningForeground,
        Self::ErrorForeground,
    ];

    /// Key in the color table
    pub fn key(self) -> &'static str {
        match self {
            Self::WindowBackground => "window_background",
            Self::WindowForeground => "window_foreground",
            Self::ViewBackground => "view_background",
            Self::ViewForeground => "view_foreground",
            Self::ViewAlternateBackground => "view_alternate_background",
            Self::ViewHoverBackground => "view_hover_background",
            Self::ButtonBackground => "button_background",
            Self::ButtonForeground => "button_foreground",
            Self::ButtonHoverBackground => "button_hover_background",
            Self::SelectedBackground => "selected_background",
            Self::SelectedForeground => "selected_foreground",
            Self::LinkForeground => "link_foreground",
            Self::LinkVisitedForeground => "link_visited_foreground",
            Self::TooltipBackground => "tooltip_background",
            Self::TooltipForeground => "tooltip_foreground",
            Self::PlaceholderForeground => "placeholder_foreground",
            Self::Border => "border",
            Self::DarkBorder => "dark_border",
            Self::FocusBorder => "focus_border",
            Self::LightShade => "light_shade",
            Self::MidShade => "mid_shade",
            Self::DarkShade => "dark_shade",
            Self::Shadow => "shadow",
            Self::SuccessForeground => "success_foreground",
            Self::WarningForeground => "warning_foreground",
            Self::ErrorForeground => "error_foreground",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SemanticColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
