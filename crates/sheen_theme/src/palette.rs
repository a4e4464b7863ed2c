//! Color-group palettes
//!
//! A [`Palette`] holds the semantic colors of one variant for each
//! [`ColorGroup`], precomputed from the color table so static lookups are
//! a plain array index.

use crate::ids::SemanticColorId;
use crate::table::ColorTable;
use sheen_core::Color;
use std::fmt;

/// Which of the three parallel palettes a lookup reads from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    /// Enabled control in the focused window
    #[default]
    Active,
    /// Enabled control in a window that is not focused (backdrop)
    Inactive,
    Disabled,
}

impl ColorGroup {
    pub const COUNT: usize = 3;

    pub const ALL: [ColorGroup; Self::COUNT] =
        [ColorGroup::Active, ColorGroup::Inactive, ColorGroup::Disabled];

    /// Table key suffix tried before the plain key
    fn key_suffix(self) -> Option<&'static str> {
        match self {
            Self::Active => None,
            Self::Inactive => Some("_backdrop"),
            Self::Disabled => Some("_disabled"),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Disabled => "disabled",
        })
    }
}

/// Semantic colors of one variant, per color group
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    groups: [[Option<Color>; SemanticColorId::COUNT]; ColorGroup::COUNT],
}

impl Palette {
    /// A palette with every entry unresolved
    pub fn empty() -> Self {
        Self {
            groups: [[None; SemanticColorId::COUNT]; ColorGroup::COUNT],
        }
    }

    /// Build all three groups from a table
    pub fn from_table(table: &ColorTable) -> Self {
        let mut palette = Self::empty();
        for group in ColorGroup::ALL {
            for id in SemanticColorId::ALL {
                let key = id.key();
                let color = group
                    .key_suffix()
                    .and_then(|suffix| table.get(&format!("{key}{suffix}")))
                    .or_else(|| table.get(key));
                palette.groups[group.index()][id.index()] = color;
            }
        }
        palette
    }

    pub fn color(&self, group: ColorGroup, id: SemanticColorId) -> Option<Color> {
        self.groups[group.index()][id.index()]
    }

    pub fn set_color(&mut self, group: ColorGroup, id: SemanticColorId, color: Option<Color>) {
        self.groups[group.index()][id.index()] = color;
    }

    /// Number of resolved entries in `group`
    pub fn resolved_count(&self, group: ColorGroup) -> usize {
        self.groups[group.index()]
            .iter()
            .filter(|color| color.is_some())
            .count()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
    }
}
