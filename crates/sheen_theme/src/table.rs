//! Flat color table built from one theme definition
//!
//! Keys are the snake-case names produced by the parser
//! (`window_background`, `button_checked_hover_border_color`,
//! `button_gradient_start`, ...). Widget lookups go through
//! [`ColorTable::widget_color`], which walks the state fallback chain.

use crate::ids::SemanticColorId;
use crate::parser::{self, ParseReport, GRADIENT_START, GRADIENT_STOP};
use rustc_hash::FxHashMap;
use sheen_core::{Color, ColorGradient};

/// State suffixes the fallback chain may strip, one at a time
const STRIPPABLE_SUFFIXES: [&str; 3] = ["_active", "_hover", "_disabled"];

const BACKGROUND_IMAGE: &str = "background_image";

/// Immutable `key -> Color` map for one theme variant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorTable {
    colors: FxHashMap<String, Color>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a theme definition, returning the table and parse statistics
    pub fn parse(source: &str) -> (Self, ParseReport) {
        let parsed = parser::parse_definition(source);
        (
            Self {
                colors: parsed.colors,
            },
            parsed.report,
        )
    }

    /// Parse a theme definition, discarding the statistics
    pub fn from_definition(source: &str) -> Self {
        Self::parse(source).0
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(key.into(), color)
    }

    /// Overlay `other` on top of this table
    pub fn extend_from(&mut self, other: &ColorTable) {
        self.colors
            .extend(other.colors.iter().map(|(k, v)| (k.clone(), *v)));
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.colors.contains_key(key)
    }

    /// Direct lookup of a semantic color
    pub fn semantic(&self, id: SemanticColorId) -> Option<Color> {
        self.get(id.key())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries sorted by key
    pub fn sorted(&self) -> Vec<(&str, Color)> {
        let mut entries: Vec<_> = self
            .colors
            .iter()
            .map(|(key, color)| (key.as_str(), *color))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Resolve `<state_key>_<property>` through the fallback chain.
    ///
    /// At each level the exact key is tried first, then (for
    /// `background_image`) the gradient start color. When neither exists one
    /// trailing `_active`, `_hover` or `_disabled` is stripped from
    /// `state_key` and the lookup repeats. A key with nothing left to strip
    /// resolves to `None`.
    pub fn widget_color(&self, state_key: &str, property: &str) -> Option<Color> {
        fallback_chain(state_key).find_map(|key| {
            self.get(&format!("{key}_{property}")).or_else(|| {
                (property == BACKGROUND_IMAGE)
                    .then(|| self.get(&format!("{key}{GRADIENT_START}")))
                    .flatten()
            })
        })
    }

    /// Resolve a two-stop gradient for `<state_key>`.
    ///
    /// Walks the same chain as [`widget_color`](Self::widget_color) with
    /// `background_image`. A level with only a flat color yields a solid
    /// gradient; a start without a stop reuses the start.
    pub fn widget_gradient(&self, state_key: &str) -> Option<ColorGradient> {
        fallback_chain(state_key).find_map(|key| {
            if let Some(start) = self.get(&format!("{key}{GRADIENT_START}")) {
                let stop = self.get(&format!("{key}{GRADIENT_STOP}")).unwrap_or(start);
                return Some(ColorGradient::new(start, stop));
            }
            self.get(&format!("{key}_{BACKGROUND_IMAGE}"))
                .map(ColorGradient::solid)
        })
    }
}

/// `state_key`, then each shorter key obtained by stripping one suffix
fn fallback_chain(state_key: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(state_key), |key| strip_state_suffix(*key))
}

/// Strip one trailing state suffix, or `None` if the key has none left
fn strip_state_suffix(key: &str) -> Option<&str> {
    STRIPPABLE_SUFFIXES
        .iter()
        .find_map(|suffix| key.strip_suffix(suffix))
        .filter(|base| !base.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: &str) -> ColorTable {
        ColorTable::from_definition(source)
    }

    #[test]
    fn test_exact_hit() {
        let table = table("button:hover { color: #010101; }\nbutton { color: #020202; }");
        assert_eq!(
            table.widget_color("button_hover", "color"),
            Some(Color::rgb(1, 1, 1))
        );
    }

    #[test]
    fn test_strips_state_suffixes() {
        let table = table("button { border-color: #020202; }");
        assert_eq!(
            table.widget_color("button_active_hover", "border_color"),
            Some(Color::rgb(2, 2, 2))
        );
        assert_eq!(
            table.widget_color("button_disabled", "border_color"),
            Some(Color::rgb(2, 2, 2))
        );
    }

    #[test]
    fn test_stops_at_first_hit() {
        let table = table(
            "button { color: #000000; }\nbutton:checked { color: #ffffff; }",
        );
        assert_eq!(
            table.widget_color("button_checked_hover", "color"),
            Some(Color::WHITE)
        );
    }

    #[test]
    fn test_unstrippable_suffix_fails() {
        let table = table("button { color: #000000; }");
        assert_eq!(table.widget_color("button_backdrop", "color"), None);
        assert_eq!(table.widget_color("button_checked_hover", "color"), None);
    }

    #[test]
    fn test_unknown_key_terminates() {
        let table = ColorTable::new();
        assert_eq!(table.widget_color("nothing", "color"), None);
        assert_eq!(table.widget_color("_hover", "color"), None);
        assert_eq!(table.widget_color("", "color"), None);
        assert_eq!(table.widget_gradient("x_hover_active_disabled"), None);
    }

    #[test]
    fn test_background_image_uses_gradient_start() {
        let table = table(
            "button { background-image: linear-gradient(to top, #dddddd, #eeeeee); }",
        );
        assert_eq!(
            table.widget_color("button_hover", "background_image"),
            Some(Color::from_hex(0xEEEEEE))
        );
        assert_eq!(table.widget_color("button_hover", "color"), None);
    }

    #[test]
    fn test_exact_image_preferred_over_gradient() {
        let mut table = table(
            "button { background-image: linear-gradient(#111111, #222222); }",
        );
        table.insert("button_background_image", Color::WHITE);
        assert_eq!(
            table.widget_color("button", "background_image"),
            Some(Color::WHITE)
        );
    }

    #[test]
    fn test_widget_gradient() {
        let table = table(
            "button { background-image: linear-gradient(#111111, #222222); }\n\
             button:hover { background-image: image(#333333); }",
        );
        assert_eq!(
            table.widget_gradient("button_active"),
            Some(ColorGradient::new(
                Color::from_hex(0x111111),
                Color::from_hex(0x222222)
            ))
        );
        assert_eq!(
            table.widget_gradient("button_hover"),
            Some(ColorGradient::solid(Color::from_hex(0x333333)))
        );
    }

    #[test]
    fn test_sorted_entries() {
        let table = table("@define-color b #000000;\n@define-color a #ffffff;");
        let keys: Vec<_> = table.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_semantic_lookup() {
        let table = table("@define-color focus_border #3584e4;");
        assert_eq!(
            table.semantic(SemanticColorId::FocusBorder),
            Some(Color::from_hex(0x3584E4))
        );
        assert_eq!(table.semantic(SemanticColorId::Shadow), None);
    }
}
