//! Per-variant color tables and palettes
//!
//! [`ThemeColors`] is built once per style instance and is immutable
//! afterwards; share it behind an `Arc`.

use crate::error::{Result, ThemeError};
use crate::ids::SemanticColorId;
use crate::palette::{ColorGroup, Palette};
use crate::parser::ParseReport;
use crate::resolve::ColorResolver;
use crate::table::ColorTable;
use crate::variant::ThemeVariant;
use sheen_core::Color;
use std::path::Path;

const LIGHT: &str = include_str!("../themes/light.css");
const DARK: &str = include_str!("../themes/dark.css");
const HIGH_CONTRAST: &str = include_str!("../themes/hc.css");
const HIGH_CONTRAST_INVERSE: &str = include_str!("../themes/hc-dark.css");

/// Table, palette and parse statistics of one variant
#[derive(Clone, Debug)]
pub struct VariantColors {
    pub table: ColorTable,
    pub palette: Palette,
    pub report: ParseReport,
}

impl VariantColors {
    pub fn from_definition(source: &str) -> Self {
        let (table, report) = ColorTable::parse(source);
        let palette = Palette::from_table(&table);
        Self {
            table,
            palette,
            report,
        }
    }
}

/// Colors for every theme variant
#[derive(Clone, Debug)]
pub struct ThemeColors {
    variants: [VariantColors; ThemeVariant::COUNT],
}

impl ThemeColors {
    /// Built-in definition text of a variant
    pub fn builtin_definition(variant: ThemeVariant) -> &'static str {
        match variant {
            ThemeVariant::Light => LIGHT,
            ThemeVariant::Dark => DARK,
            ThemeVariant::HighContrast => HIGH_CONTRAST,
            ThemeVariant::HighContrastInverse => HIGH_CONTRAST_INVERSE,
        }
    }

    /// Parse the embedded definitions of all variants
    pub fn builtin() -> Self {
        Self {
            variants: ThemeVariant::ALL
                .map(|variant| VariantColors::from_definition(Self::builtin_definition(variant))),
        }
    }

    /// Replace one variant with a parsed definition
    pub fn with_definition(mut self, variant: ThemeVariant, source: &str) -> Result<Self> {
        self.set_definition(variant, source)?;
        Ok(self)
    }

    /// Replace one variant with the definition read from `path`
    pub fn with_file(mut self, variant: ThemeVariant, path: impl AsRef<Path>) -> Result<Self> {
        self.load_file(variant, path.as_ref())?;
        Ok(self)
    }

    /// Like [`with_file`](Self::with_file), keeping the current definition
    /// when the file cannot be used
    pub fn with_file_or_current(mut self, variant: ThemeVariant, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Err(err) = self.load_file(variant, path) {
            tracing::warn!(%variant, path = %path.display(), "{err}; keeping current colors");
        }
        self
    }

    /// Parse `source` and install it for `variant`. A definition without a
    /// single usable entry is rejected and leaves the variant untouched.
    pub fn set_definition(&mut self, variant: ThemeVariant, source: &str) -> Result<()> {
        let colors = VariantColors::from_definition(source);
        if colors.table.is_empty() {
            return Err(ThemeError::Empty { variant });
        }
        tracing::debug!(
            %variant,
            entries = colors.table.len(),
            skipped = colors.report.skipped_lines,
            "replaced theme definition"
        );
        self.variants[variant.index()] = colors;
        Ok(())
    }

    fn load_file(&mut self, variant: ThemeVariant, path: &Path) -> Result<()> {
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.set_definition(variant, &source)
    }

    pub fn variant(&self, variant: ThemeVariant) -> &VariantColors {
        &self.variants[variant.index()]
    }

    pub fn table(&self, variant: ThemeVariant) -> &ColorTable {
        &self.variant(variant).table
    }

    pub fn palette(&self, variant: ThemeVariant) -> &Palette {
        &self.variant(variant).palette
    }

    pub fn report(&self, variant: ThemeVariant) -> ParseReport {
        self.variant(variant).report
    }

    /// Static lookup in the active color group; `None` if the variant does
    /// not define `id`
    pub fn lookup(&self, id: SemanticColorId, variant: ThemeVariant) -> Option<Color> {
        self.palette(variant).color(ColorGroup::Active, id)
    }

    pub fn resolver(&self) -> ColorResolver<'_> {
        ColorResolver::new(self)
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::builtin()
    }
}
