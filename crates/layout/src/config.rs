use tablefit_style::parsers::parse_absolute_length;
use tablefit_style::{FontStyle, StyleParseError};

/// The font every cell is measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSettings {
    pub family: String,
    pub style: FontStyle,
    /// Font size in points.
    pub size: f64,
}

impl FontSettings {
    pub const DEFAULT_FAMILY: &'static str = "Helvetica";
    pub const DEFAULT_SIZE: f64 = 12.0;

    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            style: FontStyle::Normal,
            size,
        }
    }

    /// Builds settings from a CSS font size such as `"10pt"` or `"4mm"`.
    ///
    /// The size is converted to points once, here. Relative sizes are rejected.
    pub fn parse(family: impl Into<String>, size: &str) -> Result<Self, StyleParseError> {
        Ok(Self::new(family, parse_absolute_length("font-size", size)?))
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, Self::DEFAULT_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocatorConfig {
    /// Font used for every measurement.
    pub font: FontSettings,
    /// The smallest share of the table, in percent, the weighted strategy gives a column.
    ///
    /// Defaults to `6.5`.
    pub min_percent: f64,
}

impl AllocatorConfig {
    pub const DEFAULT_MIN_PERCENT: f64 = 6.5;
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            font: FontSettings::default(),
            min_percent: Self::DEFAULT_MIN_PERCENT,
        }
    }
}
