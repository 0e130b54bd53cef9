//! Defines primitives for lengths, page sizes, and margins.
//!
//! All absolute lengths are expressed in typographic points (1/72 in).
use crate::parsers::{parse_dimension, parse_page_size, parse_shorthand_margins, run_parser};
use crate::StyleParseError;
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A CSS-like length: an absolute size, a share of some reference width, or "auto".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Pt(f64),
    Percent(f64),
    #[default]
    Auto,
}

impl Dimension {
    /// Returns `true` for lengths that need a reference width to resolve.
    pub fn is_relative(&self) -> bool {
        !matches!(self, Dimension::Pt(_))
    }
}

impl FromStr for Dimension {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run_parser(parse_dimension, s)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pt(v) => write!(f, "{}pt", v),
            Dimension::Percent(v) => write!(f, "{}%", v),
            Dimension::Auto => f.write_str("auto"),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Bare numbers are points, the same as a unitless length string.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DimensionDef {
            Str(String),
            Num(f64),
        }

        match DimensionDef::deserialize(deserializer)? {
            DimensionDef::Str(s) => s.parse().map_err(de::Error::custom),
            DimensionDef::Num(n) => Ok(Dimension::Pt(n)),
        }
    }
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn all(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: f64) -> Self {
        Self {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    /// Combined left and right margin.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

impl FromStr for Margins {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shorthand_margins(s)
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string like '10pt' or '10mm 20mm' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                parse_shorthand_margins(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    let value: Dimension = map.next_value()?;
                    let points = match value {
                        Dimension::Pt(v) => v,
                        other => {
                            return Err(de::Error::custom(format!(
                                "margin '{}' must be an absolute length, got {}",
                                key, other
                            )));
                        }
                    };
                    match key.as_str() {
                        "top" => margins.top = points,
                        "right" => margins.right = points,
                        "bottom" => margins.bottom = points,
                        "left" => margins.left = points,
                        _ => { /* ignore unknown fields */ }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f64, height: f64 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn width_pt(&self) -> f64 {
        self.dimensions_pt().0
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: Dimension, height: Dimension },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => parse_page_size(&s).map_err(de::Error::custom),
            PageSizeDef::Map {
                width: Dimension::Pt(width),
                height: Dimension::Pt(height),
            } => Ok(PageSize::Custom { width, height }),
            PageSizeDef::Map { .. } => Err(de::Error::custom(
                "custom page sizes need absolute width and height",
            )),
        }
    }
}
