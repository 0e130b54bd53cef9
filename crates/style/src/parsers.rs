//! Low-level nom parser functions for CSS-like length values.
//!
//! This module provides composable parser functions for parsing lengths,
//! dimensions, margin shorthands, and a few keyword properties.

use crate::dimension::{Dimension, Margins, PageSize};
use crate::font::FontStyle;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::{IResult, Parser};
use thiserror::Error;

/// Points per inch.
pub const PT_PER_IN: f64 = 72.0;
/// Points per centimetre.
pub const PT_PER_CM: f64 = 72.0 / 2.54;
/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;
/// Points per CSS pixel (96 px to the inch).
pub const PT_PER_PX: f64 = 0.75;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f64> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(PT_PER_PX, tag_no_case("px")),
        value(PT_PER_IN, tag_no_case("in")),
        value(PT_PER_CM, tag_no_case("cm")),
        value(PT_PER_MM, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm"), in points.
pub fn parse_length(input: &str) -> IResult<&str, f64> {
    let (input, number) = parse_f64(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a dimension value (length, percentage, or "auto").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        map((parse_f64, char('%')), |(val, _)| Dimension::Percent(val)),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

/// Parses CSS shorthand margins (1, 2, or 4 lengths, separated by spaces).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    let lengths = run_parser(separated_list1(space1, parse_length), input).map_err(|_| {
        StyleParseError::Parse(format!("Failed to parse margins value: '{}'", input))
    })?;

    match lengths.as_slice() {
        &[all] => Ok(Margins::all(all)),
        &[vertical, horizontal] => Ok(Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }),
        &[top, right, bottom, left] => Ok(Margins {
            top,
            right,
            bottom,
            left,
        }),
        other => Err(StyleParseError::Parse(format!(
            "Margin shorthand takes 1, 2, or 4 lengths, got {}",
            other.len()
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses an absolute length such as a font size. Percentages and "auto" are rejected.
pub fn parse_absolute_length(property: &str, s: &str) -> Result<f64, StyleParseError> {
    match run_parser(parse_dimension, s)? {
        Dimension::Pt(v) if v >= 0.0 => Ok(v),
        _ => Err(StyleParseError::InvalidValue {
            property: property.to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a font style string (e.g., "normal", "italic").
pub fn parse_font_style(s: &str) -> Result<FontStyle, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "" | "normal" => Ok(FontStyle::Normal),
        "italic" => Ok(FontStyle::Italic),
        "oblique" => Ok(FontStyle::Oblique),
        _ => Err(StyleParseError::InvalidValue {
            property: "font-style".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a page size name (e.g., "A4", "Letter", "Legal").
pub fn parse_page_size(s: &str) -> Result<PageSize, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "a4" => Ok(PageSize::A4),
        "letter" => Ok(PageSize::Letter),
        "legal" => Ok(PageSize::Legal),
        _ => Err(StyleParseError::InvalidValue {
            property: "size".to_string(),
            value: s.to_string(),
        }),
    }
}
