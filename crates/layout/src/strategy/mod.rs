//! The three width allocation strategies.
//!
//! Each strategy reads a validated `TableContent` and returns one share of
//! the table span per column:
//!
//! - `evenly`: fixed columns take their given lengths, the rest split what is left
//! - `minimum`: every column gets its longest word, the remainder goes to columns
//!   whose full text is much longer than that word
//! - `weighted`: columns get their average share of each row's content width,
//!   with a minimum floor per column

pub(crate) mod evenly;
pub(crate) mod minimum;
pub(crate) mod weighted;

use serde::{Deserialize, Serialize};
use tablefit_style::Dimension;

/// Padding sample prepended to every measurement by the minimum-content strategy.
pub const DEFAULT_PAD: &str = "aaa";

fn full_width() -> Dimension {
    Dimension::Percent(100.0)
}

fn default_pad() -> String {
    DEFAULT_PAD.to_string()
}

/// Selects a strategy and its parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Strategy {
    /// Even split, except for columns with a fixed length.
    Evenly {
        #[serde(default = "full_width")]
        table_width: Dimension,
        /// Fixed lengths by column index; `None` or `auto` columns share the rest.
        #[serde(default)]
        column_widths: Vec<Option<Dimension>>,
    },
    /// Longest-word minimum plus proportional expansion.
    Minimum {
        #[serde(default = "full_width")]
        table_width: Dimension,
        #[serde(default = "default_pad")]
        pad: String,
    },
    /// Row-relative average share with a minimum floor.
    #[default]
    Weighted,
}

impl Strategy {
    pub fn evenly(table_width: Dimension, column_widths: Vec<Option<Dimension>>) -> Self {
        Strategy::Evenly {
            table_width,
            column_widths,
        }
    }

    pub fn minimum(table_width: Dimension) -> Self {
        Strategy::Minimum {
            table_width,
            pad: default_pad(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Evenly { .. } => "evenly",
            Strategy::Minimum { .. } => "minimum",
            Strategy::Weighted => "weighted",
        }
    }
}
