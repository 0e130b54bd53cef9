//! Page layout: the sheet a table is printed on.

use super::dimension::{Margins, PageSize};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
}

impl PageLayout {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self {
            size,
            margins: Some(margins),
        }
    }

    /// Width left between the left and right margins.
    pub fn printable_width(&self) -> f64 {
        self.size.width_pt() - self.margins.unwrap_or_default().horizontal()
    }
}
