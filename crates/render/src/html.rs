use crate::error::RenderError;
use crate::{DEFAULT_CLASS_PREFIX, column_class};
use std::fmt::Write;
use tablefit_layout::TableContent;

/// Writes a table as HTML.
///
/// Every `<th>` and `<td>` carries its column class, so CSS from
/// `CssEmitter` with the same prefix sizes it. Body rows alternate
/// `row-even` and `row-odd`, starting at `row-even`. Cell content is written
/// verbatim; it may itself be markup.
#[derive(Debug, Clone)]
pub struct MarkupRenderer {
    prefix: String,
    header_classes_on_cells: bool,
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

fn class_attr<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl MarkupRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            header_classes_on_cells: false,
        }
    }

    /// When set, body cells also carry their column's header class, ahead of their own.
    pub fn with_header_classes_on_cells(mut self, enabled: bool) -> Self {
        self.header_classes_on_cells = enabled;
        self
    }

    pub fn render(&self, content: &TableContent) -> Result<String, RenderError> {
        content.validate()?;
        let header = content.header();
        let mut out = String::from("<table><thead><tr>");

        for (column, cell) in header.iter().enumerate() {
            let positional = column_class(&self.prefix, column);
            let class = class_attr([positional.as_str(), cell.class.as_str()]);
            write!(out, "<th class=\"{}\">{}</th>", class, cell.content)?;
        }
        out.push_str("</tr></thead><tbody>\n");

        for (index, row) in content.body().iter().enumerate() {
            let parity = if index % 2 == 0 { "row-even" } else { "row-odd" };
            writeln!(out, "<tr class=\"{}\">", parity)?;
            for (column, cell) in row.iter().enumerate() {
                let positional = column_class(&self.prefix, column);
                let header_class = if self.header_classes_on_cells {
                    header[column].class.as_str()
                } else {
                    ""
                };
                let class = class_attr([positional.as_str(), header_class, cell.class.as_str()]);
                writeln!(out, "<td class=\"{}\">{}</td>", class, cell.content)?;
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>");

        log::debug!(
            "Rendered table with {} columns and {} body rows",
            header.len(),
            content.body().len()
        );
        Ok(out)
    }
}
