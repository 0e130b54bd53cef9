use crate::config::{OptimizerConfig, TableDocument};
use crate::error::OptimizerError;
use std::sync::Arc;
use tablefit_layout::{Cell, ColumnWidths, Strategy, TableContent, WidthAllocator};
use tablefit_render::{CssEmitter, MarkupRenderer};
use tablefit_style::Dimension;
use tablefit_traits::{PageGeometry, TextMeasurer};

/// Widths from one allocation, with the CSS that applies them.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedColumns {
    pub widths: ColumnWidths,
    pub css: String,
}

/// A fully rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutput {
    pub widths: ColumnWidths,
    pub css: String,
    pub html: String,
}

impl TableOutput {
    /// The CSS in a `<style>` element followed by the table.
    pub fn to_document(&self) -> String {
        format!("<style>\n{}</style>\n{}\n", self.css, self.html)
    }
}

/// One table: its content, the allocator that sizes it and the renderers that print it.
///
/// Lengths are taken as CSS strings (`"100%"`, `"40mm"`) and parsed on each call.
#[derive(Debug)]
pub struct TableOptimizer {
    content: TableContent,
    allocator: WidthAllocator,
    css: CssEmitter,
    markup: MarkupRenderer,
}

impl TableOptimizer {
    pub fn new(
        measurer: Arc<dyn TextMeasurer>,
        geometry: Arc<dyn PageGeometry>,
        config: &OptimizerConfig,
    ) -> Result<Self, OptimizerError> {
        let allocator = WidthAllocator::new(measurer, geometry, config.allocator_config()?);
        Ok(Self {
            content: TableContent::new(),
            allocator,
            css: CssEmitter::new(config.column_class_prefix.as_str()),
            markup: MarkupRenderer::new(config.column_class_prefix.as_str())
                .with_header_classes_on_cells(config.header_classes_on_cells),
        })
    }

    /// Builds an optimizer for `document`, on the document's page, holding its cells.
    pub fn from_document(
        document: &TableDocument,
        measurer: Arc<dyn TextMeasurer>,
    ) -> Result<Self, OptimizerError> {
        let mut optimizer = Self::new(
            measurer,
            Arc::new(document.config.page_setup()),
            &document.config,
        )?;
        optimizer.content = document.content();
        Ok(optimizer)
    }

    pub fn content(&self) -> &TableContent {
        &self.content
    }

    pub fn allocator(&self) -> &WidthAllocator {
        &self.allocator
    }

    pub fn add_header_cell(&mut self, content: &str, class: &str) {
        self.content.add_header_cell(content, class);
    }

    pub fn start_data_row(&mut self) {
        self.content.start_data_row();
    }

    pub fn add_data_row_cell(&mut self, content: &str, class: &str) {
        self.content.add_data_row_cell(content, class);
    }

    pub fn end_data_row(&mut self) {
        self.content.end_data_row();
    }

    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.content.push_row(cells);
    }

    pub fn reset_data(&mut self) {
        self.content.reset_data();
    }

    /// Sets the weighted strategy's floor to the share `text` needs of a `table_width` table.
    pub fn set_minimum_percentage_based_on_string(
        &mut self,
        text: &str,
        table_width: &str,
    ) -> Result<f64, OptimizerError> {
        let table_width: Dimension = table_width.parse()?;
        Ok(self
            .allocator
            .set_minimum_percentage_based_on_string(text, &table_width)?)
    }

    /// Even split, with fixed lengths for the columns in `column_widths`.
    ///
    /// `column_widths` pairs a column index with a length. Empty lengths leave the column flexible.
    pub fn determine_column_widths_evenly(
        &self,
        table_width: &str,
        column_widths: &[(usize, &str)],
    ) -> Result<SizedColumns, OptimizerError> {
        let table_width: Dimension = table_width.parse()?;
        let mut fixed: Vec<Option<Dimension>> = Vec::new();
        for (column, length) in column_widths {
            if length.trim().is_empty() {
                continue;
            }
            if fixed.len() <= *column {
                fixed.resize(column + 1, None);
            }
            fixed[*column] = Some(length.parse()?);
        }
        let widths = self
            .allocator
            .determine_column_widths_evenly(&self.content, &table_width, &fixed)?;
        Ok(self.sized(widths))
    }

    pub fn determine_column_widths_by_minimum_strategy(
        &self,
        table_width: &str,
        pad: &str,
    ) -> Result<SizedColumns, OptimizerError> {
        let table_width: Dimension = table_width.parse()?;
        let widths = self.allocator.determine_column_widths_by_minimum_strategy(
            &self.content,
            &table_width,
            pad,
        )?;
        Ok(self.sized(widths))
    }

    pub fn determine_column_widths_by_weighting(&self) -> Result<SizedColumns, OptimizerError> {
        let widths = self
            .allocator
            .determine_column_widths_by_weighting(&self.content)?;
        Ok(self.sized(widths))
    }

    pub fn determine(&self, strategy: &Strategy) -> Result<SizedColumns, OptimizerError> {
        let widths = self.allocator.allocate(&self.content, strategy)?;
        Ok(self.sized(widths))
    }

    pub fn render_html(&self) -> Result<String, OptimizerError> {
        Ok(self.markup.render(&self.content)?)
    }

    /// Sizes the columns with `strategy` and renders both CSS and markup.
    pub fn render(&self, strategy: &Strategy) -> Result<TableOutput, OptimizerError> {
        let SizedColumns { widths, css } = self.determine(strategy)?;
        let html = self.render_html()?;
        log::info!(
            "Sized {} columns with the {} strategy ({:?})",
            widths.len(),
            strategy.name(),
            widths.fit()
        );
        Ok(TableOutput { widths, css, html })
    }

    fn sized(&self, widths: ColumnWidths) -> SizedColumns {
        let css = self.css.render(&widths);
        SizedColumns { widths, css }
    }
}
