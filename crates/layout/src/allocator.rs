use crate::LayoutError;
use crate::allocation::ColumnWidths;
use crate::config::AllocatorConfig;
use crate::content::TableContent;
use crate::geometry::SpanResolver;
use crate::measure::MeasurementAdapter;
use crate::strategy::{self, Strategy};
use std::sync::Arc;
use std::time::Instant;
use tablefit_style::Dimension;
use tablefit_traits::{PageGeometry, TextMeasurer};

/// Computes column widths for a table's content.
///
/// The allocator holds no table state. Every call validates the content it is
/// given and returns a fresh `ColumnWidths`, so one allocator can serve many
/// tables. The only mutable setting is the weighted strategy's floor.
#[derive(Debug, Clone)]
pub struct WidthAllocator {
    measurement: MeasurementAdapter,
    resolver: SpanResolver,
    min_percent: f64,
}

impl WidthAllocator {
    pub fn new(
        measurer: Arc<dyn TextMeasurer>,
        geometry: Arc<dyn PageGeometry>,
        config: AllocatorConfig,
    ) -> Self {
        Self {
            measurement: MeasurementAdapter::new(measurer, config.font),
            resolver: SpanResolver::new(geometry),
            min_percent: config.min_percent,
        }
    }

    pub fn measurement(&self) -> &MeasurementAdapter {
        &self.measurement
    }

    pub fn resolver(&self) -> &SpanResolver {
        &self.resolver
    }

    /// The weighted strategy's per-column floor, in percent.
    pub fn min_percent(&self) -> f64 {
        self.min_percent
    }

    pub fn set_min_percent(&mut self, min_percent: f64) {
        self.min_percent = min_percent;
    }

    /// Sets the floor to the share of the span that `text` needs and returns it.
    ///
    /// Use it with a label that must never be squeezed, such as "Subtotal:".
    pub fn set_minimum_percentage_based_on_string(
        &mut self,
        text: &str,
        table_width: &Dimension,
    ) -> Result<f64, LayoutError> {
        let span = self.resolver.resolve_span(table_width)?;
        let width = self.measurement.measure(text)?;
        self.min_percent = width / span * 100.0;
        log::debug!(
            "Minimum column share set to {:.2}% from {:?}",
            self.min_percent,
            text
        );
        Ok(self.min_percent)
    }

    pub fn determine_column_widths_evenly(
        &self,
        content: &TableContent,
        table_width: &Dimension,
        column_widths: &[Option<Dimension>],
    ) -> Result<ColumnWidths, LayoutError> {
        self.timed("evenly", content, || {
            strategy::evenly::allocate(
                content.column_count(),
                &self.resolver,
                table_width,
                column_widths,
            )
        })
    }

    pub fn determine_column_widths_by_minimum_strategy(
        &self,
        content: &TableContent,
        table_width: &Dimension,
        pad: &str,
    ) -> Result<ColumnWidths, LayoutError> {
        self.timed("minimum", content, || {
            strategy::minimum::allocate(
                content,
                &self.measurement,
                &self.resolver,
                table_width,
                pad,
            )
        })
    }

    pub fn determine_column_widths_by_weighting(
        &self,
        content: &TableContent,
    ) -> Result<ColumnWidths, LayoutError> {
        self.timed("weighted", content, || {
            strategy::weighted::allocate(content, &self.measurement, self.min_percent)
        })
    }

    /// Runs whichever strategy `strategy` selects.
    pub fn allocate(
        &self,
        content: &TableContent,
        strategy: &Strategy,
    ) -> Result<ColumnWidths, LayoutError> {
        match strategy {
            Strategy::Evenly {
                table_width,
                column_widths,
            } => self.determine_column_widths_evenly(content, table_width, column_widths),
            Strategy::Minimum { table_width, pad } => {
                self.determine_column_widths_by_minimum_strategy(content, table_width, pad)
            }
            Strategy::Weighted => self.determine_column_widths_by_weighting(content),
        }
    }

    fn timed<F>(
        &self,
        name: &str,
        content: &TableContent,
        run: F,
    ) -> Result<ColumnWidths, LayoutError>
    where
        F: FnOnce() -> Result<ColumnWidths, LayoutError>,
    {
        content.validate()?;
        let start = Instant::now();
        let widths = run()?;
        log::debug!(
            "WidthAllocator::{} sized {} columns over {} rows in {:?} ({:?})",
            name,
            widths.len(),
            content.body().len(),
            start.elapsed(),
            widths.fit()
        );
        Ok(widths)
    }
}
