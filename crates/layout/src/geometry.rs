//! Resolves a nominal table width into a span in points.

use crate::LayoutError;
use std::sync::Arc;
use tablefit_style::Dimension;
use tablefit_traits::PageGeometry;

#[derive(Debug, Clone)]
pub struct SpanResolver {
    geometry: Arc<dyn PageGeometry>,
}

impl SpanResolver {
    pub fn new(geometry: Arc<dyn PageGeometry>) -> Self {
        Self { geometry }
    }

    /// Page width less the left and right margins.
    pub fn printable_width(&self) -> f64 {
        let margins = self.geometry.margins();
        self.geometry.page_width() - margins.left - margins.right
    }

    /// Converts `table_width` into points relative to the printable width.
    pub fn resolve_span(&self, table_width: &Dimension) -> Result<f64, LayoutError> {
        let printable = self.printable_width();
        let span = self.geometry.convert_length(table_width, printable)?;
        if span.is_nan() || span <= 0.0 {
            return Err(LayoutError::EmptySpan(span));
        }
        log::debug!(
            "Resolved table width {} to {:.2}pt (printable {:.2}pt)",
            table_width,
            span,
            printable
        );
        Ok(span)
    }

    /// Converts a fixed length into points, independent of the page.
    pub fn absolute(&self, length: &Dimension) -> Result<f64, LayoutError> {
        Ok(self.geometry.convert_length_absolute(length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablefit_style::{Margins, PageSize};
    use tablefit_traits::{GeometryError, PageSetup};

    fn resolver() -> SpanResolver {
        SpanResolver::new(Arc::new(PageSetup::new(
            PageSize::Custom {
                width: 500.0,
                height: 700.0,
            },
            Margins::x(50.0),
        )))
    }

    #[test]
    fn test_resolve_span_subtracts_margins() {
        let resolver = resolver();
        assert_eq!(resolver.printable_width(), 400.0);
        assert_eq!(resolver.resolve_span(&Dimension::Percent(100.0)).unwrap(), 400.0);
        assert_eq!(resolver.resolve_span(&Dimension::Percent(50.0)).unwrap(), 200.0);
        assert_eq!(resolver.resolve_span(&Dimension::Pt(300.0)).unwrap(), 300.0);
        assert_eq!(resolver.resolve_span(&Dimension::Auto).unwrap(), 400.0);
    }

    #[test]
    fn test_resolve_span_rejects_empty() {
        let resolver = resolver();
        assert!(matches!(
            resolver.resolve_span(&Dimension::Percent(0.0)),
            Err(LayoutError::EmptySpan(_))
        ));
    }

    #[test]
    fn test_absolute_rejects_percentages() {
        let resolver = resolver();
        assert_eq!(resolver.absolute(&Dimension::Pt(20.0)).unwrap(), 20.0);
        assert!(matches!(
            resolver.absolute(&Dimension::Percent(20.0)),
            Err(LayoutError::Geometry(GeometryError::RelativeLength(_)))
        ));
    }
}
