use crate::{DEFAULT_CLASS_PREFIX, column_class};
use tablefit_layout::ColumnWidths;

/// Writes `.{prefix}{i} { width: P% }` rules for an allocation.
#[derive(Debug, Clone)]
pub struct CssEmitter {
    prefix: String,
}

impl Default for CssEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

impl CssEmitter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// One newline-terminated rule per column, in column order, percentages to two decimals.
    pub fn render(&self, widths: &ColumnWidths) -> String {
        if !widths.is_exact() {
            log::warn!(
                "Emitting CSS for widths that sum to {:.2}% ({:?})",
                widths.total() * 100.0,
                widths.fit()
            );
        }
        widths
            .percentages()
            .enumerate()
            .map(|(column, percent)| {
                format!(
                    ".{} {{ width: {:.2}% }}\n",
                    column_class(&self.prefix, column),
                    percent
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablefit_layout::Fit;

    #[test]
    fn test_render_rules_in_column_order() {
        let widths = ColumnWidths::from_fractions(vec![0.125, 0.5, 0.375]);
        let css = CssEmitter::new("c").render(&widths);
        assert_eq!(
            css,
            ".c0 { width: 12.50% }\n.c1 { width: 50.00% }\n.c2 { width: 37.50% }\n"
        );
    }

    #[test]
    fn test_render_rounds_to_two_decimals() {
        let widths = ColumnWidths::from_fractions(vec![1.0 / 3.0, 2.0 / 3.0]);
        let css = CssEmitter::default().render(&widths);
        assert_eq!(css, ".col0 { width: 33.33% }\n.col1 { width: 66.67% }\n");
    }

    #[test]
    fn test_render_inexact_widths_unchanged() {
        let widths = ColumnWidths::new(vec![0.7, 0.7], Fit::Overflow { demand: 1.4 });
        let css = CssEmitter::default().render(&widths);
        assert_eq!(css.lines().count(), 2);
        assert!(css.contains("width: 70.00%"));
    }
}
