use crate::LayoutError;
use crate::allocation::{ColumnWidths, Fit};
use crate::content::TableContent;
use crate::geometry::SpanResolver;
use crate::measure::{MeasurementAdapter, longest_word};
use tablefit_style::Dimension;

/// Longest-word minimum with proportional expansion.
///
/// Each column first gets the width of its longest word (so no word has to
/// break), as a share of the span. If those shares fit, the leftover is
/// handed out in proportion to how much wider each column's full text is
/// than its longest word. Whatever is still over or under 1 is then spread
/// evenly across all columns.
///
/// When the longest words alone exceed the span the expansion step is
/// skipped and the even offset is negative; the result is flagged
/// `Fit::Overflow` with the requested demand.
pub(crate) fn allocate(
    content: &TableContent,
    measure: &MeasurementAdapter,
    resolver: &SpanResolver,
    table_width: &Dimension,
    pad: &str,
) -> Result<ColumnWidths, LayoutError> {
    let columns = content.column_count();
    let span = resolver.resolve_span(table_width)?;

    let mut word_widths = vec![0.0_f64; columns];
    let mut full_widths = vec![0.0_f64; columns];
    for row in content.rows() {
        for (column, cell) in row.iter().enumerate() {
            let word = measure.measure_padded(pad, &longest_word(&cell.content))?;
            let full = measure.measure_padded(pad, &cell.content)?;
            word_widths[column] = word_widths[column].max(word);
            full_widths[column] = full_widths[column].max(full);
        }
    }

    let mut fractions: Vec<f64> = word_widths.iter().map(|w| w / span).collect();
    let demand: f64 = fractions.iter().sum();

    if demand <= 1.0 {
        let budget = 1.0 - demand;
        // Differences stay in points: only their ratios to the total matter.
        let diffs: Vec<f64> = full_widths
            .iter()
            .zip(&word_widths)
            .map(|(full, word)| full - word)
            .collect();
        let total_diff: f64 = diffs.iter().sum();
        if total_diff != 0.0 {
            for (fraction, diff) in fractions.iter_mut().zip(&diffs) {
                *fraction += diff / total_diff * budget;
            }
        }
    }

    let extra = 1.0 - fractions.iter().sum::<f64>();
    let offset = extra / columns as f64;
    for fraction in &mut fractions {
        *fraction += offset;
    }

    if demand > 1.0 {
        log::warn!(
            "Minimum-content widths need {:.2}% of the table; columns will overflow",
            demand * 100.0
        );
        return Ok(ColumnWidths::new(fractions, Fit::Overflow { demand }));
    }

    log::debug!(
        "Minimum: word demand {:.4}, even offset {:.4} per column",
        demand,
        offset
    );
    Ok(ColumnWidths::from_fractions(fractions))
}
