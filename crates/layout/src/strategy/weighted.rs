use crate::LayoutError;
use crate::allocation::ColumnWidths;
use crate::content::TableContent;
use crate::measure::MeasurementAdapter;

fn count_bound(floor_bound: &[bool]) -> usize {
    floor_bound.iter().filter(|bound| **bound).count()
}

/// Average row share with a minimum floor.
///
/// Every row (header included) contributes each cell's share of that row's
/// total width; rows of zero total width are skipped. A column whose average
/// share is under `min_percent` is raised to it, and the total shortfall is
/// taken evenly from the remaining columns. Columns that would drop under the
/// floor by paying their part stop paying, but this check runs once: the
/// larger part the others then pay is not checked again.
///
/// When every column ends up on the floor nothing is redistributed and the
/// result is flagged by its total.
pub(crate) fn allocate(
    content: &TableContent,
    measure: &MeasurementAdapter,
    min_percent: f64,
) -> Result<ColumnWidths, LayoutError> {
    let columns = content.column_count();
    let floor = min_percent / 100.0;

    let mut share_sums = vec![0.0_f64; columns];
    let mut contributing_rows = 0_usize;
    for (index, row) in content.rows().enumerate() {
        let widths = row
            .iter()
            .map(|cell| measure.measure(&cell.content))
            .collect::<Result<Vec<f64>, _>>()?;
        let row_total: f64 = widths.iter().sum();
        if row_total == 0.0 {
            log::debug!("Weighted: skipping row {} with no measurable content", index);
            continue;
        }
        contributing_rows += 1;
        for (sum, width) in share_sums.iter_mut().zip(&widths) {
            *sum += width / row_total;
        }
    }

    let mut fractions = Vec::with_capacity(columns);
    let mut floor_bound = vec![false; columns];
    let mut adjustment = 0.0;
    for (column, share_sum) in share_sums.iter().enumerate() {
        let average = if contributing_rows == 0 {
            0.0
        } else {
            share_sum / contributing_rows as f64
        };
        if average < floor {
            fractions.push(floor);
            adjustment += floor - average;
            floor_bound[column] = true;
        } else {
            fractions.push(average);
        }
    }

    if adjustment > 0.0 && count_bound(&floor_bound) != columns {
        let portion = adjustment / (columns - count_bound(&floor_bound)) as f64;
        for (bound, fraction) in floor_bound.iter_mut().zip(&fractions) {
            if !*bound && fraction - portion < floor {
                *bound = true;
            }
        }
    }

    if adjustment > 0.0 && count_bound(&floor_bound) != columns {
        let portion = adjustment / (columns - count_bound(&floor_bound)) as f64;
        for (fraction, bound) in fractions.iter_mut().zip(&floor_bound) {
            if !bound {
                *fraction -= portion;
            }
        }
    }

    log::debug!(
        "Weighted: {} of {} rows contributed, {} columns floor-bound, adjustment {:.4}",
        contributing_rows,
        content.body().len() + 1,
        count_bound(&floor_bound),
        adjustment
    );

    let widths = ColumnWidths::from_fractions(fractions);
    if !widths.is_exact() {
        log::warn!(
            "Weighted widths sum to {:.2}% with a {:.2}% floor per column",
            widths.total() * 100.0,
            min_percent
        );
    }
    Ok(widths)
}
