use crate::LayoutError;
use crate::allocation::ColumnWidths;
use crate::geometry::SpanResolver;
use tablefit_style::Dimension;

/// Gives fixed columns their lengths as shares of the span and splits the
/// remainder evenly over the other columns.
///
/// A column is fixed when it has a positive absolute length. `None`, `auto`
/// and zero lengths leave it flexible.
pub(crate) fn allocate(
    columns: usize,
    resolver: &SpanResolver,
    table_width: &Dimension,
    column_widths: &[Option<Dimension>],
) -> Result<ColumnWidths, LayoutError> {
    if let Some(column) = column_widths
        .iter()
        .enumerate()
        .skip(columns)
        .find_map(|(i, width)| width.is_some().then_some(i))
    {
        return Err(LayoutError::FixedWidthOutOfRange { column, columns });
    }

    let span = resolver.resolve_span(table_width)?;

    let mut fixed: Vec<Option<f64>> = Vec::with_capacity(columns);
    for column in 0..columns {
        let fraction = match column_widths.get(column).copied().flatten() {
            None | Some(Dimension::Auto) => None,
            Some(length) => {
                let points = resolver.absolute(&length)?;
                (points > 0.0).then(|| points / span)
            }
        };
        fixed.push(fraction);
    }

    let flexible = fixed.iter().filter(|f| f.is_none()).count();
    if flexible == 0 {
        return Err(LayoutError::NoFlexibleColumns);
    }
    let fixed_total: f64 = fixed.iter().flatten().sum();
    if fixed_total >= 1.0 {
        return Err(LayoutError::FixedWidthsExceedSpan { total: fixed_total });
    }

    let share = (1.0 - fixed_total) / flexible as f64;
    log::debug!(
        "Evenly: {} fixed columns take {:.4}, {} flexible columns get {:.4} each",
        columns - flexible,
        fixed_total,
        flexible,
        share
    );

    Ok(ColumnWidths::from_fractions(
        fixed.into_iter().map(|f| f.unwrap_or(share)).collect(),
    ))
}
