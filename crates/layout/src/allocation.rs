//! The result of a width allocation.

/// How far a valid allocation's fractions may drift from a sum of 1.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Whether an allocation fits its span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fit {
    /// Fractions sum to 1 and no column was starved to make them fit.
    Exact,
    /// Columns need more than the whole span. `demand` is the share they asked for.
    ///
    /// The fractions may still sum to 1, with some columns narrower than their content.
    Overflow { demand: f64 },
    /// Fractions sum to `total`, less than 1; the table will not fill its span.
    Underfill { total: f64 },
}

impl Fit {
    /// Classifies a sum of fractions.
    pub fn from_total(total: f64) -> Self {
        if (total - 1.0).abs() <= SUM_TOLERANCE {
            Fit::Exact
        } else if total > 1.0 {
            Fit::Overflow { demand: total }
        } else {
            Fit::Underfill { total }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Fit::Exact)
    }
}

/// Per-column shares of the table span, indexed by column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidths {
    fractions: Vec<f64>,
    fit: Fit,
}

impl ColumnWidths {
    pub fn new(fractions: Vec<f64>, fit: Fit) -> Self {
        Self { fractions, fit }
    }

    /// Wraps `fractions`, deriving the fit from their sum.
    pub fn from_fractions(fractions: Vec<f64>) -> Self {
        let fit = Fit::from_total(fractions.iter().sum());
        Self::new(fractions, fit)
    }

    pub fn get(&self, column: usize) -> Option<f64> {
        self.fractions.get(column).copied()
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Sum of all fractions.
    pub fn total(&self) -> f64 {
        self.fractions.iter().sum()
    }

    pub fn fit(&self) -> Fit {
        self.fit
    }

    pub fn is_exact(&self) -> bool {
        self.fit.is_exact()
    }

    /// Column shares as percentages, in column order.
    pub fn percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.fractions.iter().map(|f| f * 100.0)
    }
}
