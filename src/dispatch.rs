//! Evaluation of the report scaffold in Rust
//!
//! [`evaluate`] computes what the generated `REPORT_ERRORS` expansion reports
//! for a given parser state: the same guarded slots, the same trial order, the
//! same terminal check. It lets the dispatch semantics be tested without a C++
//! compiler.

use serde::Serialize;

use crate::catalog::{Catalog, MarkerType, Ordinal, SlotBudget};
use crate::error::DispatchError;

/// One warning recorded by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: Ordinal,
    pub row: i32,
    pub col: i32,
}

impl Warning {
    pub fn new(kind: Ordinal, row: i32, col: i32) -> Self {
        Self { kind, row, col }
    }
}

/// The parser's single hard-error record. `-1` coordinates mean "no error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    pub kind: Ordinal,
    pub row: i32,
    pub col: i32,
}

impl ErrorState {
    pub fn none() -> Self {
        Self {
            kind: Ordinal::SENTINEL,
            row: -1,
            col: -1,
        }
    }

    pub fn at(kind: Ordinal, row: i32, col: i32) -> Self {
        Self { kind, row, col }
    }

    /// Both coordinates must be non-negative
    pub fn is_error(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }
}

impl Default for ErrorState {
    fn default() -> Self {
        Self::none()
    }
}

/// A warning matched by one dispatch slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningReport<'a> {
    pub slot: usize,
    pub row: i32,
    pub col: i32,
    pub marker: MarkerType<'a>,
}

/// The hard-error binding built by the terminal check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor<'a> {
    pub row: i32,
    pub col: i32,
    pub marker: MarkerType<'a>,
}

/// Everything one expansion of the report macro yields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report<'a> {
    pub warnings: Vec<WarningReport<'a>>,
    pub error: Option<ErrorDescriptor<'a>>,
    /// Recorded warnings beyond the slot budget
    pub unaddressed: usize,
}

/// Evaluate the scaffold generated for `catalog` and `budget`.
///
/// Slot `i` is active only when `i < warnings.len()`. Inside it the trials run
/// in catalog order and the first matching ordinal wins; a warning whose kind is
/// the sentinel or lies outside the catalog matches no trial. The hard error is
/// resolved through the ordinal mapping, which fails for an unmapped ordinal
/// just as the C++ header would fail to compile.
pub fn evaluate<'a>(
    catalog: &'a Catalog,
    budget: SlotBudget,
    warnings: &[Warning],
    error: &ErrorState,
) -> Result<Report<'a>, DispatchError> {
    let mut report = Report {
        unaddressed: warnings.len().saturating_sub(budget.get()),
        ..Report::default()
    };

    for slot in budget.slots() {
        let Some(w) = warnings.get(slot) else {
            break;
        };
        let matched = catalog
            .ordered_kinds()
            .find(|(ordinal, _)| *ordinal == w.kind);
        if let Some((_, kind)) = matched {
            report.warnings.push(WarningReport {
                slot,
                row: w.row,
                col: w.col,
                marker: MarkerType::Kind(kind),
            });
        }
    }

    if error.is_error() {
        let marker = catalog
            .marker(error.kind)
            .ok_or(DispatchError::UnmappedOrdinal { ordinal: error.kind })?;
        report.error = Some(ErrorDescriptor {
            row: error.row,
            col: error.col,
            marker,
        });
    }

    Ok(report)
}
