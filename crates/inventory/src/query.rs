//! Shortage and expiry queries over the consolidated record set.

use chrono::NaiveDate;
use tracing::warn;

use stocktake_core::{DomainError, DomainResult};

use crate::record::Record;

/// Read-only queries over the consolidated record sequence.
///
/// Owns the records for the lifetime of the run. Both queries are pure
/// functions of the stored sequence and their parameter - no state is
/// retained between invocations, so they may be called repeatedly in any
/// order. Nothing writes after construction, so a future concurrent caller
/// could share this freely.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Vec<Record>,
}

impl QueryEngine {
    /// Build an engine over an already-consolidated record sequence.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records with `quantity` strictly below `threshold`, ascending by name.
    ///
    /// A negative threshold is rejected and the query is not executed. A
    /// threshold of zero matches nothing, since quantities are non-negative.
    pub fn below_quantity(&self, threshold: i64) -> DomainResult<Vec<Record>> {
        if threshold < 0 {
            return Err(DomainError::invalid_input(
                "quantity threshold should be a natural number",
            ));
        }
        let threshold = threshold as u64;

        let matched = self
            .records
            .iter()
            .filter(|record| record.quantity() < threshold)
            .cloned()
            .collect();
        Ok(sorted_by_name(matched))
    }

    /// Records expiring strictly before `cutoff`, ascending by name.
    ///
    /// `cutoff` must be an ISO `yyyy-mm-dd` date; anything else is rejected
    /// and the query is not executed. A stored record whose own expiration
    /// fails to parse is excluded from the comparison and logged - ingestion
    /// validates dates upstream, so that points at a bug rather than at the
    /// user.
    pub fn before_date(&self, cutoff: &str) -> DomainResult<Vec<Record>> {
        let cutoff: NaiveDate = cutoff.parse().map_err(|_| {
            DomainError::invalid_input(format!(
                "expiration date should be [yyyy-mm-dd], got {cutoff:?}"
            ))
        })?;

        let mut matched = Vec::new();
        for record in &self.records {
            match record.expiration_date() {
                Ok(expiration) if expiration < cutoff => matched.push(record.clone()),
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        name = %record.name(),
                        code = %record.code(),
                        %err,
                        "excluding record from expiry comparison"
                    );
                }
            }
        }
        Ok(sorted_by_name(matched))
    }
}

// Byte-wise ascending comparison, deterministic across locales. `sort_by`
// is stable, which supplies the tie rule: equal names keep stored order.
fn sorted_by_name(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| a.name().cmp(b.name()));
    records
}
