use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocktake_core::{DomainError, DomainResult, ValueObject};

/// One inventory entry: a parsed row, or the consolidated representative of
/// every row sharing its grouping key.
///
/// Records are created once during ingestion and never mutated; merging two
/// records produces a new one. Quantity is a `u64` - wide enough for any
/// realistic inventory volume, and group sums saturate rather than wrap
/// (see [`Record::merge`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    code: String,
    quantity: u64,
    expiration: String,
}

/// Grouping identity of a record.
///
/// Two records with an equal key are the same logical item and must be
/// merged during consolidation. The code alone is not unique across
/// distinct products, which is why all three fields participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub name: String,
    pub code: String,
    pub expiration: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        quantity: u64,
        expiration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            quantity,
            expiration: expiration.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Expiration date as stored: ISO `yyyy-mm-dd` text when well-formed.
    pub fn expiration(&self) -> &str {
        &self.expiration
    }

    /// Parse the expiration field as an ISO calendar date.
    ///
    /// Ingestion validates dates up front, so a failure here means the
    /// record bypassed it.
    pub fn expiration_date(&self) -> DomainResult<NaiveDate> {
        self.expiration.parse::<NaiveDate>().map_err(|e| {
            DomainError::data_integrity(format!(
                "unparsable expiration {:?}: {e}",
                self.expiration
            ))
        })
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            name: self.name.clone(),
            code: self.code.clone(),
            expiration: self.expiration.clone(),
        }
    }

    /// Combine two records of the same group into a new record carrying the
    /// summed quantity.
    ///
    /// Sums saturate at `u64::MAX` instead of wrapping; saturation is logged
    /// since it loses information.
    pub fn merge(&self, other: &Record) -> Record {
        debug_assert_eq!(self.group_key(), other.group_key());

        let quantity = self.quantity.checked_add(other.quantity).unwrap_or_else(|| {
            tracing::warn!(
                name = %self.name,
                code = %self.code,
                "quantity sum exceeds u64::MAX, saturating"
            );
            u64::MAX
        });

        Record {
            name: self.name.clone(),
            code: self.code.clone(),
            quantity,
            expiration: self.expiration.clone(),
        }
    }
}

impl ValueObject for Record {}
