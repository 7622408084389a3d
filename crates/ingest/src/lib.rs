//! File ingestion for inventory records.
//!
//! Reads delimited files into [`stocktake_inventory::Record`]s, filtering
//! malformed rows at the boundary so only well-formed data reaches the
//! domain layer.

pub mod csv;

pub use self::csv::{IngestError, read_records};
