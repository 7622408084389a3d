//! Interactive front end for the `stocktake` binary.

pub mod menu;
