//! Seams the analytic crates depend on.

pub mod record_store;

pub use record_store::IRecordStore;
