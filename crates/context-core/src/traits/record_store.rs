use crate::errors::ContextResult;
use crate::measurement::Measurement;

/// Ordered, append-only collection of measurements.
///
/// No update or delete. Readers always see a prefix of committed records;
/// a single append is all-or-nothing.
pub trait IRecordStore: Send + Sync {
    /// Every record whose `subject` equals `subject` exactly, in log order.
    fn load(&self, subject: &str) -> ContextResult<Vec<Measurement>>;

    /// Every record, in log order.
    fn load_all(&self) -> ContextResult<Vec<Measurement>>;

    /// Add one record at the end of the log.
    fn append(&self, measurement: &Measurement) -> ContextResult<()>;
}
