//! Audit logging
//!
//! Records every create, update and delete with before/after values in an
//! append-only, line-delimited JSON log (`audit.log`).
//!
//! - `AuditEntry`: one operation on one entity
//! - `AuditLogger`: appends entries to the log and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
