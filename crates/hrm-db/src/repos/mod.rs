//! Repositories over the record store.
//!
//! [`generic::Repository`] serves every record type. The other modules add
//! methods to `HrmService` via `impl HrmService` blocks.

pub mod account;
pub mod audit;
pub mod generic;
pub mod kpi_snapshot;

pub use audit::AuditFilter;
pub use generic::Repository;
