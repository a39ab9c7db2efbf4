//! Patch types for entity updates.
//!
//! Each patch has `Option` fields. `None` fields are skipped on serialization,
//! so they never reach the field mapper and never overwrite a column. Nullable
//! columns use `Option<Option<T>>`: `Some(None)` serializes as `null` and
//! clears the column. The serialized patch is also the audit `changes` payload.

mod account;
mod company;
mod competitor;
mod faq;
mod job_posting;
mod kpi;
mod kpi_snapshot;
mod organization;
mod selection_step;

pub use account::{AccountUpdate, AccountUpdateBuilder, REDACTED};
pub use company::{CompanyPatch, CompanyPatchBuilder};
pub use competitor::{CompetitorPatch, CompetitorPatchBuilder};
pub use faq::{FaqPatch, FaqPatchBuilder};
pub use job_posting::{JobPostingPatch, JobPostingPatchBuilder};
pub use kpi::{KpiPatch, KpiPatchBuilder};
pub use kpi_snapshot::{KpiSnapshotPatch, KpiSnapshotPatchBuilder};
pub use organization::{OrganizationPatch, OrganizationPatchBuilder};
pub use selection_step::{SelectionStepPatch, SelectionStepPatchBuilder};
