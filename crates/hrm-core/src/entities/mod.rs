//! Entity structs for every business record type.
//!
//! Each entity maps to one table. Structs serialize with camelCase keys (the
//! external representation); the storage column names live in the matching
//! descriptor in `hrm-db`. Every entity has a `*Draft` companion carrying the
//! caller-settable fields for creation.

mod account;
mod audit;
mod company;
mod competitor;
mod faq;
mod job_posting;
mod kpi;
mod kpi_snapshot;
mod organization;
mod selection_step;

pub use account::{Account, NewAccount};
pub use audit::{Actor, AuditEntry};
pub use company::{Company, CompanyDraft};
pub use competitor::{Competitor, CompetitorDraft, HiringProfile};
pub use faq::{Faq, FaqDraft};
pub use job_posting::{JobPosting, JobPostingDraft};
pub use kpi::{Kpi, KpiDraft, PhaseTarget};
pub use kpi_snapshot::{KpiSnapshot, KpiSnapshotDraft};
pub use organization::{OrgMember, Organization, OrganizationDraft};
pub use selection_step::{SelectionStep, SelectionStepDraft};
