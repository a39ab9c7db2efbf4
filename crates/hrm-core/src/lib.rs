//! # hrm-core
//!
//! Core types shared across the HR records workspace:
//! - Entity structs and their create drafts (KPIs, job postings, org charts, ...)
//! - Entity type, audit action and account kind enums
//! - Sortable timestamp serde adapter
//! - `Structured<T>` for array / object fields stored as text
//! - Serde helper distinguishing absent from `null` in patches
//! - Cross-cutting error type

pub mod entities;
pub mod enums;
pub mod errors;
pub mod nullable;
pub mod structured;
pub mod timestamp;
