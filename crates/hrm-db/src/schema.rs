//! Entity-type descriptors.
//!
//! Each entity type has one static [`Descriptor`]: its table and the explicit
//! external-name ↔ column mapping of every field, tagged with a [`FieldKind`].
//! The generic repository is instantiated per entity through the [`Entity`]
//! trait, so adding an entity type means adding a struct, a patch type and a
//! descriptor here. No repository code changes.

use serde::Serialize;
use serde::de::DeserializeOwned;

use hrm_core::entities::{
    Company, CompanyDraft, Competitor, CompetitorDraft, Faq, FaqDraft, JobPosting,
    JobPostingDraft, Kpi, KpiDraft, KpiSnapshot, KpiSnapshotDraft, Organization,
    OrganizationDraft, SelectionStep, SelectionStepDraft,
};
use hrm_core::enums::EntityType;

use crate::helpers::entity_type_to_table;
use crate::updates::{
    CompanyPatch, CompetitorPatch, FaqPatch, JobPostingPatch, KpiPatch, KpiSnapshotPatch,
    OrganizationPatch, SelectionStepPatch,
};

/// How a field is stored and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
    /// Stored as INTEGER 0/1, decoded back to a JSON boolean.
    Boolean,
    /// Array or nested object, stored as JSON text.
    Structured,
}

impl FieldKind {
    /// SQL column type used in migrations.
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Text | Self::Structured => "TEXT",
            Self::Integer | Self::Boolean => "INTEGER",
            Self::Real => "REAL",
        }
    }
}

/// One entry of an entity's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// External (camelCase) name.
    pub name: &'static str,
    /// Storage (snake_case) column name.
    pub column: &'static str,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }

    const fn text(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Text)
    }

    const fn integer(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Integer)
    }

    const fn real(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Real)
    }

    const fn boolean(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Boolean)
    }

    const fn structured(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Structured)
    }
}

pub const ID: Field = Field::text("id", "id");
pub const CREATED_AT: Field = Field::text("createdAt", "created_at");
pub const UPDATED_AT: Field = Field::text("updatedAt", "updated_at");
const COMPANY_ID: Field = Field::text("companyId", "company_id");

/// Static description of one entity type.
#[derive(Debug)]
pub struct Descriptor {
    pub entity_type: EntityType,
    pub table: &'static str,
    /// Every field, `id` first. Column order in SELECTs follows this order.
    pub fields: &'static [Field],
}

impl Descriptor {
    /// Look up a field by its external name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by its column name.
    #[must_use]
    pub fn field_by_column(&self, column: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// Comma-separated column list in descriptor order.
    #[must_use]
    pub fn column_list(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.column)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// External names of the structured fields.
    pub fn structured_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Structured)
            .map(|f| f.name)
    }
}

/// A record type managed by the generic repository.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Caller-supplied fields on create.
    type Draft: Serialize + Send + Sync;
    /// Caller-supplied fields on update. Absent keys leave columns untouched.
    type Patch: Serialize + Send + Sync;

    const DESCRIPTOR: &'static Descriptor;
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

pub const COMPANY: Descriptor = Descriptor {
    entity_type: EntityType::Company,
    table: entity_type_to_table(EntityType::Company),
    fields: &[
        ID,
        Field::text("name", "name"),
        Field::text("industry", "industry"),
        Field::integer("employeeCount", "employee_count"),
        Field::structured("locations", "locations"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const KPI: Descriptor = Descriptor {
    entity_type: EntityType::Kpi,
    table: entity_type_to_table(EntityType::Kpi),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("name", "name"),
        Field::text("periodStart", "period_start"),
        Field::text("periodEnd", "period_end"),
        Field::structured("phaseData", "phase_data"),
        Field::text("notes", "notes"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const KPI_SNAPSHOT: Descriptor = Descriptor {
    entity_type: EntityType::KpiSnapshot,
    table: entity_type_to_table(EntityType::KpiSnapshot),
    fields: &[
        ID,
        Field::text("kpiId", "kpi_id"),
        Field::text("snapshotDate", "snapshot_date"),
        Field::structured("phaseData", "phase_data"),
        Field::real("achievementRate", "achievement_rate"),
        Field::text("comment", "comment"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const JOB_POSTING: Descriptor = Descriptor {
    entity_type: EntityType::JobPosting,
    table: entity_type_to_table(EntityType::JobPosting),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("title", "title"),
        Field::text("department", "department"),
        Field::text("employmentType", "employment_type"),
        Field::text("location", "location"),
        Field::integer("salaryMin", "salary_min"),
        Field::integer("salaryMax", "salary_max"),
        Field::structured("requirements", "requirements"),
        Field::structured("benefits", "benefits"),
        Field::boolean("isPublished", "is_published"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const ORGANIZATION: Descriptor = Descriptor {
    entity_type: EntityType::Organization,
    table: entity_type_to_table(EntityType::Organization),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("name", "name"),
        Field::text("parentId", "parent_id"),
        Field::integer("headCount", "head_count"),
        Field::structured("members", "members"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const COMPETITOR: Descriptor = Descriptor {
    entity_type: EntityType::Competitor,
    table: entity_type_to_table(EntityType::Competitor),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("name", "name"),
        Field::text("website", "website"),
        Field::structured("strengths", "strengths"),
        Field::structured("weaknesses", "weaknesses"),
        Field::structured("hiringProfile", "hiring_profile"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const FAQ: Descriptor = Descriptor {
    entity_type: EntityType::Faq,
    table: entity_type_to_table(EntityType::Faq),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("question", "question"),
        Field::text("answer", "answer"),
        Field::text("category", "category"),
        Field::integer("displayOrder", "display_order"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

pub const SELECTION_STEP: Descriptor = Descriptor {
    entity_type: EntityType::SelectionStep,
    table: entity_type_to_table(EntityType::SelectionStep),
    fields: &[
        ID,
        COMPANY_ID,
        Field::text("name", "name"),
        Field::integer("stepOrder", "step_order"),
        Field::text("description", "description"),
        Field::structured("evaluationCriteria", "evaluation_criteria"),
        Field::integer("durationMinutes", "duration_minutes"),
        CREATED_AT,
        UPDATED_AT,
    ],
};

/// Every descriptor managed by the generic repository.
pub const ALL_DESCRIPTORS: [&Descriptor; 8] = [
    &COMPANY,
    &KPI,
    &KPI_SNAPSHOT,
    &JOB_POSTING,
    &ORGANIZATION,
    &COMPETITOR,
    &FAQ,
    &SELECTION_STEP,
];

impl Entity for Company {
    type Draft = CompanyDraft;
    type Patch = CompanyPatch;
    const DESCRIPTOR: &'static Descriptor = &COMPANY;
}

impl Entity for Kpi {
    type Draft = KpiDraft;
    type Patch = KpiPatch;
    const DESCRIPTOR: &'static Descriptor = &KPI;
}

impl Entity for KpiSnapshot {
    type Draft = KpiSnapshotDraft;
    type Patch = KpiSnapshotPatch;
    const DESCRIPTOR: &'static Descriptor = &KPI_SNAPSHOT;
}

impl Entity for JobPosting {
    type Draft = JobPostingDraft;
    type Patch = JobPostingPatch;
    const DESCRIPTOR: &'static Descriptor = &JOB_POSTING;
}

impl Entity for Organization {
    type Draft = OrganizationDraft;
    type Patch = OrganizationPatch;
    const DESCRIPTOR: &'static Descriptor = &ORGANIZATION;
}

impl Entity for Competitor {
    type Draft = CompetitorDraft;
    type Patch = CompetitorPatch;
    const DESCRIPTOR: &'static Descriptor = &COMPETITOR;
}

impl Entity for Faq {
    type Draft = FaqDraft;
    type Patch = FaqPatch;
    const DESCRIPTOR: &'static Descriptor = &FAQ;
}

impl Entity for SelectionStep {
    type Draft = SelectionStepDraft;
    type Patch = SelectionStepPatch;
    const DESCRIPTOR: &'static Descriptor = &SELECTION_STEP;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::fixtures;

    fn keys_of<T: Serialize>(value: &T) -> BTreeSet<String> {
        serde_json::to_value(value)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    fn names_of(descriptor: &Descriptor) -> BTreeSet<String> {
        descriptor.fields.iter().map(|f| f.name.to_string()).collect()
    }

    /// Every serialized key of every entity must have a descriptor entry, and
    /// the reverse. Catches drift between struct and field table.
    #[test]
    fn descriptors_match_entity_shapes() {
        assert_eq!(keys_of(&fixtures::company()), names_of(&COMPANY));
        assert_eq!(keys_of(&fixtures::kpi()), names_of(&KPI));
        assert_eq!(keys_of(&fixtures::kpi_snapshot()), names_of(&KPI_SNAPSHOT));
        assert_eq!(keys_of(&fixtures::job_posting()), names_of(&JOB_POSTING));
        assert_eq!(keys_of(&fixtures::organization()), names_of(&ORGANIZATION));
        assert_eq!(keys_of(&fixtures::competitor()), names_of(&COMPETITOR));
        assert_eq!(keys_of(&fixtures::faq()), names_of(&FAQ));
        assert_eq!(keys_of(&fixtures::selection_step()), names_of(&SELECTION_STEP));
    }

    #[test]
    fn descriptors_start_with_id_and_carry_timestamps() {
        for descriptor in ALL_DESCRIPTORS {
            assert_eq!(descriptor.fields[0], ID, "{}", descriptor.table);
            assert!(descriptor.field("createdAt").is_some());
            assert!(descriptor.field("updatedAt").is_some());
        }
    }

    #[test]
    fn columns_are_unique_per_descriptor() {
        for descriptor in ALL_DESCRIPTORS {
            let columns: BTreeSet<_> = descriptor.fields.iter().map(|f| f.column).collect();
            assert_eq!(columns.len(), descriptor.fields.len(), "{}", descriptor.table);
        }
    }

    #[test]
    fn structured_field_lists() {
        assert_eq!(KPI.structured_fields().collect::<Vec<_>>(), vec!["phaseData"]);
        assert_eq!(
            COMPETITOR.structured_fields().collect::<Vec<_>>(),
            vec!["strengths", "weaknesses", "hiringProfile"]
        );
        assert_eq!(FAQ.structured_fields().count(), 0);
    }

    #[test]
    fn field_lookup_both_directions() {
        let field = KPI.field("periodStart").unwrap();
        assert_eq!(field.column, "period_start");
        assert_eq!(KPI.field_by_column("period_start"), Some(field));
        assert!(KPI.field("period_start").is_none());
    }
}
