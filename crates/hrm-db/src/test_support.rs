//! Shared test utilities for hrm-db unit tests.

pub(crate) mod helpers {
    use crate::HrmDb;
    use crate::service::HrmService;

    /// Create an in-memory `HrmService` with no acting user.
    pub async fn test_service() -> HrmService {
        let db = HrmDb::open_local(":memory:").await.unwrap();
        HrmService::from_db(db)
    }
}

/// Sample drafts and fully-populated entities.
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use hrm_core::entities::{
        Company, CompanyDraft, Competitor, CompetitorDraft, Faq, FaqDraft, HiringProfile,
        JobPosting, JobPostingDraft, Kpi, KpiDraft, KpiSnapshot, KpiSnapshotDraft, OrgMember,
        Organization, OrganizationDraft, PhaseTarget, SelectionStep, SelectionStepDraft,
    };
    use hrm_core::structured::Structured;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    fn phases() -> Vec<PhaseTarget> {
        vec![
            PhaseTarget::new("Application", 100),
            PhaseTarget::new("Interview", 20),
            PhaseTarget::new("Offer", 5),
        ]
    }

    pub fn company_draft() -> CompanyDraft {
        CompanyDraft {
            name: "Acme Recruiting".into(),
            industry: Some("Staffing".into()),
            employee_count: Some(120),
            locations: vec!["Tokyo".to_string(), "Osaka".to_string()].into(),
        }
    }

    pub fn kpi_draft() -> KpiDraft {
        KpiDraft {
            company_id: None,
            name: Some("Q1 hiring".into()),
            period_start: "2024-01-01".into(),
            period_end: "2024-03-31".into(),
            phase_data: phases().into(),
            notes: None,
        }
    }

    pub fn kpi_snapshot_draft() -> KpiSnapshotDraft {
        KpiSnapshotDraft {
            kpi_id: "kpi-1".into(),
            snapshot_date: "2024-01-31".into(),
            phase_data: vec![PhaseTarget::new("Application", 100).with_actual(42)].into(),
            achievement_rate: Some(0.42),
            comment: Some("slow start".into()),
        }
    }

    pub fn job_posting_draft() -> JobPostingDraft {
        JobPostingDraft {
            company_id: None,
            title: "Backend Engineer".into(),
            department: Some("Platform".into()),
            employment_type: Some("full_time".into()),
            location: Some("Tokyo".into()),
            salary_min: Some(6_000_000),
            salary_max: Some(9_000_000),
            requirements: vec!["Rust".to_string(), "SQL".to_string()].into(),
            benefits: vec!["Remote".to_string()].into(),
            is_published: true,
        }
    }

    pub fn organization_draft() -> OrganizationDraft {
        OrganizationDraft {
            company_id: None,
            name: "Talent Acquisition".into(),
            parent_id: None,
            head_count: Some(2),
            members: vec![
                OrgMember {
                    name: "Ren".into(),
                    role: "Lead".into(),
                    email: Some("ren@example.com".into()),
                },
                OrgMember {
                    name: "Yui".into(),
                    role: "Recruiter".into(),
                    email: None,
                },
            ]
            .into(),
        }
    }

    pub fn competitor_draft() -> CompetitorDraft {
        CompetitorDraft {
            company_id: None,
            name: "Rival Staffing".into(),
            website: Some("https://rival.example.com".into()),
            strengths: vec!["Brand".to_string()].into(),
            weaknesses: Structured::Parsed(vec![]),
            hiring_profile: Some(
                HiringProfile {
                    average_salary: Some(7_500_000),
                    open_positions: Some(12),
                    channels: vec!["referral".into(), "job board".into()],
                }
                .into(),
            ),
        }
    }

    pub fn faq_draft() -> FaqDraft {
        FaqDraft {
            company_id: None,
            question: "Is remote work allowed?".into(),
            answer: "Two days a week.".into(),
            category: Some("work style".into()),
            display_order: 1,
        }
    }

    pub fn selection_step_draft() -> SelectionStepDraft {
        SelectionStepDraft {
            company_id: None,
            name: "Technical interview".into(),
            step_order: 2,
            description: None,
            evaluation_criteria: vec!["Problem solving".to_string()].into(),
            duration_minutes: Some(60),
        }
    }

    pub fn company() -> Company {
        let d = company_draft();
        Company {
            id: "c-1".into(),
            name: d.name,
            industry: d.industry,
            employee_count: d.employee_count,
            locations: d.locations,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn kpi() -> Kpi {
        let d = kpi_draft();
        Kpi {
            id: "k-1".into(),
            company_id: Some("c-1".into()),
            name: d.name,
            period_start: d.period_start,
            period_end: d.period_end,
            phase_data: d.phase_data,
            notes: Some("baseline".into()),
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn kpi_snapshot() -> KpiSnapshot {
        let d = kpi_snapshot_draft();
        KpiSnapshot {
            id: "s-1".into(),
            kpi_id: d.kpi_id,
            snapshot_date: d.snapshot_date,
            phase_data: d.phase_data,
            achievement_rate: d.achievement_rate,
            comment: d.comment,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn job_posting() -> JobPosting {
        let d = job_posting_draft();
        JobPosting {
            id: "j-1".into(),
            company_id: Some("c-1".into()),
            title: d.title,
            department: d.department,
            employment_type: d.employment_type,
            location: d.location,
            salary_min: d.salary_min,
            salary_max: d.salary_max,
            requirements: d.requirements,
            benefits: d.benefits,
            is_published: d.is_published,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn organization() -> Organization {
        let d = organization_draft();
        Organization {
            id: "o-1".into(),
            company_id: Some("c-1".into()),
            name: d.name,
            parent_id: None,
            head_count: d.head_count,
            members: d.members,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn competitor() -> Competitor {
        let d = competitor_draft();
        Competitor {
            id: "r-1".into(),
            company_id: Some("c-1".into()),
            name: d.name,
            website: d.website,
            strengths: d.strengths,
            weaknesses: d.weaknesses,
            hiring_profile: d.hiring_profile,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn faq() -> Faq {
        let d = faq_draft();
        Faq {
            id: "f-1".into(),
            company_id: Some("c-1".into()),
            question: d.question,
            answer: d.answer,
            category: d.category,
            display_order: d.display_order,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn selection_step() -> SelectionStep {
        let d = selection_step_draft();
        SelectionStep {
            id: "st-1".into(),
            company_id: Some("c-1".into()),
            name: d.name,
            step_order: d.step_order,
            description: d.description,
            evaluation_criteria: d.evaluation_criteria,
            duration_minutes: d.duration_minutes,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::helpers::test_service;

    /// Every draft fixture must be accepted by its table.
    #[tokio::test]
    async fn every_draft_fixture_inserts() {
        let svc = test_service().await;
        svc.companies().create(&fixtures::company_draft()).await.unwrap();
        svc.kpis().create(&fixtures::kpi_draft()).await.unwrap();
        svc.kpi_snapshots()
            .create(&fixtures::kpi_snapshot_draft())
            .await
            .unwrap();
        svc.job_postings()
            .create(&fixtures::job_posting_draft())
            .await
            .unwrap();
        svc.organizations()
            .create(&fixtures::organization_draft())
            .await
            .unwrap();
        svc.competitors()
            .create(&fixtures::competitor_draft())
            .await
            .unwrap();
        svc.faqs().create(&fixtures::faq_draft()).await.unwrap();
        svc.selection_steps()
            .create(&fixtures::selection_step_draft())
            .await
            .unwrap();
    }
}
