//! Service layer handing out repositories bound to one database.
//!
//! `HrmService` wraps a shared `HrmDb` and the optional acting user. The
//! account, audit and KPI snapshot queries are implemented as `impl HrmService`
//! blocks under `repos/`.

use std::sync::Arc;

use hrm_config::DatabaseConfig;
use hrm_core::entities::{
    Actor, Company, Competitor, Faq, JobPosting, Kpi, KpiSnapshot, Organization, SelectionStep,
};

use crate::HrmDb;
use crate::error::DatabaseError;
use crate::repos::Repository;
use crate::schema::Entity;

/// Entry point for record, account and audit operations.
///
/// Cheap to clone; clones share the database handle and its write gate.
#[derive(Clone)]
pub struct HrmService {
    db: Arc<HrmDb>,
    actor: Option<Actor>,
}

impl HrmService {
    /// Open a local database (or `":memory:"`) and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(HrmDb::open_local(path).await?))
    }

    /// Open the database described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configuration is inconsistent or the
    /// database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(HrmDb::open(config).await?))
    }

    #[must_use]
    pub fn from_db(db: HrmDb) -> Self {
        Self {
            db: Arc::new(db),
            actor: None,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &HrmDb {
        &self.db
    }

    /// The user recorded in audit entries, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// A handle on the same database that records `actor` in every audit
    /// entry it produces.
    #[must_use]
    pub fn acting_as(&self, actor: Actor) -> Self {
        Self {
            db: Arc::clone(&self.db),
            actor: Some(actor),
        }
    }

    /// Repository for any record type.
    #[must_use]
    pub fn repo<E: Entity>(&self) -> Repository<'_, E> {
        Repository::new(&self.db, self.actor.as_ref())
    }

    #[must_use]
    pub fn companies(&self) -> Repository<'_, Company> {
        self.repo()
    }

    #[must_use]
    pub fn kpis(&self) -> Repository<'_, Kpi> {
        self.repo()
    }

    #[must_use]
    pub fn kpi_snapshots(&self) -> Repository<'_, KpiSnapshot> {
        self.repo()
    }

    #[must_use]
    pub fn job_postings(&self) -> Repository<'_, JobPosting> {
        self.repo()
    }

    #[must_use]
    pub fn organizations(&self) -> Repository<'_, Organization> {
        self.repo()
    }

    #[must_use]
    pub fn competitors(&self) -> Repository<'_, Competitor> {
        self.repo()
    }

    #[must_use]
    pub fn faqs(&self) -> Repository<'_, Faq> {
        self.repo()
    }

    #[must_use]
    pub fn selection_steps(&self) -> Repository<'_, SelectionStep> {
        self.repo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixtures, helpers::test_service};

    #[tokio::test]
    async fn clones_share_the_database() {
        let svc = test_service().await;
        let other = svc.acting_as(Actor::new("u-1"));
        let created = other.faqs().create(&fixtures::faq_draft()).await.unwrap();
        assert!(svc.faqs().get(&created.id).await.unwrap().is_some());
        assert!(svc.actor().is_none());
        assert_eq!(other.actor().map(|a| a.user_id.as_str()), Some("u-1"));
    }

    #[tokio::test]
    async fn interleaved_creates_each_commit_with_their_audit() {
        let svc = test_service().await;
        let draft = |order: i64| hrm_core::entities::FaqDraft {
            display_order: order,
            ..fixtures::faq_draft()
        };
        let (a, b, c, d) = (draft(1), draft(2), draft(3), draft(4));
        let repo = svc.faqs();
        let (ra, rb, rc, rd) = tokio::join!(
            repo.create(&a),
            repo.create(&b),
            repo.create(&c),
            repo.create(&d)
        );
        for result in [ra, rb, rc, rd] {
            result.unwrap();
        }
        assert_eq!(svc.faqs().all().await.unwrap().len(), 4);
        let audit = svc
            .query_audit(&crate::repos::AuditFilter::default())
            .await
            .unwrap();
        assert_eq!(audit.len(), 4);
    }
}
