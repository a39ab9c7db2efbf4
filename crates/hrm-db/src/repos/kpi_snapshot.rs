//! KPI snapshot queries beyond plain CRUD.

use hrm_core::entities::KpiSnapshot;
use serde_json::Value;

use crate::error::DatabaseError;
use crate::service::HrmService;

impl HrmService {
    /// Snapshots recorded against one KPI, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn snapshots_for_kpi(&self, kpi_id: &str) -> Result<Vec<KpiSnapshot>, DatabaseError> {
        self.kpi_snapshots()
            .find_by("kpiId", &Value::String(kpi_id.to_string()))
            .await
    }
}
