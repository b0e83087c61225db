use crate::domain::models::DashboardData;
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardSource: Send + Sync {
    // Everything the dashboard renders, in one snapshot
    async fn load_dashboard(&self) -> Result<DashboardData>;
}
