//! Admin dashboard KPIs

use async_trait::async_trait;

use super::DashboardApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::Kpi;

#[derive(Clone)]
pub struct DashboardService {
    client: ApiClient,
}

impl DashboardService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl DashboardApi for DashboardService {
    async fn kpis(&self) -> ApiResult<Kpi> {
        self.client.get("/admin/dashboard/kpis").await
    }
}
