use crate::shared::api_client;
use contracts::dashboards::d400_summary::dto::DashboardSummary;
use contracts::shared::api_error::ApiError;

/// `GET /dashboard`
pub async fn get_summary() -> Result<DashboardSummary, ApiError> {
    let raw = api_client::get_json("/dashboard").await?;
    DashboardSummary::from_raw(raw).map_err(ApiError::decode)
}
