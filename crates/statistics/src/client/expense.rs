use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    abstract_trait::stats::http::ExpenseRemoteClientTrait,
    domain::responses::{ApiResponse, ExpenseResponse},
    errors::ServiceError,
};
use tracing::{error, info, instrument};

/// Typed client for the expense service's public REST endpoints.
pub struct ExpenseHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExpenseHttpClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ExpenseRemoteClientTrait for ExpenseHttpClient {
    #[instrument(skip(self), level = "info")]
    async fn get_total_expenses(&self, user_id: i64) -> Result<f64, ServiceError> {
        let url = format!("{}/expense/get/total/{user_id}", self.base_url);

        info!("fetching total expenses for user {user_id}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("fetch total expenses failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("expense service answered {status} for {url}");
            return Err(ServiceError::Remote(format!(
                "expense service answered {status}"
            )));
        }

        let body: ApiResponse<f64> = response.json().await.map_err(|e| {
            error!("decode total expenses response failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        Ok(body.data)
    }

    #[instrument(skip(self), level = "info")]
    async fn get_expenses_by_date_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseResponse>, ServiceError> {
        let url = format!("{}/expense/get/daterange", self.base_url);

        info!("fetching expenses for user {user_id} in [{start_date}, {end_date}]");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("userId", user_id.to_string()),
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("fetch expenses by date range failed: {e:?}");
                ServiceError::Remote(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("expense service answered {status} for {url}");
            return Err(ServiceError::Remote(format!(
                "expense service answered {status}"
            )));
        }

        let body: ApiResponse<Vec<ExpenseResponse>> = response.json().await.map_err(|e| {
            error!("decode expense range response failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        info!("fetched {} expenses", body.data.len());

        Ok(body.data)
    }
}
