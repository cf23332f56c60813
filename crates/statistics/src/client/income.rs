use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    abstract_trait::stats::http::IncomeRemoteClientTrait,
    domain::responses::{ApiResponse, IncomeResponse},
    errors::ServiceError,
};
use tracing::{error, info, instrument};

pub struct IncomeHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl IncomeHttpClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IncomeRemoteClientTrait for IncomeHttpClient {
    #[instrument(skip(self), level = "info")]
    async fn get_total_income(&self, user_id: i64) -> Result<f64, ServiceError> {
        let url = format!("{}/income/get/total/{user_id}", self.base_url);

        info!("fetching total income for user {user_id}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("fetch total income failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("income service answered {status} for {url}");
            return Err(ServiceError::Remote(format!(
                "income service answered {status}"
            )));
        }

        let body: ApiResponse<f64> = response.json().await.map_err(|e| {
            error!("decode total income response failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        Ok(body.data)
    }

    #[instrument(skip(self), level = "info")]
    async fn get_incomes_by_date_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<IncomeResponse>, ServiceError> {
        let url = format!("{}/income/get/daterange", self.base_url);

        info!("fetching incomes for user {user_id} in [{start_date}, {end_date}]");

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
                error!("fetch incomes by date range failed: {e:?}");
                ServiceError::Remote(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("income service answered {status} for {url}");
            return Err(ServiceError::Remote(format!(
                "income service answered {status}"
            )));
        }

        let body: ApiResponse<Vec<IncomeResponse>> = response.json().await.map_err(|e| {
            error!("decode income range response failed: {e:?}");
            ServiceError::Remote(e.to_string())
        })?;

        info!("fetched {} incomes", body.data.len());

        Ok(body.data)
    }
}
