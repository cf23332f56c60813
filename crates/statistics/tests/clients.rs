use serde_json::json;
use shared::{
    abstract_trait::stats::{
        http::{DynExpenseRemoteClient, DynIncomeRemoteClient, ExpenseRemoteClientTrait},
        repository::{DynStatsRepository, StatsRepositoryTrait},
        service::StatsServiceTrait,
    },
    domain::requests::UpsertStatsRequest,
    errors::{RepositoryError, ServiceError},
    model::stats::StatsModel,
    service::stats::StatsService,
};
use statistics::client::{ExpenseHttpClient, IncomeHttpClient};
use std::sync::{Arc, Mutex};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn expense_body(title: &str, amount: f64, date: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "title": title,
        "description": null,
        "category": "Groceries",
        "amount": amount,
        "date": date,
        "userId": 1
    })
}

#[tokio::test]
async fn total_unwraps_the_response_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expense/get/total/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Total expenses retrieved successfully",
            "data": 135.5
        })))
        .mount(&server)
        .await;

    let client = ExpenseHttpClient::new(reqwest::Client::new(), server.uri());

    let total = client.get_total_expenses(1).await.unwrap();
    assert_eq!(total, 135.5);
}

#[tokio::test]
async fn non_success_status_surfaces_as_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expense/get/total/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "Expense Not Found"
        })))
        .mount(&server)
        .await;

    let client = ExpenseHttpClient::new(reqwest::Client::new(), server.uri());

    let err = client.get_total_expenses(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::Remote(_)));
}

#[tokio::test]
async fn date_range_query_uses_iso_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expense/get/daterange"))
        .and(query_param("userId", "1"))
        .and(query_param("startDate", "2025-06-01"))
        .and(query_param("endDate", "2025-07-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Expenses retrieved successfully",
            "data": [expense_body("Rent", 800.0, "2025-06-02")]
        })))
        .mount(&server)
        .await;

    let client = ExpenseHttpClient::new(reqwest::Client::new(), server.uri());

    let records = client
        .get_expenses_by_date_range(1, "2025-06-01".parse().unwrap(), "2025-07-01".parse().unwrap())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Rent");
    assert_eq!(records[0].amount, 800.0);
}

#[derive(Default)]
struct NoopSnapshotRepository {
    rows: Mutex<Vec<StatsModel>>,
}

#[async_trait::async_trait]
impl StatsRepositoryTrait for NoopSnapshotRepository {
    async fn upsert(&self, req: &UpsertStatsRequest) -> Result<StatsModel, RepositoryError> {
        let snapshot = StatsModel {
            stats_id: 1,
            user_id: req.user_id,
            total_income: req.total_income,
            total_expense: req.total_expense,
            balance: req.balance,
        };
        self.rows.lock().unwrap().push(snapshot.clone());
        Ok(snapshot)
    }
}

/// Drives the whole chart-data flow over the wire: a dead expense peer
/// degrades to an empty series while the income series still fills in.
#[tokio::test]
async fn chart_data_degrades_when_the_expense_peer_is_down() {
    let income_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/income/get/daterange"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Incomes retrieved successfully",
            "data": [{
                "id": 7,
                "title": "Salary",
                "description": null,
                "category": "Salary",
                "amount": 3000.0,
                "date": "2025-06-01",
                "userId": 1
            }]
        })))
        .mount(&income_server)
        .await;

    // No expense server is listening on this address.
    let expense_client = Arc::new(ExpenseHttpClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
    )) as DynExpenseRemoteClient;
    let income_client = Arc::new(IncomeHttpClient::new(
        reqwest::Client::new(),
        income_server.uri(),
    )) as DynIncomeRemoteClient;

    let service = StatsService::new(
        expense_client,
        income_client,
        Arc::new(NoopSnapshotRepository::default()) as DynStatsRepository,
    )
    .await;

    let chart = service.get_chart_data(1).await.unwrap();

    assert!(chart.data.expense_list.is_empty());
    assert_eq!(chart.data.income_list.len(), 1);
    assert_eq!(chart.data.income_list[0].title, "Salary");
}

#[tokio::test]
async fn stats_fails_hard_when_a_total_is_unavailable() {
    let income_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/income/get/total/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Total income retrieved successfully",
            "data": 5000.0
        })))
        .mount(&income_server)
        .await;

    let expense_client = Arc::new(ExpenseHttpClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
    )) as DynExpenseRemoteClient;
    let income_client = Arc::new(IncomeHttpClient::new(
        reqwest::Client::new(),
        income_server.uri(),
    )) as DynIncomeRemoteClient;

    let snapshot_repo = Arc::new(NoopSnapshotRepository::default());

    let service = StatsService::new(
        expense_client,
        income_client,
        snapshot_repo.clone() as DynStatsRepository,
    )
    .await;

    let err = service.get_stats(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::Remote(_)));
    assert!(snapshot_repo.rows.lock().unwrap().is_empty());
}
