use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    abstract_trait::stats::{
        http::{
            DynExpenseRemoteClient, DynIncomeRemoteClient, ExpenseRemoteClientTrait,
            IncomeRemoteClientTrait,
        },
        repository::{DynStatsRepository, StatsRepositoryTrait},
        service::StatsServiceTrait,
    },
    domain::{
        requests::UpsertStatsRequest,
        responses::{ExpenseResponse, IncomeResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::stats::StatsModel,
    service::stats::StatsService,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Remote stub: `None` on a field simulates the peer service failing.
struct StubExpenseClient {
    total: Option<f64>,
    records: Option<Vec<ExpenseResponse>>,
}

#[async_trait]
impl ExpenseRemoteClientTrait for StubExpenseClient {
    async fn get_total_expenses(&self, _user_id: i64) -> Result<f64, ServiceError> {
        self.total
            .ok_or_else(|| ServiceError::Remote("expense service unavailable".to_string()))
    }

    async fn get_expenses_by_date_range(
        &self,
        _user_id: i64,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<Vec<ExpenseResponse>, ServiceError> {
        self.records
            .clone()
            .ok_or_else(|| ServiceError::Remote("expense service unavailable".to_string()))
    }
}

struct StubIncomeClient {
    total: Option<f64>,
    records: Option<Vec<IncomeResponse>>,
}

#[async_trait]
impl IncomeRemoteClientTrait for StubIncomeClient {
    async fn get_total_income(&self, _user_id: i64) -> Result<f64, ServiceError> {
        self.total
            .ok_or_else(|| ServiceError::Remote("income service unavailable".to_string()))
    }

    async fn get_incomes_by_date_range(
        &self,
        _user_id: i64,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<Vec<IncomeResponse>, ServiceError> {
        self.records
            .clone()
            .ok_or_else(|| ServiceError::Remote("income service unavailable".to_string()))
    }
}

#[derive(Default)]
struct InMemorySnapshotStore {
    rows: Mutex<HashMap<i64, StatsModel>>,
    next_id: Mutex<i64>,
}

struct InMemorySnapshotRepository {
    store: Arc<InMemorySnapshotStore>,
}

#[async_trait]
impl StatsRepositoryTrait for InMemorySnapshotRepository {
    async fn upsert(&self, req: &UpsertStatsRequest) -> Result<StatsModel, RepositoryError> {
        let mut rows = self.store.rows.lock().unwrap();

        let stats_id = match rows.get(&req.user_id) {
            Some(existing) => existing.stats_id,
            None => {
                let mut next_id = self.store.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            }
        };

        let snapshot = StatsModel {
            stats_id,
            user_id: req.user_id,
            total_income: req.total_income,
            total_expense: req.total_expense,
            balance: req.balance,
        };

        rows.insert(req.user_id, snapshot.clone());

        Ok(snapshot)
    }
}

fn expense_record(title: &str, amount: f64, date: &str) -> ExpenseResponse {
    ExpenseResponse {
        id: 1,
        title: title.to_string(),
        description: None,
        category: "Groceries".to_string(),
        amount,
        date: date.parse().unwrap(),
        user_id: 1,
    }
}

fn income_record(title: &str, amount: f64, date: &str) -> IncomeResponse {
    IncomeResponse {
        id: 1,
        title: title.to_string(),
        description: None,
        category: "Salary".to_string(),
        amount,
        date: date.parse().unwrap(),
        user_id: 1,
    }
}

async fn setup(
    expense: StubExpenseClient,
    income: StubIncomeClient,
) -> (StatsService, Arc<InMemorySnapshotStore>) {
    let store = Arc::new(InMemorySnapshotStore::default());

    let service = StatsService::new(
        Arc::new(expense) as DynExpenseRemoteClient,
        Arc::new(income) as DynIncomeRemoteClient,
        Arc::new(InMemorySnapshotRepository {
            store: store.clone(),
        }) as DynStatsRepository,
    )
    .await;

    (service, store)
}

#[tokio::test]
async fn stats_computes_balance_and_persists_snapshot() {
    let (service, store) = setup(
        StubExpenseClient {
            total: Some(100.0),
            records: None,
        },
        StubIncomeClient {
            total: Some(5000.0),
            records: None,
        },
    )
    .await;

    let stats = service.get_stats(1).await.unwrap();

    assert_eq!(stats.data.total_income, 5000.0);
    assert_eq!(stats.data.total_expense, 100.0);
    assert_eq!(stats.data.balance, 4900.0);

    let snapshot = store.rows.lock().unwrap().get(&1).cloned().unwrap();
    assert_eq!(snapshot.balance, 4900.0);

    // Recomputing with unchanged remote totals replaces the same row.
    let again = service.get_stats(1).await.unwrap();
    assert_eq!(again.data.balance, 4900.0);

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.get(&1).unwrap().stats_id, snapshot.stats_id);
}

#[tokio::test]
async fn negative_balance_is_rejected_without_snapshot() {
    let (service, store) = setup(
        StubExpenseClient {
            total: Some(5000.0),
            records: None,
        },
        StubIncomeClient {
            total: Some(100.0),
            records: None,
        },
    )
    .await;

    let err = service.get_stats(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NegativeBalance(_)));

    // The business-rule rejection leaves no row behind, even for a
    // first-time user.
    assert!(store.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_remote_total_is_fatal_for_stats() {
    let (service, store) = setup(
        StubExpenseClient {
            total: None,
            records: None,
        },
        StubIncomeClient {
            total: Some(100.0),
            records: None,
        },
    )
    .await;

    let err = service.get_stats(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::Remote(_)));
    assert!(store.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn chart_data_returns_both_series() {
    let (service, _) = setup(
        StubExpenseClient {
            total: None,
            records: Some(vec![expense_record("Rent", 800.0, "2025-06-01")]),
        },
        StubIncomeClient {
            total: None,
            records: Some(vec![
                income_record("Salary", 3000.0, "2025-06-01"),
                income_record("Bonus", 500.0, "2025-06-15"),
            ]),
        },
    )
    .await;

    let chart = service.get_chart_data(1).await.unwrap();

    assert_eq!(chart.data.expense_list.len(), 1);
    assert_eq!(chart.data.income_list.len(), 2);
    assert_eq!(chart.data.expense_list[0].title, "Rent");
}

#[tokio::test]
async fn chart_data_degrades_expense_branch_independently() {
    let (service, _) = setup(
        StubExpenseClient {
            total: None,
            records: None,
        },
        StubIncomeClient {
            total: None,
            records: Some(vec![income_record("Salary", 3000.0, "2025-06-01")]),
        },
    )
    .await;

    let chart = service.get_chart_data(1).await.unwrap();

    assert!(chart.data.expense_list.is_empty());
    assert_eq!(chart.data.income_list.len(), 1);
}

#[tokio::test]
async fn chart_data_degrades_income_branch_independently() {
    let (service, _) = setup(
        StubExpenseClient {
            total: None,
            records: Some(vec![expense_record("Rent", 800.0, "2025-06-01")]),
        },
        StubIncomeClient {
            total: None,
            records: None,
        },
    )
    .await;

    let chart = service.get_chart_data(1).await.unwrap();

    assert_eq!(chart.data.expense_list.len(), 1);
    assert!(chart.data.income_list.is_empty());
}
