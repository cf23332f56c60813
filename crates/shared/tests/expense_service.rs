use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    abstract_trait::expense::{
        repository::{
            command::{DynExpenseCommandRepository, ExpenseCommandRepositoryTrait},
            query::{DynExpenseQueryRepository, ExpenseQueryRepositoryTrait},
        },
        service::{command::ExpenseCommandServiceTrait, query::ExpenseQueryServiceTrait},
    },
    domain::requests::{
        CreateExpenseRequest, FindAllExpenses, FindExpensesByDateRange, UpdateExpenseRequest,
    },
    errors::{RepositoryError, ServiceError},
    model::expense::ExpenseModel,
    service::expense::{ExpenseCommandService, ExpenseQueryService},
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct InMemoryExpenseStore {
    rows: Mutex<Vec<ExpenseModel>>,
    next_id: Mutex<i64>,
}

struct InMemoryExpenseRepository {
    store: Arc<InMemoryExpenseStore>,
}

#[async_trait]
impl ExpenseQueryRepositoryTrait for InMemoryExpenseRepository {
    async fn find_by_user(
        &self,
        user_id: i64,
        request: &FindAllExpenses,
    ) -> Result<(Vec<ExpenseModel>, i64), RepositoryError> {
        let rows = self.store.rows.lock().unwrap();
        let mut matching: Vec<ExpenseModel> = rows
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));

        let total = matching.len() as i64;
        let start = (request.page * request.page_size) as usize;
        let page: Vec<ExpenseModel> = matching
            .into_iter()
            .skip(start)
            .take(request.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<ExpenseModel, RepositoryError> {
        let rows = self.store.rows.lock().unwrap();
        rows.iter()
            .find(|e| e.expense_id == id && e.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn sum_amount_by_user(&self, user_id: i64) -> Result<Option<f64>, RepositoryError> {
        let rows = self.store.rows.lock().unwrap();
        let amounts: Vec<f64> = rows
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.amount)
            .collect();

        if amounts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(amounts.iter().sum()))
        }
    }

    async fn find_by_user_and_date_between(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseModel>, RepositoryError> {
        let rows = self.store.rows.lock().unwrap();
        let mut matching: Vec<ExpenseModel> = rows
            .iter()
            .filter(|e| e.user_id == user_id && e.date >= start_date && e.date <= end_date)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(matching)
    }
}

#[async_trait]
impl ExpenseCommandRepositoryTrait for InMemoryExpenseRepository {
    async fn create(&self, req: &CreateExpenseRequest) -> Result<ExpenseModel, RepositoryError> {
        let mut next_id = self.store.next_id.lock().unwrap();
        *next_id += 1;

        let expense = ExpenseModel {
            expense_id: *next_id,
            title: req.title.clone(),
            description: req.description.clone(),
            category: req.category.clone(),
            amount: req.amount,
            date: req.date,
            user_id: req.user_id,
        };

        self.store.rows.lock().unwrap().push(expense.clone());

        Ok(expense)
    }

    async fn update(&self, expense: &ExpenseModel) -> Result<ExpenseModel, RepositoryError> {
        let mut rows = self.store.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.expense_id == expense.expense_id && e.user_id == expense.user_id)
            .ok_or(RepositoryError::NotFound)?;

        *row = expense.clone();

        Ok(expense.clone())
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<(), RepositoryError> {
        let mut rows = self.store.rows.lock().unwrap();
        rows.retain(|e| !(e.expense_id == id && e.user_id == user_id));

        Ok(())
    }
}

async fn setup() -> (ExpenseQueryService, ExpenseCommandService) {
    let store = Arc::new(InMemoryExpenseStore::default());

    let query = Arc::new(InMemoryExpenseRepository {
        store: store.clone(),
    }) as DynExpenseQueryRepository;
    let command = Arc::new(InMemoryExpenseRepository { store }) as DynExpenseCommandRepository;

    (
        ExpenseQueryService::new(query.clone()).await,
        ExpenseCommandService::new(query, command).await,
    )
}

fn create_request(title: &str, amount: f64, date: &str, user_id: i64) -> CreateExpenseRequest {
    CreateExpenseRequest {
        title: title.to_string(),
        description: Some("weekly".to_string()),
        category: "Groceries".to_string(),
        amount,
        date: date.parse().unwrap(),
        user_id,
    }
}

fn update_request(user_id: i64) -> UpdateExpenseRequest {
    UpdateExpenseRequest {
        title: None,
        description: None,
        category: None,
        amount: None,
        date: None,
        user_id,
    }
}

#[tokio::test]
async fn create_echoes_input_and_is_retrievable() {
    let (query_service, command_service) = setup().await;

    let created = command_service
        .create(&create_request("Lunch", 12.5, "2025-06-01", 1))
        .await
        .unwrap();

    assert_eq!(created.data.title, "Lunch");
    assert_eq!(created.data.amount, 12.5);
    assert_eq!(created.data.user_id, 1);

    let fetched = query_service
        .find_by_id(created.data.id, 1)
        .await
        .unwrap();

    assert_eq!(fetched.data.id, created.data.id);
    assert_eq!(fetched.data.title, "Lunch");
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let (_, command_service) = setup().await;

    let request = create_request("", 12.5, "2025-06-01", 1);

    let err = command_service.create(&request).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn mismatched_owner_is_not_found() {
    let (query_service, command_service) = setup().await;

    let created = command_service
        .create(&create_request("Lunch", 12.5, "2025-06-01", 1))
        .await
        .unwrap();
    let id = created.data.id;

    let err = query_service.find_by_id(id, 2).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = command_service
        .update(id, &update_request(2))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = command_service.delete(id, 2).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // The record is still there for its real owner.
    assert!(query_service.find_by_id(id, 1).await.is_ok());
}

#[tokio::test]
async fn partial_update_keeps_unset_fields() {
    let (query_service, command_service) = setup().await;

    let created = command_service
        .create(&create_request("Lunch", 12.5, "2025-06-01", 1))
        .await
        .unwrap();

    let mut request = update_request(1);
    request.title = Some("Dinner".to_string());

    let updated = command_service
        .update(created.data.id, &request)
        .await
        .unwrap();

    assert_eq!(updated.data.title, "Dinner");
    assert_eq!(updated.data.description, Some("weekly".to_string()));
    assert_eq!(updated.data.category, "Groceries");
    assert_eq!(updated.data.amount, 12.5);
    assert_eq!(updated.data.date, "2025-06-01".parse::<NaiveDate>().unwrap());

    let fetched = query_service.find_by_id(created.data.id, 1).await.unwrap();
    assert_eq!(fetched.data.title, "Dinner");
    assert_eq!(fetched.data.amount, 12.5);
}

#[tokio::test]
async fn delete_removes_record() {
    let (query_service, command_service) = setup().await;

    let created = command_service
        .create(&create_request("Lunch", 12.5, "2025-06-01", 1))
        .await
        .unwrap();

    let deleted = command_service.delete(created.data.id, 1).await.unwrap();
    assert_eq!(deleted.data, "Expense Deleted Successfully");

    let err = query_service
        .find_by_id(created.data.id, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn total_sums_all_amounts() {
    let (query_service, command_service) = setup().await;

    command_service
        .create(&create_request("A", 10.0, "2025-06-01", 1))
        .await
        .unwrap();
    command_service
        .create(&create_request("B", 25.5, "2025-06-02", 1))
        .await
        .unwrap();

    let total = query_service.get_total(1).await.unwrap();
    assert_eq!(total.data, 35.5);
}

#[tokio::test]
async fn total_without_records_is_not_found() {
    let (query_service, _) = setup().await;

    let err = query_service.get_total(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn date_range_is_inclusive_on_both_ends() {
    let (query_service, command_service) = setup().await;

    command_service
        .create(&create_request("on start", 1.0, "2025-06-01", 1))
        .await
        .unwrap();
    command_service
        .create(&create_request("on end", 2.0, "2025-06-30", 1))
        .await
        .unwrap();
    command_service
        .create(&create_request("before", 3.0, "2025-05-31", 1))
        .await
        .unwrap();
    command_service
        .create(&create_request("after", 4.0, "2025-07-01", 1))
        .await
        .unwrap();

    let request = FindExpensesByDateRange {
        user_id: 1,
        start_date: "2025-06-01".parse().unwrap(),
        end_date: "2025-06-30".parse().unwrap(),
    };

    let in_range = query_service.find_by_date_range(&request).await.unwrap();

    let titles: Vec<&str> = in_range.data.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["on end", "on start"]);
}

#[tokio::test]
async fn empty_date_range_is_not_found() {
    let (query_service, command_service) = setup().await;

    command_service
        .create(&create_request("outside", 1.0, "2025-01-15", 1))
        .await
        .unwrap();

    let request = FindExpensesByDateRange {
        user_id: 1,
        start_date: "2025-06-01".parse().unwrap(),
        end_date: "2025-06-30".parse().unwrap(),
    };

    let err = query_service
        .find_by_date_range(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn list_is_newest_first_and_paged() {
    let (query_service, command_service) = setup().await;

    for day in 1..=15 {
        command_service
            .create(&create_request(
                &format!("expense {day}"),
                1.0,
                &format!("2025-06-{day:02}"),
                1,
            ))
            .await
            .unwrap();
    }

    // Defaults: first page of ten, newest first.
    let first_page = query_service
        .find_all(1, &FindAllExpenses { page: 0, page_size: 10 })
        .await
        .unwrap();

    assert_eq!(first_page.data.len(), 10);
    assert_eq!(first_page.data[0].title, "expense 15");
    assert_eq!(first_page.pagination.total_items, 15);
    assert_eq!(first_page.pagination.total_pages, 2);

    let second_page = query_service
        .find_all(1, &FindAllExpenses { page: 1, page_size: 10 })
        .await
        .unwrap();

    assert_eq!(second_page.data.len(), 5);
    assert_eq!(second_page.data[0].title, "expense 5");
    assert_eq!(second_page.data[4].title, "expense 1");
}
