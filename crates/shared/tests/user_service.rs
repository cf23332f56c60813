use async_trait::async_trait;
use shared::{
    abstract_trait::user::{
        repository::{
            command::{DynUserCommandRepository, UserCommandRepositoryTrait},
            query::{DynUserQueryRepository, UserQueryRepositoryTrait},
        },
        service::{command::UserCommandServiceTrait, query::UserQueryServiceTrait},
    },
    domain::requests::{RegisterUserRequest, UpdateUserRequest},
    errors::{RepositoryError, ServiceError},
    model::user::UserModel,
    service::user::{UserCommandService, UserQueryService},
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct InMemoryUserStore {
    rows: Mutex<Vec<UserModel>>,
    next_id: Mutex<i64>,
}

struct InMemoryUserRepository {
    store: Arc<InMemoryUserStore>,
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.store.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, user_id: i64) -> Result<UserModel, RepositoryError> {
        self.store
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        Ok(self
            .store
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name == user_name)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        Ok(self
            .store
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUserRepository {
    async fn create(&self, req: &RegisterUserRequest) -> Result<UserModel, RepositoryError> {
        let mut next_id = self.store.next_id.lock().unwrap();
        *next_id += 1;

        let user = UserModel {
            user_id: *next_id,
            user_name: req.user_name.clone(),
            password: req.password.clone(),
            email: req.email.clone(),
        };

        self.store.rows.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn update(
        &self,
        user_id: i64,
        req: &UpdateUserRequest,
    ) -> Result<UserModel, RepositoryError> {
        let mut rows = self.store.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        row.user_name = req.user_name.clone();
        row.password = req.password.clone();
        row.email = req.email.clone();

        Ok(row.clone())
    }

    async fn delete(&self, user_id: i64) -> Result<(), RepositoryError> {
        let mut rows = self.store.rows.lock().unwrap();
        rows.retain(|u| u.user_id != user_id);

        Ok(())
    }
}

async fn setup() -> (UserQueryService, UserCommandService, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::default());

    let query = Arc::new(InMemoryUserRepository {
        store: store.clone(),
    }) as DynUserQueryRepository;
    let command = Arc::new(InMemoryUserRepository {
        store: store.clone(),
    }) as DynUserCommandRepository;

    (
        UserQueryService::new(query.clone()).await,
        UserCommandService::new(query, command).await,
        store,
    )
}

fn register_request(user_name: &str, email: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        user_name: user_name.to_string(),
        password: "hunter22".to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn register_suppresses_password() {
    let (_, command_service, store) = setup().await;

    let registered = command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(registered.data.user_name, "alice");
    assert_eq!(registered.data.password, None);
    assert_eq!(registered.data.email, "alice@example.com");

    // Stored as received, not hashed.
    assert_eq!(store.rows.lock().unwrap()[0].password, "hunter22");
}

#[tokio::test]
async fn duplicate_username_is_conflict() {
    let (_, command_service, _) = setup().await;

    command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = command_service
        .register(&register_request("alice", "other@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let (_, command_service, _) = setup().await;

    command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = command_service
        .register(&register_request("bob", "alice@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn register_validation_failures_come_back_as_field_map() {
    let (_, command_service, _) = setup().await;

    let mut request = register_request("al", "not-an-email");
    request.password = "short".to_string();

    let err = command_service.register(&request).await.unwrap_err();

    match err {
        ServiceError::FieldErrors(errors) => {
            assert!(errors.contains_key("user_name"));
            assert!(errors.contains_key("password"));
            assert!(errors.contains_key("email"));
        }
        other => panic!("expected field errors, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_suppresses_password() {
    let (query_service, command_service, _) = setup().await;

    command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    let user = query_service.find_by_id(1).await.unwrap();
    assert_eq!(user.data.password, None);

    let all = query_service.find_all().await.unwrap();
    assert_eq!(all.data.len(), 1);
    assert_eq!(all.data[0].password, None);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let (query_service, command_service, _) = setup().await;

    let err = query_service.find_by_id(42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let update = UpdateUserRequest {
        user_name: "carol".to_string(),
        password: "s3cr3ts".to_string(),
        email: "carol@example.com".to_string(),
    };
    let err = command_service.update(42, &update).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = command_service.delete(42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let (_, command_service, store) = setup().await;

    command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    let update = UpdateUserRequest {
        user_name: "alice2".to_string(),
        password: "n3wpass".to_string(),
        email: "alice2@example.com".to_string(),
    };

    let updated = command_service.update(1, &update).await.unwrap();
    assert_eq!(updated.data.user_name, "alice2");
    assert_eq!(updated.data.password, None);

    let row = store.rows.lock().unwrap()[0].clone();
    assert_eq!(row.user_name, "alice2");
    assert_eq!(row.password, "n3wpass");
    assert_eq!(row.email, "alice2@example.com");
}

#[tokio::test]
async fn delete_answers_with_success_message() {
    let (query_service, command_service, _) = setup().await;

    command_service
        .register(&register_request("alice", "alice@example.com"))
        .await
        .unwrap();

    let deleted = command_service.delete(1).await.unwrap();
    assert_eq!(deleted.data, "User Deleted Successfully");

    let err = query_service.find_by_id(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
