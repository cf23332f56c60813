use crate::{
    abstract_trait::user::repository::query::UserQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::user::UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        info!("🔍 Fetching all users");

        let users = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, user_name, password, email
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch users: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} users", users.len());

        Ok(users)
    }

    async fn find_by_id(&self, user_id: i64) -> Result<UserModel, RepositoryError> {
        info!("🔍 Finding user by ID: {user_id}");

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, user_name, password, email
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to query user by ID: {e:?}");
            RepositoryError::from(e)
        })?;

        match user {
            Some(user) => Ok(user),
            None => {
                error!("❌ User with ID {user_id} not found");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, user_name, password, email
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to query user by name: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, user_name, password, email
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to query user by email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}
