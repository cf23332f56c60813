use crate::{
    abstract_trait::user::repository::command::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::{RegisterUserRequest, UpdateUserRequest},
    errors::RepositoryError, model::user::UserModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create(&self, req: &RegisterUserRequest) -> Result<UserModel, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (user_name, password, email)
            VALUES ($1, $2, $3)
            RETURNING user_id, user_name, password, email
            "#,
        )
        .bind(&req.user_name)
        .bind(&req.password)
        .bind(&req.email)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create user {}: {e:?}", req.user_name);
            RepositoryError::Sqlx(e)
        })?;

        Ok(user)
    }

    async fn update(
        &self,
        user_id: i64,
        req: &UpdateUserRequest,
    ) -> Result<UserModel, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET user_name = $2, password = $3, email = $4
            WHERE user_id = $1
            RETURNING user_id, user_name, password, email
            "#,
        )
        .bind(user_id)
        .bind(&req.user_name)
        .bind(&req.password)
        .bind(&req.email)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                error!("❌ User with ID {user_id} not found");
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to update user {user_id}: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(user)
    }

    async fn delete(&self, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(())
    }
}
