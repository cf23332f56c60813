mod command;
mod query;

pub use self::command::UserCommandService;
pub use self::query::UserQueryService;

fn user_not_found(user_id: i64) -> String {
    format!("User not found with id {user_id}")
}
