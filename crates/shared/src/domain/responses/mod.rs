mod api;
mod expense;
mod income;
mod pagination;
mod stats;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::expense::ExpenseResponse;
pub use self::income::IncomeResponse;
pub use self::pagination::Pagination;
pub use self::stats::{GraphResponse, StatsResponse};
pub use self::user::UserResponse;
