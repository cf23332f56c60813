mod command;
mod query;

pub use self::command::ExpenseCommandService;
pub use self::query::ExpenseQueryService;

const EXPENSE_NOT_FOUND_MESSAGE: &str = "Expense Not Found";
