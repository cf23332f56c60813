mod command;
mod query;

pub use self::command::IncomeCommandService;
pub use self::query::IncomeQueryService;

const INCOME_NOT_FOUND_MESSAGE: &str = "Income Not Found";
