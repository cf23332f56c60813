mod expense;
mod income;

pub use self::expense::ExpenseHttpClient;
pub use self::income::IncomeHttpClient;
