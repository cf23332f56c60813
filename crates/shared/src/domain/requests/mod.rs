mod expense;
mod income;
mod stats;
mod user;

pub use self::expense::{
    CreateExpenseRequest, FindAllExpenses, FindExpensesByDateRange, UpdateExpenseRequest,
};
pub use self::income::{
    CreateIncomeRequest, FindAllIncomes, FindIncomesByDateRange, UpdateIncomeRequest,
};
pub use self::stats::{FindStats, UpsertStatsRequest};
pub use self::user::{RegisterUserRequest, UpdateUserRequest};
