mod expense;
mod income;

pub use self::expense::{DynExpenseRemoteClient, ExpenseRemoteClientTrait};
pub use self::income::{DynIncomeRemoteClient, IncomeRemoteClientTrait};
