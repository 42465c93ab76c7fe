pub mod transaction_form;
pub mod transaction_table;

pub use transaction_form::TransactionFormView;
pub use transaction_table::TransactionTable;
