/// Reasons a form is rejected before anything is sent to the API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields correctly")]
    IncompleteFields,
    #[error("Please enter a category name")]
    EmptyCategoryName,
    #[error("The category \"{0}\" already exists")]
    DuplicateCategory(String),
    #[error("Source and destination accounts must be different")]
    SameAccount,
    #[error("Insufficient balance in account {0}")]
    InsufficientBalance(String),
    #[error("Selected account no longer exists")]
    UnknownAccount,
    #[error("Create at least one account before connecting a bank")]
    NoAccounts,
}
