use crate::{Account, BankConnection, Category, Snapshot, Transaction, UserInfo};

/// Last snapshot loaded from the API.
///
/// The store is never patched in place: after every successful mutation the
/// whole snapshot is fetched again and swapped in through [`ClientStore::replace`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientStore {
    snapshot: Snapshot,
    loaded: bool,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding an already loaded snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            loaded: true,
        }
    }

    /// Swap in a freshly loaded snapshot, returning the new store
    pub fn replace(&self, snapshot: Snapshot) -> Self {
        Self::from_snapshot(snapshot)
    }

    /// Loaded, but the user has no data of any kind yet
    pub fn is_empty(&self) -> bool {
        self.loaded && self.snapshot.is_empty()
    }

    /// False until the first snapshot arrives
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn accounts(&self) -> &[Account] {
        &self.snapshot.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.snapshot.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn bank_connections(&self) -> &[BankConnection] {
        &self.snapshot.bank_connections
    }

    pub fn user(&self) -> &UserInfo {
        &self.snapshot.user
    }

    pub fn account(&self, id: i64) -> Option<&Account> {
        self.snapshot.account(id)
    }

    /// Case-insensitive lookup of an existing category by name. Only the
    /// input is trimmed; stored names are compared as the API sent them.
    pub fn has_category(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.snapshot
            .categories
            .iter()
            .any(|c| c.name.to_lowercase() == wanted)
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> f64 {
        self.snapshot.accounts.iter().map(|a| a.balance).sum()
    }
}
