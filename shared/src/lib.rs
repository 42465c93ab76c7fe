use serde::{Deserialize, Serialize};
use std::fmt;

pub mod charts;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod money;
pub mod store;
pub mod views;

pub use config::DashboardConfig;
pub use controller::{DashboardError, Notice, NoticeKind};
pub use error::ValidationError;
pub use gateway::{Gateway, GatewayError, Method, SessionStore, Transport};
pub use store::ClientStore;

/// Category name the server assigns to both legs of a transfer.
/// Only ever rendered; never created or deleted as a category.
pub const TRANSFER_CATEGORY: &str = "Transferência";

/// Identifier that the API sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A money account owned by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    /// Current balance; only ever changed by the server
    #[serde(rename = "saldo", default, deserialize_with = "money::deserialize_amount")]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming into an account
    #[serde(rename = "entrada")]
    Inflow,
    /// Money leaving an account
    #[serde(rename = "saida")]
    Outflow,
    /// Any type the client does not know about
    #[serde(other)]
    Other,
}

impl TransactionKind {
    /// Value used on the wire and in the type select
    pub fn as_wire(&self) -> &'static str {
        match self {
            TransactionKind::Inflow => "entrada",
            TransactionKind::Outflow => "saida",
            TransactionKind::Other => "outro",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "entrada" => TransactionKind::Inflow,
            "saida" => TransactionKind::Outflow,
            _ => TransactionKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "desc", default)]
    pub description: String,
    /// Always positive; direction comes from `kind`
    #[serde(deserialize_with = "money::deserialize_amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Account the transaction was booked on. May point at a deleted account.
    #[serde(rename = "contaId", default)]
    pub account_id: Option<i64>,
    #[serde(rename = "categoria", default)]
    pub category: String,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
}

/// A simulated bank link that imported transactions into an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConnection {
    pub id: RecordId,
    #[serde(rename = "bankName", default)]
    pub bank_name: String,
    #[serde(rename = "contaId", default)]
    pub account_id: Option<i64>,
    #[serde(rename = "connectedAt", default)]
    pub connected_at: Option<String>,
    #[serde(rename = "numTransactions", default, deserialize_with = "money::deserialize_count")]
    pub imported_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Everything the dashboard knows about the signed-in user, as returned by `data/all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "contas", default)]
    pub accounts: Vec<Account>,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<Category>,
    #[serde(rename = "transacoes", default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "connectedBanks", default)]
    pub bank_connections: Vec<BankConnection>,
    #[serde(default)]
    pub user: UserInfo,
}

/// Request for creating an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "saldo")]
    pub balance: f64,
}

/// Request for creating a category; the id is assigned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
    #[serde(rename = "contaId")]
    pub account_id: i64,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// Request for moving money between two accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "fromId")]
    pub from_id: i64,
    #[serde(rename = "toId")]
    pub to_id: i64,
    pub amount: f64,
    pub date: String,
}

/// Request for the server to fake a bank connection with imported transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankImportRequest {
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "numTransactions")]
    pub transaction_count: u32,
    #[serde(rename = "contaId")]
    pub account_id: i64,
}

impl Snapshot {
    pub fn account(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.categories.is_empty()
            && self.transactions.is_empty()
            && self.bank_connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_api_payload() {
        let json = r#"{
            "contas": [{"id": 1, "nome": "Nubank", "saldo": 1500.5}],
            "categorias": [{"id": "7", "nome": "Mercado"}, {"id": 8, "nome": "Lazer"}],
            "transacoes": [{"id": 3, "desc": "Feira", "amount": 42.0, "type": "saida",
                            "contaId": 1, "categoria": "Mercado", "date": "2024-03-02"}],
            "connectedBanks": [{"id": 9, "bankName": "Itaú", "contaId": 1}],
            "user": {"nome": "Ana"}
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.accounts[0].name, "Nubank");
        assert_eq!(snapshot.categories[0].id, RecordId::Text("7".to_string()));
        assert_eq!(snapshot.categories[1].id, RecordId::Number(8));
        assert_eq!(snapshot.transactions[0].kind, TransactionKind::Outflow);
        assert_eq!(snapshot.transactions[0].account_id, Some(1));
        assert_eq!(snapshot.bank_connections[0].bank_name, "Itaú");
        assert_eq!(snapshot.user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_snapshot_accepts_numbers_sent_as_text() {
        let json = r#"{
            "contas": [{"id": 1, "nome": "A", "saldo": "1500.50"},
                       {"id": 2, "nome": "B", "saldo": null}],
            "transacoes": [{"id": 3, "desc": "Feira", "amount": "42.10", "type": "saida",
                            "contaId": 1, "categoria": "Mercado", "date": "2024-03-02"}],
            "connectedBanks": [{"id": 9, "bankName": "Itaú", "contaId": 1, "numTransactions": "10"},
                               {"id": 10, "bankName": "Inter", "numTransactions": 4},
                               {"id": 11, "bankName": "C6", "numTransactions": "muitas"}]
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.accounts[0].balance, 1500.5);
        assert_eq!(snapshot.accounts[1].balance, 0.0);
        assert_eq!(snapshot.transactions[0].amount, 42.1);
        assert_eq!(snapshot.bank_connections[0].imported_count, Some(10));
        assert_eq!(snapshot.bank_connections[1].imported_count, Some(4));
        assert_eq!(snapshot.bank_connections[2].imported_count, None);
    }

    #[test]
    fn test_snapshot_missing_collections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.user, UserInfo::default());
    }

    #[test]
    fn test_unknown_transaction_type_is_tolerated() {
        let json = r#"{"id": 1, "desc": "?", "amount": 1.0, "type": "ajuste", "date": "2024-01-01"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Other);
        assert_eq!(tx.account_id, None);
    }

    #[test]
    fn test_new_transaction_uses_wire_names() {
        let payload = NewTransaction {
            description: "Salário".to_string(),
            amount: 5000.0,
            kind: TransactionKind::Inflow,
            date: "2024-05-05".to_string(),
            account_id: 2,
            category: "Renda".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["desc"], "Salário");
        assert_eq!(value["type"], "entrada");
        assert_eq!(value["contaId"], 2);
        assert_eq!(value["categoria"], "Renda");
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Number(12).to_string(), "12");
        assert_eq!(RecordId::Text("abc".to_string()).to_string(), "abc");
    }
}
