//! The dashboard's write path: validate, call the API, reload everything.
//!
//! Every operation here follows the same sequence and never patches the store
//! itself. A successful mutation is always followed by a fresh `data/all`
//! fetch; the caller swaps the returned snapshot into its [`ClientStore`].

use chrono::NaiveDate;
use log::{error, info};

use crate::error::ValidationError;
use crate::forms::{AccountForm, BankImportForm, CategoryForm, TransactionForm, TransferForm};
use crate::gateway::{Gateway, GatewayError, SessionStore, Transport};
use crate::store::ClientStore;
use crate::{RecordId, Snapshot};

pub const SNAPSHOT_ENDPOINT: &str = "data/all";
pub const ACCOUNTS_ENDPOINT: &str = "contas";
pub const CATEGORIES_ENDPOINT: &str = "categorias";
pub const TRANSACTIONS_ENDPOINT: &str = "transacoes";
pub const TRANSFER_ENDPOINT: &str = "transacoes/transfer";
pub const BANK_SIMULATE_ENDPOINT: &str = "connect/simulate";
pub const BANK_CONNECTIONS_ENDPOINT: &str = "connect";

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl DashboardError {
    pub fn requires_login(&self) -> bool {
        matches!(self, DashboardError::Gateway(e) if e.requires_login())
    }

    /// Text for the notification banner. Transport and decoding problems get a
    /// generic message; the details go to the log.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Gateway(GatewayError::Network(_))
            | DashboardError::Gateway(GatewayError::Decode(_)) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the notification banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl From<&DashboardError> for Notice {
    fn from(err: &DashboardError) -> Self {
        Notice::error(err.user_message())
    }
}

/// Result of a mutation that the server accepted.
///
/// The mutation and the reload that follows it are separate calls, so the
/// reload can fail on its own; the form should still be reset in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub notice: Notice,
    pub reload: Result<Snapshot, DashboardError>,
}

#[derive(Clone)]
pub struct Dashboard<T, S> {
    gateway: Gateway<T, S>,
}

impl<T: Transport, S: SessionStore> Dashboard<T, S> {
    pub fn new(gateway: Gateway<T, S>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway<T, S> {
        &self.gateway
    }

    /// Fetch the complete snapshot for the signed-in user
    pub async fn load(&self) -> Result<Snapshot, DashboardError> {
        let snapshot: Snapshot = self.gateway.get(SNAPSHOT_ENDPOINT).await?;
        info!(
            "Loaded snapshot: {} accounts, {} categories, {} transactions, {} bank connections",
            snapshot.accounts.len(),
            snapshot.categories.len(),
            snapshot.transactions.len(),
            snapshot.bank_connections.len()
        );
        Ok(snapshot)
    }

    async fn finish(&self, message: &str) -> Outcome {
        let reload = self.load().await;
        if let Err(e) = &reload {
            error!("Reload after \"{}\" failed: {}", message, e);
        }
        Outcome {
            notice: Notice::success(message),
            reload,
        }
    }

    pub async fn create_account(&self, form: &AccountForm) -> Result<Outcome, DashboardError> {
        let payload = form.validate()?;
        self.gateway.post(ACCOUNTS_ENDPOINT, &payload).await?;
        info!("Created account {}", payload.name);
        Ok(self.finish("Account added successfully!").await)
    }

    pub async fn delete_account(&self, id: i64) -> Result<Outcome, DashboardError> {
        self.gateway
            .delete(&format!("{}/{}", ACCOUNTS_ENDPOINT, id))
            .await?;
        info!("Deleted account {}", id);
        Ok(self.finish("Account deleted successfully!").await)
    }

    /// Duplicate names are caught against `store` before anything is sent
    pub async fn create_category(
        &self,
        form: &CategoryForm,
        store: &ClientStore,
    ) -> Result<Outcome, DashboardError> {
        let payload = form.validate(store)?;
        self.gateway.post(CATEGORIES_ENDPOINT, &payload).await?;
        info!("Created category {}", payload.name);
        Ok(self.finish("Category added successfully!").await)
    }

    pub async fn delete_category(&self, id: &RecordId) -> Result<Outcome, DashboardError> {
        self.gateway
            .delete(&format!("{}/{}", CATEGORIES_ENDPOINT, id))
            .await?;
        info!("Deleted category {}", id);
        Ok(self.finish("Category deleted successfully!").await)
    }

    pub async fn create_transaction(
        &self,
        form: &TransactionForm,
    ) -> Result<Outcome, DashboardError> {
        let payload = form.validate()?;
        self.gateway.post(TRANSACTIONS_ENDPOINT, &payload).await?;
        info!("Created transaction \"{}\"", payload.description);
        Ok(self.finish("Transaction added successfully!").await)
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<Outcome, DashboardError> {
        self.gateway
            .delete(&format!("{}/{}", TRANSACTIONS_ENDPOINT, id))
            .await?;
        info!("Deleted transaction {}", id);
        Ok(self.finish("Transaction deleted.").await)
    }

    /// Balance is checked against `store`; the server has the final word
    pub async fn transfer(
        &self,
        form: &TransferForm,
        store: &ClientStore,
        today: NaiveDate,
    ) -> Result<Outcome, DashboardError> {
        let payload = form.validate(store, today)?;
        self.gateway.post(TRANSFER_ENDPOINT, &payload).await?;
        info!(
            "Transferred {} from account {} to account {}",
            payload.amount, payload.from_id, payload.to_id
        );
        Ok(self.finish("Transfer completed successfully.").await)
    }

    pub async fn simulate_bank_import(
        &self,
        form: &BankImportForm,
        store: &ClientStore,
    ) -> Result<Outcome, DashboardError> {
        let payload = form.validate(store)?;
        self.gateway.post(BANK_SIMULATE_ENDPOINT, &payload).await?;
        info!(
            "Simulated import of {} transactions from {}",
            payload.transaction_count, payload.bank_name
        );
        Ok(self.finish("Bank connected successfully.").await)
    }

    pub async fn disconnect_bank(&self, id: &RecordId) -> Result<Outcome, DashboardError> {
        self.gateway
            .delete(&format!("{}/{}", BANK_CONNECTIONS_ENDPOINT, id))
            .await?;
        info!("Disconnected bank connection {}", id);
        Ok(self.finish("Bank account disconnected.").await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{gateway, FakeTransport, MemorySession};
    use crate::gateway::Method;
    use crate::{Account, Category, TransactionKind};

    const SNAPSHOT: &str = r#"{
        "contas": [{"id": 1, "nome": "Corrente", "saldo": 100.0},
                   {"id": 2, "nome": "Poupança", "saldo": 0.0}],
        "categorias": [{"id": 1, "nome": "Mercado"}],
        "transacoes": [],
        "connectedBanks": [],
        "user": {"nome": "Ana"}
    }"#;

    fn setup() -> (FakeTransport, MemorySession, Dashboard<FakeTransport, MemorySession>) {
        let transport = FakeTransport::default();
        let session = MemorySession::with_token("token");
        let dashboard = Dashboard::new(gateway(&transport, &session));
        (transport, session, dashboard)
    }

    fn store() -> ClientStore {
        ClientStore::from_snapshot(serde_json::from_str(SNAPSHOT).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let (transport, _, dashboard) = setup();
        transport.respond(200, SNAPSHOT);

        let snapshot = dashboard.load().await.unwrap();
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(
            transport.calls(),
            vec![(Method::Get, "http://api.test/api/data/all".to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_account_posts_then_reloads() {
        let (transport, _, dashboard) = setup();
        transport.respond(201, r#"{"id": 3}"#).respond(200, SNAPSHOT);

        let form = AccountForm {
            name: "Nubank".to_string(),
            balance: "1.234,56".to_string(),
        };
        let outcome = dashboard.create_account(&form).await.unwrap();

        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.reload.unwrap().accounts[0].name, "Corrente");
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "http://api.test/api/contas".to_string()),
                (Method::Get, "http://api.test/api/data/all".to_string()),
            ]
        );
        assert_eq!(
            transport.body_of(0),
            serde_json::json!({"nome": "Nubank", "saldo": 1234.56})
        );
    }

    #[tokio::test]
    async fn test_duplicate_category_makes_no_request() {
        let (transport, _, dashboard) = setup();
        let form = CategoryForm {
            name: "mercado".to_string(),
        };

        let err = dashboard.create_category(&form, &store()).await.unwrap_err();
        assert_eq!(
            err,
            DashboardError::Validation(ValidationError::DuplicateCategory("mercado".to_string()))
        );
        assert!(!err.requires_login());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_balance_makes_no_request() {
        let (transport, _, dashboard) = setup();
        let form = TransferForm {
            from_id: "1".to_string(),
            to_id: "2".to_string(),
            amount: "100,01".to_string(),
        };

        let err = dashboard.transfer(&form, &store(), today()).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Insufficient balance in account Corrente"
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_transfer_payload_carries_today() {
        let (transport, _, dashboard) = setup();
        transport.respond(200, "").respond(200, SNAPSHOT);
        let form = TransferForm {
            from_id: "1".to_string(),
            to_id: "2".to_string(),
            amount: "40".to_string(),
        };

        dashboard.transfer(&form, &store(), today()).await.unwrap();
        assert_eq!(
            transport.body_of(0),
            serde_json::json!({"fromId": 1, "toId": 2, "amount": 40.0, "date": "2024-07-15"})
        );
        assert_eq!(transport.calls()[0].1, "http://api.test/api/transacoes/transfer");
    }

    #[tokio::test]
    async fn test_transaction_payload_coerces_account_id() {
        let (transport, _, dashboard) = setup();
        transport.respond(201, "{}").respond(200, SNAPSHOT);
        let form = TransactionForm {
            description: "Feira".to_string(),
            amount: "35,90".to_string(),
            kind: TransactionKind::Outflow,
            account_id: "2".to_string(),
            category: "Mercado".to_string(),
            date: "2024-07-14".to_string(),
        };

        dashboard.create_transaction(&form).await.unwrap();
        let body = transport.body_of(0);
        assert_eq!(body["contaId"], 2);
        assert_eq!(body["type"], "saida");
        assert_eq!(body["amount"], 35.9);
    }

    #[tokio::test]
    async fn test_unauthorized_from_any_operation_clears_session() {
        let (transport, session, dashboard) = setup();
        transport.respond(401, "");

        let err = dashboard.delete_transaction(8).await.unwrap_err();
        assert!(err.requires_login());
        assert_eq!(session.token(), None);

        // With the token gone nothing else goes out
        let err = dashboard.load().await.unwrap_err();
        assert_eq!(err, DashboardError::Gateway(GatewayError::SessionExpired));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_api_error_keeps_server_message() {
        let (transport, _, dashboard) = setup();
        transport.respond(409, r#"{"message": "Conta possui transações"}"#);

        let err = dashboard.delete_account(1).await.unwrap_err();
        assert_eq!(err.user_message(), "API Error: Conta possui transações");
        assert_eq!(transport.calls()[0], (Method::Delete, "http://api.test/api/contas/1".to_string()));
    }

    #[tokio::test]
    async fn test_network_error_gets_generic_message() {
        let (transport, _, dashboard) = setup();
        transport.fail("offline");

        let err = dashboard.disconnect_bank(&RecordId::Number(4)).await.unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(Notice::from(&err).kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_reload_failure_still_reports_success() {
        let (transport, _, dashboard) = setup();
        transport.respond(200, "{}").respond(500, "");

        let outcome = dashboard
            .delete_category(&RecordId::Text("abc".to_string()))
            .await
            .unwrap();
        assert_eq!(outcome.notice, Notice::success("Category deleted successfully!"));
        assert!(outcome.reload.is_err());
        assert_eq!(transport.calls()[0].1, "http://api.test/api/categorias/abc");
    }

    #[tokio::test]
    async fn test_deletes_hit_their_endpoints_then_reload() {
        let (transport, _, dashboard) = setup();
        for _ in 0..3 {
            transport.respond(200, "").respond(200, SNAPSHOT);
        }

        dashboard.delete_account(2).await.unwrap();
        dashboard.delete_transaction(41).await.unwrap();
        let outcome = dashboard
            .disconnect_bank(&RecordId::Number(7))
            .await
            .unwrap();

        assert_eq!(outcome.notice, Notice::success("Bank account disconnected."));
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Delete, "http://api.test/api/contas/2".to_string()),
                (Method::Get, "http://api.test/api/data/all".to_string()),
                (Method::Delete, "http://api.test/api/transacoes/41".to_string()),
                (Method::Get, "http://api.test/api/data/all".to_string()),
                (Method::Delete, "http://api.test/api/connect/7".to_string()),
                (Method::Get, "http://api.test/api/data/all".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_bank_import_targets_first_account() {
        let (transport, _, dashboard) = setup();
        transport.respond(200, "{}").respond(200, SNAPSHOT);
        let form = BankImportForm {
            bank_name: "Inter".to_string(),
            transaction_count: "5".to_string(),
        };

        dashboard.simulate_bank_import(&form, &store()).await.unwrap();
        assert_eq!(
            transport.body_of(0),
            serde_json::json!({"bankName": "Inter", "numTransactions": 5, "contaId": 1})
        );
    }

    #[tokio::test]
    async fn test_bank_import_needs_an_account() {
        let (transport, _, dashboard) = setup();
        let empty = ClientStore::from_snapshot(Snapshot {
            accounts: Vec::<Account>::new(),
            categories: Vec::<Category>::new(),
            ..Snapshot::default()
        });

        let err = dashboard
            .simulate_bank_import(&BankImportForm::default(), &empty)
            .await
            .unwrap_err();
        assert_eq!(err, DashboardError::Validation(ValidationError::NoAccounts));
        assert!(transport.calls().is_empty());
    }
}
