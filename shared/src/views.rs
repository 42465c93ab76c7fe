//! Read-only projections of the [`ClientStore`] used by the UI.
//!
//! Components render these rows as-is; nothing here touches the network or
//! mutates the store, so every view can be rebuilt from scratch after a reload.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::money::CurrencyFormat;
use crate::store::ClientStore;
use crate::{RecordId, Transaction, TransactionKind, TRANSFER_CATEGORY};

/// Shown in place of an account that has been deleted
pub const ACCOUNT_REMOVED: &str = "Account Removed";

/// Sidebar name when the API sends no user name
pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub formatted_balance: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Colour treatment of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "text-success",
            Tone::Danger => "text-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub kind_label: &'static str,
    pub tone: Tone,
    pub formatted_amount: String,
    pub account_name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankConnectionRow {
    pub id: RecordId,
    pub bank_name: String,
    pub account_name: String,
    pub imported_count: Option<u32>,
    pub connected_at: Option<String>,
}

pub fn account_rows(store: &ClientStore, currency: &CurrencyFormat) -> Vec<AccountRow> {
    store
        .accounts()
        .iter()
        .map(|a| AccountRow {
            id: a.id,
            name: a.name.clone(),
            formatted_balance: currency.format(a.balance),
        })
        .collect()
}

/// Options for every account select (transaction, transfer-from, transfer-to).
/// All three get the same list; picking the same account twice is rejected on submit.
pub fn account_options(store: &ClientStore, currency: &CurrencyFormat) -> Vec<SelectOption> {
    store
        .accounts()
        .iter()
        .map(|a| SelectOption {
            value: a.id.to_string(),
            label: format!("{} ({})", a.name, currency.format(a.balance)),
        })
        .collect()
}

pub fn category_rows(store: &ClientStore) -> Vec<CategoryRow> {
    store
        .categories()
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
        })
        .collect()
}

/// Category select options: the user's categories followed by the transfer category
pub fn category_options(store: &ClientStore) -> Vec<SelectOption> {
    store
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .chain(std::iter::once(TRANSFER_CATEGORY))
        .map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        })
        .collect()
}

fn date_key(date: &str) -> Option<NaiveDate> {
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Transactions newest first. Equal dates keep their input order and
/// unparseable dates sink to the bottom.
pub fn sorted_transactions(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| match (date_key(&a.date), date_key(&b.date)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

fn account_name(store: &ClientStore, account_id: Option<i64>) -> String {
    account_id
        .and_then(|id| store.account(id))
        .map(|a| a.name.clone())
        .unwrap_or_else(|| ACCOUNT_REMOVED.to_string())
}

pub fn transaction_rows(store: &ClientStore, currency: &CurrencyFormat) -> Vec<TransactionRow> {
    sorted_transactions(store.transactions())
        .into_iter()
        .map(|t| {
            let (kind_label, tone) = match t.kind {
                TransactionKind::Inflow => ("INFLOW", Tone::Success),
                TransactionKind::Outflow => ("OUTFLOW", Tone::Danger),
                TransactionKind::Other => ("OTHER", Tone::Danger),
            };
            TransactionRow {
                id: t.id,
                date: t.date.clone(),
                description: t.description.clone(),
                kind_label,
                tone,
                formatted_amount: currency.format(t.amount),
                account_name: account_name(store, t.account_id),
                category: t.category.clone(),
            }
        })
        .collect()
}

pub fn bank_connection_rows(store: &ClientStore) -> Vec<BankConnectionRow> {
    store
        .bank_connections()
        .iter()
        .map(|b| BankConnectionRow {
            id: b.id.clone(),
            bank_name: b.bank_name.clone(),
            account_name: account_name(store, b.account_id),
            imported_count: b.imported_count,
            connected_at: b.connected_at.clone(),
        })
        .collect()
}

pub fn user_display_name(store: &ClientStore) -> String {
    store
        .user()
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_USER_NAME)
        .to_string()
}
