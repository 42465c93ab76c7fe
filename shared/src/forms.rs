//! Form input, validation and request payloads.
//!
//! Each form keeps the raw strings the user typed. `validate` checks them
//! against the current store and turns them into the request body the API
//! expects; a validation failure means no request is ever made.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::parse_localized;
use crate::store::ClientStore;
use crate::{
    BankImportRequest, NewAccount, NewCategory, NewTransaction, TransactionKind, TransferRequest,
};

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Field values plus submit progress for one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F> {
    pub fields: F,
    pub phase: FormPhase,
    pub error: Option<String>,
}

impl<F: Default + Clone> FormState<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            phase: FormPhase::Idle,
            error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn validating(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            phase: FormPhase::Validating,
            error: None,
        }
    }

    pub fn submitting(&self) -> Self {
        Self {
            phase: FormPhase::Submitting,
            ..self.clone()
        }
    }

    /// Submission went through: the form starts over empty
    pub fn succeeded(&self) -> Self {
        Self::new(F::default())
    }

    /// Submission failed: keep what the user typed so they can fix it
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            fields: self.fields.clone(),
            phase: FormPhase::Idle,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub balance: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<NewAccount, ValidationError> {
        let name = self.name.trim();
        let balance = parse_localized(&self.balance);
        match (name.is_empty(), balance) {
            (false, Some(balance)) => Ok(NewAccount {
                name: name.to_string(),
                balance,
            }),
            _ => Err(ValidationError::IncompleteFields),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    /// Rejects blank names and names already in the store (ignoring case).
    /// This only checks the last loaded snapshot.
    pub fn validate(&self, store: &ClientStore) -> Result<NewCategory, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if store.has_category(name) {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        Ok(NewCategory {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    /// Selected account id as it comes out of the select
    pub account_id: String,
    pub category: String,
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Inflow,
            account_id: String::new(),
            category: String::new(),
            date: String::new(),
        }
    }
}

impl TransactionForm {
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let description = self.description.trim();
        let amount = parse_localized(&self.amount).filter(|a| *a > 0.0);
        let account_id = self.account_id.trim().parse::<i64>().ok();
        let category = self.category.trim();
        let date = self.date.trim();
        let date_ok = NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok();

        match (amount, account_id) {
            (Some(amount), Some(account_id))
                if !description.is_empty()
                    && !category.is_empty()
                    && date_ok
                    && self.kind != TransactionKind::Other =>
            {
                Ok(NewTransaction {
                    description: description.to_string(),
                    amount,
                    kind: self.kind,
                    date: date.to_string(),
                    account_id,
                    category: category.to_string(),
                })
            }
            _ => Err(ValidationError::IncompleteFields),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    pub from_id: String,
    pub to_id: String,
    pub amount: String,
}

impl TransferForm {
    /// Checks the transfer against the balances of the last loaded snapshot.
    /// `today` becomes the transfer date.
    pub fn validate(
        &self,
        store: &ClientStore,
        today: NaiveDate,
    ) -> Result<TransferRequest, ValidationError> {
        let from_id = self.from_id.trim().parse::<i64>().ok();
        let to_id = self.to_id.trim().parse::<i64>().ok();
        let amount = parse_localized(&self.amount).filter(|a| *a > 0.0);

        let (from_id, to_id, amount) = match (from_id, to_id, amount) {
            (Some(f), Some(t), Some(a)) => (f, t, a),
            _ => return Err(ValidationError::IncompleteFields),
        };

        if from_id == to_id {
            return Err(ValidationError::SameAccount);
        }

        let from = store.account(from_id).ok_or(ValidationError::UnknownAccount)?;
        if store.account(to_id).is_none() {
            return Err(ValidationError::UnknownAccount);
        }
        if from.balance < amount {
            return Err(ValidationError::InsufficientBalance(from.name.clone()));
        }

        Ok(TransferRequest {
            from_id,
            to_id,
            amount,
            date: today.format("%Y-%m-%d").to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankImportForm {
    pub bank_name: String,
    pub transaction_count: String,
}

impl Default for BankImportForm {
    fn default() -> Self {
        Self {
            bank_name: String::new(),
            transaction_count: "10".to_string(),
        }
    }
}

impl BankImportForm {
    /// Imports always land in the first account of the snapshot
    pub fn validate(&self, store: &ClientStore) -> Result<BankImportRequest, ValidationError> {
        let first = store.accounts().first().ok_or(ValidationError::NoAccounts)?;
        let bank_name = self.bank_name.trim();
        let count = self
            .transaction_count
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|c| *c > 0);

        match count {
            Some(transaction_count) if !bank_name.is_empty() => Ok(BankImportRequest {
                bank_name: bank_name.to_string(),
                transaction_count,
                account_id: first.id,
            }),
            _ => Err(ValidationError::IncompleteFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, Category, RecordId, Snapshot};

    fn store() -> ClientStore {
        ClientStore::from_snapshot(Snapshot {
            accounts: vec![
                Account {
                    id: 1,
                    name: "Corrente".to_string(),
                    balance: 500.0,
                },
                Account {
                    id: 2,
                    name: "Poupança".to_string(),
                    balance: 50.0,
                },
            ],
            categories: vec![Category {
                id: RecordId::Number(1),
                name: "Mercado".to_string(),
            }],
            ..Snapshot::default()
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_account_form() {
        let form = AccountForm {
            name: "  Nubank ".to_string(),
            balance: "1.500,25".to_string(),
        };
        assert_eq!(
            form.validate().unwrap(),
            NewAccount {
                name: "Nubank".to_string(),
                balance: 1500.25
            }
        );

        let no_name = AccountForm {
            name: "   ".to_string(),
            balance: "10".to_string(),
        };
        assert_eq!(no_name.validate(), Err(ValidationError::IncompleteFields));

        let bad_balance = AccountForm {
            name: "Nubank".to_string(),
            balance: "lots".to_string(),
        };
        assert_eq!(bad_balance.validate(), Err(ValidationError::IncompleteFields));
    }

    #[test]
    fn test_account_form_accepts_negative_balance() {
        let form = AccountForm {
            name: "Cartão".to_string(),
            balance: "-200".to_string(),
        };
        assert_eq!(form.validate().unwrap().balance, -200.0);
    }

    #[test]
    fn test_category_form_rejects_duplicates_ignoring_case() {
        let form = CategoryForm {
            name: "MERCADO".to_string(),
        };
        assert_eq!(
            form.validate(&store()),
            Err(ValidationError::DuplicateCategory("MERCADO".to_string()))
        );

        let blank = CategoryForm::default();
        assert_eq!(blank.validate(&store()), Err(ValidationError::EmptyCategoryName));

        let fresh = CategoryForm {
            name: " Lazer ".to_string(),
        };
        assert_eq!(fresh.validate(&store()).unwrap().name, "Lazer");
    }

    fn transaction_form() -> TransactionForm {
        TransactionForm {
            description: "Aluguel".to_string(),
            amount: "1.200,00".to_string(),
            kind: TransactionKind::Outflow,
            account_id: "1".to_string(),
            category: "Moradia".to_string(),
            date: "2024-05-10".to_string(),
        }
    }

    #[test]
    fn test_transaction_form_builds_payload() {
        let payload = transaction_form().validate().unwrap();
        assert_eq!(payload.account_id, 1);
        assert_eq!(payload.amount, 1200.0);
        assert_eq!(payload.kind, TransactionKind::Outflow);
        assert_eq!(payload.date, "2024-05-10");
    }

    #[test]
    fn test_transaction_form_requires_every_field() {
        let cases = [
            TransactionForm {
                description: " ".to_string(),
                ..transaction_form()
            },
            TransactionForm {
                amount: "0".to_string(),
                ..transaction_form()
            },
            TransactionForm {
                amount: "-5".to_string(),
                ..transaction_form()
            },
            TransactionForm {
                account_id: String::new(),
                ..transaction_form()
            },
            TransactionForm {
                account_id: "abc".to_string(),
                ..transaction_form()
            },
            TransactionForm {
                category: String::new(),
                ..transaction_form()
            },
            TransactionForm {
                date: String::new(),
                ..transaction_form()
            },
            TransactionForm {
                kind: TransactionKind::Other,
                ..transaction_form()
            },
        ];
        for form in cases {
            assert_eq!(form.validate(), Err(ValidationError::IncompleteFields), "{:?}", form);
        }
    }

    #[test]
    fn test_transfer_form() {
        let form = TransferForm {
            from_id: "1".to_string(),
            to_id: "2".to_string(),
            amount: "200".to_string(),
        };
        assert_eq!(
            form.validate(&store(), today()).unwrap(),
            TransferRequest {
                from_id: 1,
                to_id: 2,
                amount: 200.0,
                date: "2024-06-01".to_string(),
            }
        );
    }

    #[test]
    fn test_transfer_form_rejections() {
        let same = TransferForm {
            from_id: "1".to_string(),
            to_id: "1".to_string(),
            amount: "10".to_string(),
        };
        assert_eq!(same.validate(&store(), today()), Err(ValidationError::SameAccount));

        let too_much = TransferForm {
            from_id: "2".to_string(),
            to_id: "1".to_string(),
            amount: "50,01".to_string(),
        };
        assert_eq!(
            too_much.validate(&store(), today()),
            Err(ValidationError::InsufficientBalance("Poupança".to_string()))
        );

        let exact = TransferForm {
            amount: "50".to_string(),
            ..too_much.clone()
        };
        assert!(exact.validate(&store(), today()).is_ok());

        let zero = TransferForm {
            amount: "0".to_string(),
            ..too_much.clone()
        };
        assert_eq!(zero.validate(&store(), today()), Err(ValidationError::IncompleteFields));

        let gone = TransferForm {
            from_id: "9".to_string(),
            to_id: "1".to_string(),
            amount: "1".to_string(),
        };
        assert_eq!(gone.validate(&store(), today()), Err(ValidationError::UnknownAccount));
    }

    #[test]
    fn test_bank_import_form() {
        let form = BankImportForm {
            bank_name: "Itaú".to_string(),
            ..BankImportForm::default()
        };
        let request = form.validate(&store()).unwrap();
        assert_eq!(request.account_id, 1);
        assert_eq!(request.transaction_count, 10);

        let empty_store = ClientStore::from_snapshot(Snapshot::default());
        assert_eq!(form.validate(&empty_store), Err(ValidationError::NoAccounts));

        let zero = BankImportForm {
            bank_name: "Itaú".to_string(),
            transaction_count: "0".to_string(),
        };
        assert_eq!(zero.validate(&store()), Err(ValidationError::IncompleteFields));
    }

    #[test]
    fn test_form_state_cycle() {
        let state = FormState::new(AccountForm {
            name: "Nubank".to_string(),
            balance: "x".to_string(),
        });
        assert!(!state.is_busy());

        let validating = state.validating();
        assert_eq!(validating.phase, FormPhase::Validating);

        let failed = validating.failed("Please fill in all fields correctly");
        assert_eq!(failed.phase, FormPhase::Idle);
        assert_eq!(failed.fields.name, "Nubank");
        assert!(failed.error.is_some());

        let done = failed.validating().submitting().succeeded();
        assert_eq!(done, FormState::new(AccountForm::default()));
    }
}
