use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use shared::controller::Outcome;
use shared::forms::{
    AccountForm, BankImportForm, CategoryForm, FormState, TransactionForm, TransferForm,
};
use shared::{
    ClientStore, DashboardConfig, DashboardError, Notice, RecordId, Snapshot, ValidationError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::{NoticeCounter, ShownNotice};
use crate::services::api::api_client;
use crate::services::date_utils;
use crate::services::navigation::{confirm, redirect_to};

const CONFIRM_DELETE_ACCOUNT: &str =
    "Are you sure you want to delete this account? All of its transactions will be lost.";
const CONFIRM_DELETE_CATEGORY: &str =
    "Are you sure you want to delete this category? Its transactions will not be removed.";
const CONFIRM_DELETE_TRANSACTION: &str = "Delete this transaction?";
const CONFIRM_DISCONNECT_BANK: &str =
    "Disconnect this account? Imported transactions will not be removed automatically.";

#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub store: ClientStore,
    pub loading: bool,
    pub notice: Option<ShownNotice>,

    pub account_form: FormState<AccountForm>,
    pub category_form: FormState<CategoryForm>,
    pub transaction_form: FormState<TransactionForm>,
    pub transfer_form: FormState<TransferForm>,
    pub bank_form: FormState<BankImportForm>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: DashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct DashboardActions {
    pub reload: Callback<()>,
    pub dismiss_notice: Callback<()>,
    pub logout: Callback<()>,

    pub on_account_change: Callback<AccountForm>,
    pub submit_account: Callback<()>,
    pub delete_account: Callback<i64>,

    pub on_category_change: Callback<CategoryForm>,
    pub submit_category: Callback<()>,
    pub delete_category: Callback<RecordId>,

    pub on_transaction_change: Callback<TransactionForm>,
    pub submit_transaction: Callback<()>,
    pub delete_transaction: Callback<i64>,

    pub on_transfer_change: Callback<TransferForm>,
    pub submit_transfer: Callback<()>,

    pub on_bank_change: Callback<BankImportForm>,
    pub submit_bank_import: Callback<()>,
    pub disconnect_bank: Callback<RecordId>,
}

/// Where the results of API calls end up: the store, the notice banner, or
/// the login page.
#[derive(Clone)]
struct OutcomeSink {
    store: UseStateHandle<ClientStore>,
    notice: UseStateHandle<Option<ShownNotice>>,
    counter: Rc<RefCell<NoticeCounter>>,
    login_page: String,
}

impl OutcomeSink {
    fn replace_store(&self, snapshot: Snapshot) {
        self.store.set(self.store.replace(snapshot));
    }

    fn show(&self, notice: Notice) {
        let shown = self.counter.borrow_mut().stamp(notice);
        self.notice.set(Some(shown));
    }

    fn apply(&self, outcome: Outcome) {
        self.show(outcome.notice);
        match outcome.reload {
            Ok(snapshot) => self.replace_store(snapshot),
            Err(err) => self.report(&err),
        }
    }

    fn report(&self, err: &DashboardError) {
        log::error!("Dashboard request failed: {:?}", err);
        // Validation problems are shown next to the form instead
        if matches!(err, DashboardError::Validation(_)) {
            return;
        }
        self.show(Notice::from(err));
        if err.requires_login() {
            redirect_to(&self.login_page);
        }
    }
}

/// Run one form submission: check locally, send, then reset or keep the fields.
fn submit<F, V, R, Fut>(form: UseStateHandle<FormState<F>>, sink: OutcomeSink, validate: V, run: R)
where
    F: Default + Clone + 'static,
    V: FnOnce(&F) -> Result<(), ValidationError>,
    R: FnOnce(F) -> Fut + 'static,
    Fut: Future<Output = Result<Outcome, DashboardError>> + 'static,
{
    let current = (*form).clone();
    if current.is_busy() {
        return;
    }

    let checking = current.validating();
    if let Err(err) = validate(&checking.fields) {
        form.set(checking.failed(err.to_string()));
        return;
    }

    let submitting = checking.submitting();
    form.set(submitting.clone());
    spawn_local(async move {
        match run(submitting.fields.clone()).await {
            Ok(outcome) => {
                form.set(submitting.succeeded());
                sink.apply(outcome);
            }
            Err(err) => {
                form.set(submitting.failed(err.user_message()));
                sink.report(&err);
            }
        }
    });
}

/// Ask first, then run a delete
fn remove<R, Fut>(sink: OutcomeSink, question: &str, run: R)
where
    R: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Outcome, DashboardError>> + 'static,
{
    if !confirm(question) {
        return;
    }
    spawn_local(async move {
        match run().await {
            Ok(outcome) => sink.apply(outcome),
            Err(err) => sink.report(&err),
        }
    });
}

fn edit<F: Clone + 'static>(form: &UseStateHandle<FormState<F>>) -> Callback<F> {
    let form = form.clone();
    Callback::from(move |fields: F| {
        form.set(FormState {
            fields,
            ..(*form).clone()
        });
    })
}

#[hook]
pub fn use_dashboard(config: &DashboardConfig) -> UseDashboardResult {
    let client = api_client(config);

    let store = use_state(ClientStore::new);
    let loading = use_state(|| true);
    let notice = use_state(|| None::<ShownNotice>);
    let counter = use_mut_ref(NoticeCounter::default);

    let account_form = use_state(FormState::<AccountForm>::default);
    let category_form = use_state(FormState::<CategoryForm>::default);
    let transaction_form = use_state(FormState::<TransactionForm>::default);
    let transfer_form = use_state(FormState::<TransferForm>::default);
    let bank_form = use_state(FormState::<BankImportForm>::default);

    let sink = OutcomeSink {
        store: store.clone(),
        notice: notice.clone(),
        counter,
        login_page: config.login_page.clone(),
    };

    let reload = {
        let client = client.clone();
        let sink = sink.clone();
        let loading = loading.clone();

        Callback::from(move |_: ()| {
            let client = client.clone();
            let sink = sink.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match client.load().await {
                    Ok(snapshot) => sink.replace_store(snapshot),
                    Err(err) => sink.report(&err),
                }
                loading.set(false);
            });
        })
    };

    // Initial load. Without a token there is nothing to load.
    {
        let reload = reload.clone();
        let session = client.gateway().session().clone();
        let login_page = config.login_page.clone();
        use_effect_with((), move |_| {
            if session.has_token() {
                reload.emit(());
            } else {
                log::warn!("No session token, sending the user to {}", login_page);
                redirect_to(&login_page);
            }
            || ()
        });
    }

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let logout = {
        let session = client.gateway().session().clone();
        let login_page = config.login_page.clone();
        Callback::from(move |_: ()| {
            log::info!("Logging out");
            session.clear_all();
            redirect_to(&login_page);
        })
    };

    // Accounts
    let submit_account = {
        let client = client.clone();
        let form = account_form.clone();
        let sink = sink.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            submit(
                form.clone(),
                sink.clone(),
                |f: &AccountForm| f.validate().map(drop),
                move |f| async move { client.create_account(&f).await },
            );
        })
    };

    let delete_account = {
        let client = client.clone();
        let sink = sink.clone();
        Callback::from(move |id: i64| {
            let client = client.clone();
            remove(sink.clone(), CONFIRM_DELETE_ACCOUNT, move || async move {
                client.delete_account(id).await
            });
        })
    };

    // Categories
    let submit_category = {
        let client = client.clone();
        let form = category_form.clone();
        let sink = sink.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            let current = (*store).clone();
            let check = current.clone();
            submit(
                form.clone(),
                sink.clone(),
                move |f: &CategoryForm| f.validate(&check).map(drop),
                move |f| async move { client.create_category(&f, &current).await },
            );
        })
    };

    let delete_category = {
        let client = client.clone();
        let sink = sink.clone();
        Callback::from(move |id: RecordId| {
            let client = client.clone();
            remove(sink.clone(), CONFIRM_DELETE_CATEGORY, move || async move {
                client.delete_category(&id).await
            });
        })
    };

    // Transactions
    let submit_transaction = {
        let client = client.clone();
        let form = transaction_form.clone();
        let sink = sink.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            submit(
                form.clone(),
                sink.clone(),
                |f: &TransactionForm| f.validate().map(drop),
                move |f| async move { client.create_transaction(&f).await },
            );
        })
    };

    let delete_transaction = {
        let client = client.clone();
        let sink = sink.clone();
        Callback::from(move |id: i64| {
            let client = client.clone();
            remove(sink.clone(), CONFIRM_DELETE_TRANSACTION, move || async move {
                client.delete_transaction(id).await
            });
        })
    };

    // Transfers
    let submit_transfer = {
        let client = client.clone();
        let form = transfer_form.clone();
        let sink = sink.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            let current = (*store).clone();
            let check = current.clone();
            let today = date_utils::today();
            submit(
                form.clone(),
                sink.clone(),
                move |f: &TransferForm| f.validate(&check, today).map(drop),
                move |f| async move { client.transfer(&f, &current, today).await },
            );
        })
    };

    // Bank connections
    let submit_bank_import = {
        let client = client.clone();
        let form = bank_form.clone();
        let sink = sink.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            let current = (*store).clone();
            let check = current.clone();
            submit(
                form.clone(),
                sink.clone(),
                move |f: &BankImportForm| f.validate(&check).map(drop),
                move |f| async move { client.simulate_bank_import(&f, &current).await },
            );
        })
    };

    let disconnect_bank = {
        let client = client.clone();
        let sink = sink.clone();
        Callback::from(move |id: RecordId| {
            let client = client.clone();
            remove(sink.clone(), CONFIRM_DISCONNECT_BANK, move || async move {
                client.disconnect_bank(&id).await
            });
        })
    };

    UseDashboardResult {
        state: DashboardState {
            store: (*store).clone(),
            loading: *loading,
            notice: (*notice).clone(),
            account_form: (*account_form).clone(),
            category_form: (*category_form).clone(),
            transaction_form: (*transaction_form).clone(),
            transfer_form: (*transfer_form).clone(),
            bank_form: (*bank_form).clone(),
        },
        actions: DashboardActions {
            reload,
            dismiss_notice,
            logout,
            on_account_change: edit(&account_form),
            submit_account,
            delete_account,
            on_category_change: edit(&category_form),
            submit_category,
            delete_category,
            on_transaction_change: edit(&transaction_form),
            submit_transaction,
            delete_transaction,
            on_transfer_change: edit(&transfer_form),
            submit_transfer,
            on_bank_change: edit(&bank_form),
            submit_bank_import,
            disconnect_bank,
        },
    }
}
