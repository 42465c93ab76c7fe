pub mod transfer_form;

pub use transfer_form::TransferFormView;
