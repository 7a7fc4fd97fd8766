//! tally-app: application state, reducer, receipt simulation and form input

pub mod form;
pub mod privacy;
pub mod receipt;
pub mod state;

pub use form::{parse_amount, ExpenseDraft, ValidExpense, FORM_CATEGORIES};
pub use privacy::{PrivacySettings, PrivacyToggle};
pub use receipt::{mock_extracted_items, ExtractedItem, ItemEdit, ReceiptScan};
pub use state::{reduce, Action, AppState, Screen};
