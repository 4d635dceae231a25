//! UI Components
//!
//! Leptos components for the two screens.

mod add_item_form;
mod auth_panel;
mod auth_screen;
mod error_message;
mod todo_row;
mod todo_screen;

pub use add_item_form::AddItemForm;
pub use auth_panel::AuthPanel;
pub use auth_screen::AuthScreen;
pub use error_message::ErrorMessage;
pub use todo_row::TodoRow;
pub use todo_screen::TodoScreen;
