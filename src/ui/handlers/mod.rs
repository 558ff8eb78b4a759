//! Handler modules for keyboard input, catalog browsing, forms and history.

mod catalog_handler;
mod form_handler;
mod history_handler;
mod input_handler;

pub use catalog_handler::CatalogHandler;
pub use form_handler::FormHandler;
pub use history_handler::{HistoryHandler, SESSIONS_PER_PAGE, total_pages};
pub use input_handler::InputHandler;
