//! Reusable UI components

pub mod ask_card;
pub mod auth_form;
pub mod chat_history;
pub mod loading;
pub mod navbar;
pub mod upload_card;

pub use ask_card::AskCard;
pub use auth_form::AuthPanel;
pub use chat_history::ChatHistory;
pub use loading::LoadingSpinner;
pub use navbar::Navbar;
pub use upload_card::UploadCard;
