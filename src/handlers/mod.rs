pub mod error;
pub mod login_page_handler;
pub mod oauth;

pub use login_page_handler::{index_handler, login_page_handler};
pub use oauth::{facebook_login_handler, google_login_handler};
