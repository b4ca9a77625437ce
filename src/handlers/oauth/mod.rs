pub mod login_handler;

pub use login_handler::{facebook_login_handler, google_login_handler};
