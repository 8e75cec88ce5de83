//! HTML template rendering handlers for the website.

mod home;
mod payment;
mod profile;

pub use home::home_handler;
pub use payment::payment_handler;
pub use profile::profile_page_handler;
