//! HTTP request handlers.
//!
//! One handler per method of the `/` dispatcher.

pub mod redirect;
pub mod shorten;
pub mod unsupported;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use unsupported::unsupported_method_handler;
