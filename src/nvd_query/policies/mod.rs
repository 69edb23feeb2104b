mod argument_sanitizer;
mod date_mention;

pub use argument_sanitizer::{is_date_argument, sanitize_arguments};
pub use date_mention::has_date_mention;
