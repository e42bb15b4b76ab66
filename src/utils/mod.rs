pub mod number;

pub use number::{format_delta, format_thousands};
