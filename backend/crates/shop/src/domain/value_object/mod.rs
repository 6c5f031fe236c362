//! Value Objects
//!
//! Buyer input is HTML-escaped before it is validated, so a value that
//! passes here is already safe to embed in notification HTML.

pub mod customer_email;
pub mod customer_name;
pub mod numeric_field;
pub mod product_id;

pub use customer_email::CustomerEmail;
pub use customer_name::CustomerName;
pub use numeric_field::{ProductFields, parse_leading_int};
pub use product_id::ProductId;
