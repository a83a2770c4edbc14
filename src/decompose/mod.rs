//! Phone, e-mail, domain and vehicle plate decomposition.
//!
//! These parse a query into structured fields using the static tables in
//! [`crate::core::tables`]. No network access; the MX probe that completes an
//! [`EmailRecord`](crate::core::EmailRecord) lives in [`crate::lookup`].

mod domain;
mod email;
mod phone;
mod plate;

pub use domain::normalize_domain;
pub use email::decompose_email;
pub use phone::decompose_phone;
pub use plate::decompose_plate;
