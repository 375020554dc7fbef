//! Contact form state

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
