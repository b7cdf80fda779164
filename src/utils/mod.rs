pub mod form_fields;

pub use form_fields::{blank_as_none, empty_string_as_none, optional_id};
