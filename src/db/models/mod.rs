// Sub-modules organized by functional domain
pub mod api;
pub mod assignment;
pub mod discussion;
pub mod todo;
pub mod user;

// API response structures
pub use api::*;

// Todo models
pub use todo::*;

// Discussion models
pub use discussion::*;

// Assignment (todo <-> user join) models
pub use assignment::*;

// Public user directory
pub use user::*;
