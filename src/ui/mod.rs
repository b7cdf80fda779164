pub mod chip_input;
pub mod templates;
pub mod todo_page;

pub use chip_input::{ChipInput, ChipInputView, ChipOption};
pub use templates::Templates;
pub use todo_page::{PageQuery, TodoPage, View};
