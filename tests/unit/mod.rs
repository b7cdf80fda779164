mod extractor;
mod templates;
mod todo_page;
