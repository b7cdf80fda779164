pub mod discussions_service;
pub mod todos_service;
pub mod users_service;

pub use discussions_service::DiscussionsService;
pub use todos_service::TodosService;
pub use users_service::UsersService;
