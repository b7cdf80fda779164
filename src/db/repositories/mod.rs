pub mod assignments;
pub mod discussions;
pub mod todos;
pub mod users;

pub use assignments::AssignmentRepo;
pub use discussions::DiscussionRepo;
pub use todos::TodoRepo;
pub use users::PublicUserRepo;
