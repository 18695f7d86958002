pub use super::book::Entity as Book;
pub use super::book_shelf::Entity as BookShelf;
pub use super::comment::Entity as Comment;
pub use super::confirmation_token::Entity as ConfirmationToken;
pub use super::topic::Entity as Topic;
pub use super::user::Entity as User;
