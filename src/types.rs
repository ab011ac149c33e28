pub mod author;
pub mod book;
pub mod id;
pub mod link;

pub use author::Author;
pub use book::Book;
pub use id::Id;
pub use link::Link;
