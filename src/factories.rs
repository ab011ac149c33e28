//! Minimally valid payloads used to seed fixtures.

use crate::types::{Author, Book};

pub struct AuthorFactory;

impl AuthorFactory {
    pub fn create() -> Author {
        Author {
            first_name: Some("Test".into()),
            last_name: Some("Author".into()),
            date_of_birth: Some("1980-01-01".into()),
            genre: Some("test".into()),
            ..Author::default()
        }
    }

    /// Same as [AuthorFactory::create], with `run_tag` appended to the last
    /// name so entities seeded by one run can be told apart on the shared
    /// service.
    pub fn namespaced(run_tag: &str) -> Author {
        let mut author = Self::create();
        if !run_tag.is_empty() {
            author.last_name = Some(format!("Author {run_tag}"));
        }
        author
    }
}

pub struct BookFactory;

impl BookFactory {
    pub fn create() -> Book {
        Book::new("Test Title", "Test Discription")
    }
}
