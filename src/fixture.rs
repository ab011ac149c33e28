use tracing::{error, info};

use crate::{
    client::LibraryClient,
    error::{Error, Result, SetupPhase},
    factories::{AuthorFactory, BookFactory},
    types::Id,
};

/// Seeded state for one scenario: a fresh author with one book assigned.
///
/// Every fixture seeds new entities on the shared service; nothing is cleaned
/// up afterwards, so callers must not assume an empty service.
#[derive(Debug, Clone)]
pub struct Fixture {
    client:    LibraryClient,
    run_tag:   String,
    author_id: Id,
    book_id:   Id,
}

impl Fixture {
    pub async fn setup(client: LibraryClient, run_tag: &str) -> Result<Self> {
        let author_id = Self::create_author(&client, run_tag)
            .await
            .map_err(|e| Self::failed(SetupPhase::CreateAuthor, e))?;
        let book_id = Self::assign_book(&client, author_id)
            .await
            .map_err(|e| Self::failed(SetupPhase::AssignBook, e))?;
        info!(%author_id, %book_id, run_tag, "fixture seeded");
        Ok(Self {
            client,
            run_tag: run_tag.to_string(),
            author_id,
            book_id,
        })
    }

    async fn create_author(client: &LibraryClient, run_tag: &str) -> Result<Id> {
        client
            .create_author(&AuthorFactory::namespaced(run_tag))
            .await?
            .id
            .ok_or(Error::MissingId { entity: "author" })
    }

    async fn assign_book(client: &LibraryClient, author_id: Id) -> Result<Id> {
        client
            .create_book(author_id, &BookFactory::create())
            .await?
            .id
            .ok_or(Error::MissingId { entity: "book" })
    }

    fn failed(phase: SetupPhase, source: Error) -> Error {
        error!(%phase, %source, "fixture setup failed");
        Error::setup(phase, source)
    }

    pub fn client(&self) -> &LibraryClient {
        &self.client
    }

    pub fn run_tag(&self) -> &str {
        &self.run_tag
    }

    pub fn author_id(&self) -> Id {
        self.author_id
    }

    pub fn book_id(&self) -> Id {
        self.book_id
    }
}
