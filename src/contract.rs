//! The request/response contract of the Library API.
//!
//! Each [Scenario] is one request issued against a seeded [Fixture] together
//! with the status the service is expected to answer with. Some scenarios also
//! pin fields of the response body.
//!
//! `Accept: application/xml` is answered with 500 by the service. That is
//! asserted as part of the contract rather than worked around.

use std::fmt::Display;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::info;

use crate::{
    client::{paths, ApiRequest, ApiResponse, MediaType},
    error::{Error, Result},
    fixture::Fixture,
    types::{Author, Book, Id},
};

/// Coarse classification of a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Success,
    ClientPrecondition,
    ServerDefect,
    Unexpected,
}

impl Outcome {
    pub fn classify(status: StatusCode) -> Self {
        if status.is_success() {
            Outcome::Success
        } else if status.is_client_error() {
            Outcome::ClientPrecondition
        } else if status.is_server_error() {
            Outcome::ServerDefect
        } else {
            Outcome::Unexpected
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::ClientPrecondition => write!(f, "client precondition failure"),
            Outcome::ServerDefect => write!(f, "server defect"),
            Outcome::Unexpected => write!(f, "unexpected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    CreateAuthor,
    CreateAuthorInvalidDateOfBirth,
    CreateAuthorXmlInput,
    CreateAuthorXmlInputXmlOutput,
    CreateAuthorAtUnexistingId,
    CreateAuthorAtExistingId,
    CreateAuthorCollection,
    CreateAuthorWithBooks,
    CreateBookForAuthor,
    CreateBookForUnexistingAuthor,
    DeleteBookForAuthor,
    DeleteUnexistingBookForAuthor,
    DeleteBookForUnexistingAuthor,
    DeleteAuthor,
    DeleteUnexistingAuthor,
    GetAuthor,
    GetAuthorJson,
    GetAuthorXml,
    GetUnexistingAuthor,
    GetAuthors,
    GetBookForAuthor,
    GetBookForUnexistingAuthor,
    GetUnexistingBookForAuthor,
    GetBooksForAuthor,
    GetBooksForUnexistingAuthor,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario::CreateAuthor,
    Scenario::CreateAuthorInvalidDateOfBirth,
    Scenario::CreateAuthorXmlInput,
    Scenario::CreateAuthorXmlInputXmlOutput,
    Scenario::CreateAuthorAtUnexistingId,
    Scenario::CreateAuthorAtExistingId,
    Scenario::CreateAuthorCollection,
    Scenario::CreateAuthorWithBooks,
    Scenario::CreateBookForAuthor,
    Scenario::CreateBookForUnexistingAuthor,
    Scenario::DeleteBookForAuthor,
    Scenario::DeleteUnexistingBookForAuthor,
    Scenario::DeleteBookForUnexistingAuthor,
    Scenario::DeleteAuthor,
    Scenario::DeleteUnexistingAuthor,
    Scenario::GetAuthor,
    Scenario::GetAuthorJson,
    Scenario::GetAuthorXml,
    Scenario::GetUnexistingAuthor,
    Scenario::GetAuthors,
    Scenario::GetBookForAuthor,
    Scenario::GetBookForUnexistingAuthor,
    Scenario::GetUnexistingBookForAuthor,
    Scenario::GetBooksForAuthor,
    Scenario::GetBooksForUnexistingAuthor,
];

fn author(first: &str, last: &str, date_of_birth: Option<&str>, genre: &str) -> Author {
    Author {
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        date_of_birth: date_of_birth.map(Into::into),
        genre: Some(genre.into()),
        ..Author::default()
    }
}

/// The payload of [Scenario::CreateAuthor].
pub fn pesho() -> Author {
    author("Pesho", "Peshov", None, "Male")
}

fn gosho() -> Author {
    author("Gosho", "Goshov", Some("invalid date"), "male")
}

fn nice_book() -> Book {
    Book::new("Test Book", "Nice book")
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::CreateAuthor => "create_author",
            Scenario::CreateAuthorInvalidDateOfBirth => "create_author_invalid_date_of_birth",
            Scenario::CreateAuthorXmlInput => "create_author_xml_input",
            Scenario::CreateAuthorXmlInputXmlOutput => "create_author_xml_input_xml_output",
            Scenario::CreateAuthorAtUnexistingId => "create_author_at_unexisting_id",
            Scenario::CreateAuthorAtExistingId => "create_author_at_existing_id",
            Scenario::CreateAuthorCollection => "create_author_collection",
            Scenario::CreateAuthorWithBooks => "create_author_with_books",
            Scenario::CreateBookForAuthor => "create_book_for_author",
            Scenario::CreateBookForUnexistingAuthor => "create_book_for_unexisting_author",
            Scenario::DeleteBookForAuthor => "delete_book_for_author",
            Scenario::DeleteUnexistingBookForAuthor => "delete_unexisting_book_for_author",
            Scenario::DeleteBookForUnexistingAuthor => "delete_book_for_unexisting_author",
            Scenario::DeleteAuthor => "delete_author",
            Scenario::DeleteUnexistingAuthor => "delete_unexisting_author",
            Scenario::GetAuthor => "get_author",
            Scenario::GetAuthorJson => "get_author_json",
            Scenario::GetAuthorXml => "get_author_xml",
            Scenario::GetUnexistingAuthor => "get_unexisting_author",
            Scenario::GetAuthors => "get_authors",
            Scenario::GetBookForAuthor => "get_book_for_author",
            Scenario::GetBookForUnexistingAuthor => "get_book_for_unexisting_author",
            Scenario::GetUnexistingBookForAuthor => "get_unexisting_book_for_author",
            Scenario::GetBooksForAuthor => "get_books_for_author",
            Scenario::GetBooksForUnexistingAuthor => "get_books_for_unexisting_author",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        SCENARIOS.iter().copied().find(|s| s.name() == name)
    }

    pub fn precondition(&self) -> &'static str {
        use Scenario::*;
        match self {
            CreateAuthor
            | CreateAuthorXmlInput
            | CreateAuthorXmlInputXmlOutput
            | CreateAuthorCollection
            | CreateAuthorWithBooks
            | GetAuthors => "none",
            CreateAuthorInvalidDateOfBirth => "malformed date of birth",
            CreateAuthorAtExistingId
            | DeleteAuthor
            | GetAuthor
            | GetAuthorJson
            | GetAuthorXml
            | CreateBookForAuthor
            | GetBooksForAuthor => "author exists",
            CreateAuthorAtUnexistingId
            | GetUnexistingAuthor
            | DeleteUnexistingAuthor
            | CreateBookForUnexistingAuthor
            | DeleteBookForUnexistingAuthor
            | GetBookForUnexistingAuthor
            | GetBooksForUnexistingAuthor => "author does not exist",
            DeleteBookForAuthor | GetBookForAuthor => "author and book exist",
            DeleteUnexistingBookForAuthor | GetUnexistingBookForAuthor => "book does not exist",
        }
    }

    pub fn expected_status(&self) -> StatusCode {
        use Scenario::*;
        match self {
            CreateAuthor
            | CreateAuthorXmlInput
            | CreateAuthorCollection
            | CreateAuthorWithBooks
            | CreateBookForAuthor => StatusCode::CREATED,
            CreateAuthorInvalidDateOfBirth => StatusCode::BAD_REQUEST,
            CreateAuthorXmlInputXmlOutput | GetAuthorXml => StatusCode::INTERNAL_SERVER_ERROR,
            CreateAuthorAtExistingId => StatusCode::CONFLICT,
            DeleteBookForAuthor | DeleteAuthor => StatusCode::NO_CONTENT,
            GetAuthor | GetAuthorJson | GetAuthors | GetBookForAuthor | GetBooksForAuthor => {
                StatusCode::OK
            }
            CreateAuthorAtUnexistingId
            | CreateBookForUnexistingAuthor
            | DeleteUnexistingBookForAuthor
            | DeleteBookForUnexistingAuthor
            | DeleteUnexistingAuthor
            | GetUnexistingAuthor
            | GetBookForUnexistingAuthor
            | GetUnexistingBookForAuthor
            | GetBooksForUnexistingAuthor => StatusCode::NOT_FOUND,
        }
    }

    pub fn expected_outcome(&self) -> Outcome {
        Outcome::classify(self.expected_status())
    }

    /// The request this scenario sends, given the seeded ids.
    pub fn request(&self, author_id: Id, book_id: Id) -> Result<ApiRequest> {
        use Scenario::*;
        let missing = Id::nil();
        Ok(match self {
            CreateAuthor => ApiRequest::post(paths::authors(), &pesho())?,
            CreateAuthorInvalidDateOfBirth => ApiRequest::post(
                paths::authors(),
                &author("Gosho", "Goshkov", Some("invalid date"), "Male"),
            )?,
            CreateAuthorXmlInput => {
                ApiRequest::post(paths::authors(), &pesho())?.content_type(MediaType::Xml)
            }
            CreateAuthorXmlInputXmlOutput => ApiRequest::post(paths::authors(), &pesho())?
                .content_type(MediaType::Xml)
                .accept(MediaType::Xml),
            CreateAuthorAtUnexistingId => ApiRequest::post(paths::author(missing), &gosho())?,
            CreateAuthorAtExistingId => ApiRequest::post(paths::author(author_id), &gosho())?,
            CreateAuthorCollection => ApiRequest::post(
                paths::author_collections(),
                &vec![
                    author("FAuthor One", "LAuthor One", Some("1999-01-02"), "test"),
                    author("FAuthor Two", "LAuthor Two", Some("1991-02-01"), "test"),
                ],
            )?,
            CreateAuthorWithBooks => ApiRequest::post(
                paths::authors(),
                &Author {
                    books: Some(vec![
                        Book::new("Book One", "My first book"),
                        Book::new("Book Two", "My second book"),
                    ]),
                    ..author("Pesho", "Peshov", Some("1990-03-01"), "test")
                },
            )?,
            CreateBookForAuthor => ApiRequest::post(paths::books(author_id), &nice_book())?,
            CreateBookForUnexistingAuthor => {
                ApiRequest::post(paths::books(missing), &nice_book())?
            }
            DeleteBookForAuthor => ApiRequest::delete(paths::book(author_id, book_id)),
            DeleteUnexistingBookForAuthor => ApiRequest::delete(paths::book(author_id, missing)),
            DeleteBookForUnexistingAuthor => ApiRequest::delete(paths::book(missing, book_id)),
            DeleteAuthor => ApiRequest::delete(paths::author(author_id)),
            DeleteUnexistingAuthor => ApiRequest::delete(paths::author(missing)),
            GetAuthor => ApiRequest::get(paths::author(author_id)),
            GetAuthorJson => ApiRequest::get(paths::author(author_id)).accept(MediaType::Json),
            GetAuthorXml => ApiRequest::get(paths::author(author_id)).accept(MediaType::Xml),
            GetUnexistingAuthor => ApiRequest::get(paths::author(missing)),
            GetAuthors => ApiRequest::get(paths::authors()),
            GetBookForAuthor => ApiRequest::get(paths::book(author_id, book_id)),
            GetBookForUnexistingAuthor => ApiRequest::get(paths::book(missing, book_id)),
            GetUnexistingBookForAuthor => ApiRequest::get(paths::book(author_id, missing)),
            GetBooksForAuthor => ApiRequest::get(paths::books(author_id)),
            GetBooksForUnexistingAuthor => ApiRequest::get(paths::books(missing)),
        })
    }

    /// Send the scenario's request without checking the answer.
    pub async fn execute(&self, fixture: &Fixture) -> Result<ApiResponse> {
        let request = self.request(fixture.author_id(), fixture.book_id())?;
        fixture.client().send(&request).await
    }

    /// Send the scenario's request and check the status and any pinned body
    /// fields.
    pub async fn verify(&self, fixture: &Fixture) -> Result<ApiResponse> {
        let response = self
            .execute(fixture)
            .await?
            .expect_status(self.expected_status())?;
        self.check_body(fixture, &response)?;
        info!(scenario = self.name(), status = %response.status, "scenario passed");
        Ok(response)
    }

    fn check_body(&self, fixture: &Fixture, response: &ApiResponse) -> Result<()> {
        match self {
            Scenario::CreateAuthor => {
                let created: Author = response.json()?;
                let payload = pesho();
                expect_field("name", payload.composed_name(), created.name)?;
                expect_field("genre", payload.genre, created.genre)
            }
            Scenario::CreateBookForAuthor => {
                let created: Book = response.json()?;
                let payload = nice_book();
                expect_field("title", payload.title, created.title)?;
                expect_field("description", payload.description, created.description)
            }
            Scenario::GetAuthorJson => {
                let fetched: Author = response.json()?;
                expect_field(
                    "id",
                    Some(fixture.author_id().to_string()),
                    fetched.id.map(|id| id.to_string()),
                )
            }
            _ => Ok(()),
        }
    }
}

fn expect_field(
    field: &'static str,
    expected: Option<String>,
    actual: Option<String>,
) -> Result<()> {
    let expected = expected.unwrap_or_default();
    if actual.as_deref() != Some(expected.as_str()) {
        return Err(Error::UnexpectedBody {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
