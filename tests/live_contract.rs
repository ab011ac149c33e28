//! The contract checked against the hosted Library API.
//!
//! These need network access and a reachable service, so they are ignored by
//! default. Run them with `cargo test --test live_contract -- --ignored`,
//! pointing `LIBRARY_BASE_URL` (or `library.toml`) at another deployment if
//! needed.

mod common;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;

use library_contract::{
    client::{paths, ApiRequest, LibraryClient},
    config::Config,
    contract::{pesho, Scenario},
    factories::BookFactory,
    fixture::Fixture,
    types::{Author, Book, Id},
};

async fn fixture() -> Fixture {
    common::init_tracing();
    dotenvy::dotenv().ok();
    let config = Config::read_config().expect("configuration");
    let client = LibraryClient::from_config(&config).expect("client");
    // A setup failure panics here, before the scenario under test runs.
    Fixture::setup(client, config.run_tag())
        .await
        .unwrap_or_else(|e| panic!("{e}"))
}

async fn verify(scenario: Scenario) {
    let fixture = fixture().await;
    if let Err(e) = scenario.verify(&fixture).await {
        panic!("{scenario}: {e}");
    }
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_created() {
    let fixture = fixture().await;
    let response = Scenario::CreateAuthor.verify(&fixture).await.unwrap();
    let author: Author = response.json().unwrap();
    assert_eq!(author.name.as_deref(), Some("Pesho Peshov"));
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_invalid_date_of_birth_bad_request() {
    verify(Scenario::CreateAuthorInvalidDateOfBirth).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_xml_input_created() {
    verify(Scenario::CreateAuthorXmlInput).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_xml_input_xml_output_internal_server_error() {
    verify(Scenario::CreateAuthorXmlInputXmlOutput).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_unexisting_not_found() {
    verify(Scenario::CreateAuthorAtUnexistingId).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_existing_conflict() {
    verify(Scenario::CreateAuthorAtExistingId).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_collection_created() {
    verify(Scenario::CreateAuthorCollection).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_author_with_books_created() {
    verify(Scenario::CreateAuthorWithBooks).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_book_for_author_created() {
    let fixture = fixture().await;
    let response = Scenario::CreateBookForAuthor.verify(&fixture).await.unwrap();
    let book: Book = response.json().unwrap();
    assert_eq!(book.title.as_deref(), Some("Test Book"));
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_book_for_unexisting_author_not_found() {
    verify(Scenario::CreateBookForUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn post_book_for_unexisting_author_not_found_for_any_payload() {
    let fixture = fixture().await;
    for book in [BookFactory::create(), Book::default()] {
        let request = ApiRequest::post(paths::books(Id::nil()), &book).unwrap();
        let response = fixture.client().send(&request).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn delete_book_for_author_no_content() {
    verify(Scenario::DeleteBookForAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn delete_book_for_author_unexisting_book_not_found() {
    verify(Scenario::DeleteUnexistingBookForAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn delete_book_for_author_unexisting_author_not_found() {
    verify(Scenario::DeleteBookForUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn delete_author_no_content() {
    let fixture = fixture().await;
    fixture
        .client()
        .delete_author(fixture.author_id())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn delete_author_unexisting_not_found() {
    verify(Scenario::DeleteUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_author_ok() {
    verify(Scenario::GetAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_author_json_ok() {
    verify(Scenario::GetAuthorJson).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_author_xml_internal_server_error() {
    verify(Scenario::GetAuthorXml).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_author_unexisting_not_found() {
    verify(Scenario::GetUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_authors_ok() {
    verify(Scenario::GetAuthors).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_book_for_author_ok() {
    verify(Scenario::GetBookForAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_book_for_author_unexisting_author_not_found() {
    verify(Scenario::GetBookForUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_book_for_author_unexisting_book_not_found() {
    verify(Scenario::GetUnexistingBookForAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_books_for_author_ok() {
    verify(Scenario::GetBooksForAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn get_books_for_author_unexisting_author_not_found() {
    verify(Scenario::GetBooksForUnexistingAuthor).await;
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn created_author_round_trips_through_get() {
    let fixture = fixture().await;
    let fetched = fixture
        .client()
        .get_author(fixture.author_id())
        .await
        .unwrap();
    assert_eq!(fetched.id, Some(fixture.author_id()));
}

#[tokio::test]
#[ignore = "hits the hosted Library API"]
async fn author_creation_is_not_idempotent() {
    let fixture = fixture().await;
    let first = fixture.client().create_author(&pesho()).await.unwrap();
    let second = fixture.client().create_author(&pesho()).await.unwrap();
    assert!(first.id.is_some());
    assert_ne!(first.id, second.id);
}
