#![allow(dead_code)]
//! A stand-in for the hosted Library API, answering each request the way the
//! live service does. The nil id never exists; every other id does.

use library_contract::client::LibraryClient;
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, path_regex},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

const UUID: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";
const NIL: &str = "00000000-0000-0000-0000-000000000000";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_test_writer()
        .try_init()
        .ok();
}

fn json_body(request: &Request) -> Option<Value> {
    serde_json::from_slice(&request.body).ok()
}

fn segment(request: &Request, index: usize) -> Option<String> {
    request
        .url
        .path_segments()
        .and_then(|mut segments| segments.nth(index))
        .map(str::to_owned)
}

fn validation_error(field: &str) -> ResponseTemplate {
    let mut errors = serde_json::Map::new();
    errors.insert(field.to_string(), json!(["The value is not valid."]));
    ResponseTemplate::new(400).set_body_json(Value::Object(errors))
}

fn created_author(body: &Value) -> Result<Value, ResponseTemplate> {
    if let Some(date) = body.get("dateOfBirth").and_then(Value::as_str) {
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(validation_error("dateOfBirth"));
        }
    }
    let id = uuid::Uuid::new_v4();
    let first = body.get("firstName").and_then(Value::as_str).unwrap_or_default();
    let last = body.get("lastName").and_then(Value::as_str).unwrap_or_default();
    Ok(json!({
        "id": id,
        "name": format!("{first} {last}"),
        "genre": body.get("genre"),
        "links": [
            { "href": format!("/api/authors/{id}"), "rel": "self", "method": "GET" },
            { "href": format!("/api/authors/{id}"), "rel": "delete_author", "method": "DELETE" },
        ],
    }))
}

/// POST /api/authors. The body is parsed as JSON whatever the declared
/// content type.
struct CreateAuthor;

impl Respond for CreateAuthor {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(body) = json_body(request) else {
            return ResponseTemplate::new(400);
        };
        match created_author(&body) {
            Ok(author) => ResponseTemplate::new(201).set_body_json(author),
            Err(rejection) => rejection,
        }
    }
}

/// POST /api/authorcollections
struct CreateAuthorCollection;

impl Respond for CreateAuthorCollection {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(Value::Array(authors)) = json_body(request) else {
            return ResponseTemplate::new(400);
        };
        let mut created = Vec::with_capacity(authors.len());
        for author in &authors {
            match created_author(author) {
                Ok(author) => created.push(author),
                Err(rejection) => return rejection,
            }
        }
        ResponseTemplate::new(201).set_body_json(Value::Array(created))
    }
}

/// POST /api/authors/{id}/books
struct CreateBook;

impl Respond for CreateBook {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(body) = json_body(request) else {
            return ResponseTemplate::new(400);
        };
        ResponseTemplate::new(201).set_body_json(json!({
            "id": uuid::Uuid::new_v4(),
            "title": body.get("title"),
            "description": body.get("description"),
            "authorId": segment(request, 2),
        }))
    }
}

/// GET /api/authors/{id}
struct GetAuthor;

impl Respond for GetAuthor {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": segment(request, 2),
            "name": "Test Author",
            "genre": "test",
        }))
    }
}

/// GET /api/authors/{id}/books/{bookId}
struct GetBook;

impl Respond for GetBook {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": segment(request, 4),
            "title": "Test Title",
            "description": "Test Discription",
            "authorId": segment(request, 2),
        }))
    }
}

pub async fn library_stub() -> MockServer {
    let server = MockServer::start().await;

    // The service cannot render XML.
    Mock::given(header("Accept", "application/xml"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(path_regex(format!("^/api/authors/{NIL}(/.*)?$")))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(2)
        .mount(&server)
        .await;
    Mock::given(path_regex(format!("^/api/authors/{UUID}/books/{NIL}$")))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/authors"))
        .respond_with(CreateAuthor)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/authorcollections"))
        .respond_with(CreateAuthorCollection)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(format!("^/api/authors/{UUID}$")))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(format!("^/api/authors/{UUID}/books$")))
        .respond_with(CreateBook)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(format!("^/api/authors/{UUID}(/books/{UUID})?$")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(format!("^/api/authors/{UUID}$")))
        .respond_with(GetAuthor)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(format!("^/api/authors/{UUID}/books$")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(format!("^/api/authors/{UUID}/books/{UUID}$")))
        .respond_with(GetBook)
        .mount(&server)
        .await;

    server
}

pub fn client_for(server: &MockServer) -> LibraryClient {
    LibraryClient::new(&server.uri()).unwrap()
}
