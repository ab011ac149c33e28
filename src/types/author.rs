use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{
    traits::JsonModel,
    types::{book::Book, id::Id, link::Link},
};

/// Author as the Library API sends and receives it.
///
/// Clients send `firstName`/`lastName`; the service answers with the composed
/// `name` instead. `dateOfBirth` is free-form here and only validated by the
/// service.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id:            Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books:         Option<Vec<Book>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links:         Option<Vec<Link>>,
}

impl Author {
    /// The display name the service derives from the first and last name.
    pub fn composed_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }
}

impl JsonModel for Author {}

impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.clone().or_else(|| self.composed_name());
        match (name, &self.id) {
            (None, None) => write!(f, "(unnamed author)"),
            (None, Some(id)) => write!(f, "({id})"),
            (Some(name), None) => write!(f, "{name}"),
            (Some(name), Some(id)) => write!(f, "{name} ({id})"),
        }
    }
}
