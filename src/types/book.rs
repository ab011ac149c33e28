use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{
    traits::JsonModel,
    types::{id::Id, link::Link},
};

/// Book as the Library API sends and receives it. A book belongs to exactly
/// one author, referenced by `authorId`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id:          Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id:   Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links:       Option<Vec<Link>>,
}

impl Book {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

impl JsonModel for Book {}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        match &self.id {
            Some(id) => write!(f, "{title} ({id})"),
            None => write!(f, "{title}"),
        }
    }
}
