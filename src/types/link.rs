use serde::{Deserialize, Serialize};

/// Hypermedia descriptor attached to author and book representations.
/// Informational only, never followed.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl crate::traits::JsonModel for Link {}
