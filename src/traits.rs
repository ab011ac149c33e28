use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Wire (de)serialization shared by every model sent to or read from the
/// Library API.
pub trait JsonModel: Serialize + DeserializeOwned {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_json(s: &str) -> Result<Self>
    where
        Self: Sized,
    {
        decode(s)
    }
}

impl<T: JsonModel> JsonModel for Vec<T> {}

/// Deserialize `s`, keeping the JSON path of the first structural error.
pub fn decode<T: DeserializeOwned>(s: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(de).map_err(|e| Error::Decode {
        path:   e.path().to_string(),
        source: e.into_inner(),
    })
}
