//! Single-document JSON interchange for a whole resource bundle.
//!
//! The document stores the default bundle by value. On load the default is
//! rebound to the bundle list entry with the same `(language, locale)`, so
//! the loaded container shares it again.

use crate::{Bundle, Error, ResourceBundle, Result};
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Serialized shape of a [`ResourceBundle`], borrowing from it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    language_code: &'a str,
    locale_code: &'a str,
    default: Option<&'a Bundle>,
    bundles: &'a [Bundle],
}

/// Deserialized shape of a [`ResourceBundle`] before identity repair.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    language_code: String,
    #[serde(default, alias = "localCode")]
    locale_code: String,
    #[serde(default)]
    default: Option<Bundle>,
    #[serde(default)]
    bundles: Vec<Bundle>,
}

impl From<Document> for ResourceBundle {
    fn from(doc: Document) -> Self {
        ResourceBundle::new(doc.language_code, doc.locale_code, doc.default, doc.bundles)
    }
}

impl Serialize for ResourceBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DocumentRef {
            language_code: self.language_code(),
            locale_code: self.locale_code(),
            default: self.default_bundle(),
            bundles: self.bundles(),
        }
        .serialize(serializer)
    }
}

/// Only an object is a document, never an array or a scalar.
struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = ResourceBundle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a resource bundle document object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
        Document::deserialize(MapAccessDeserializer::new(map)).map(ResourceBundle::from)
    }
}

impl<'de> Deserialize<'de> for ResourceBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

impl ResourceBundle {
    /// Serialize the container to a compact JSON document.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::MalformedDocument)
    }

    /// Serialize the container to an indented JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::MalformedDocument)
    }

    /// Load a container from a JSON document, restoring default identity.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let rb: ResourceBundle = serde_json::from_slice(data).map_err(Error::MalformedDocument)?;
        debug!(
            bundles = rb.len(),
            default_shared = rb.default_is_shared(),
            "Loaded resource bundle document"
        );
        Ok(rb)
    }

    /// Load a container from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(json.as_bytes())
    }
}
