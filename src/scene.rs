//! Declarative scene descriptions.
//!
//! A scene is a JSON document listing elements in creation order:
//!
//! ```json
//! { "elements": [
//!     { "type": "point", "parents": [1, 0], "attributes": { "name": "A" } },
//!     { "type": "point", "parents": [0, 0], "attributes": { "name": "B" } },
//!     { "type": "point", "parents": [0, 1], "attributes": { "name": "C" } },
//!     { "type": "angle", "parents": ["A", "B", "C"], "attributes": { "radius": 0.5 } }
//! ] }
//! ```
//!
//! Later elements may refer to earlier ones by id or name.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::board::Board;
use crate::element::{ElementError, ElementId};
use crate::factory::ElementRegistry;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid scene document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("element #{index} ({kind}) failed: {source}")]
    Element {
        index: usize,
        kind: String,
        #[source]
        source: ElementError,
    },
}

impl SceneError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_SCENE_PARSE",
            Self::Element { source, .. } => source.error_code(),
        }
    }
}

/// One element entry of a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneElement {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parents: Vec<Value>,
    #[serde(default)]
    pub attributes: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub elements: Vec<SceneElement>,
}

impl Scene {
    /// Parse a scene document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if `json` is not a valid scene.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create every element on `board`, in order. Stops at the first failure;
    /// elements created before it stay on the board.
    ///
    /// # Errors
    ///
    /// Returns `Element` with the index and type of the entry that failed.
    pub fn build(&self, board: &mut Board, registry: &ElementRegistry) -> Result<Vec<ElementId>, SceneError> {
        let mut ids = Vec::with_capacity(self.elements.len());
        for (index, element) in self.elements.iter().enumerate() {
            let id = registry
                .create(board, &element.kind, &element.parents, &element.attributes)
                .map_err(|source| SceneError::Element { index, kind: element.kind.clone(), source })?;
            ids.push(id);
        }
        info!(board = board.id(), elements = ids.len(), "scene built");
        Ok(ids)
    }
}
