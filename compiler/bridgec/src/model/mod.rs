//! Declaration model files.
//!
//! A model file is the JSON export of one batch of declarations as seen by
//! the host compiler:
//!
//! ```json
//! {
//!   "declarations": [
//!     {
//!       "name": "app.Repo",
//!       "kind": "class",
//!       "members": [{ "name": "load", "suspend": true }],
//!       "annotations": { "native_class": {} }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use bridge_gen::GenProblem;
use bridge_ir::{DeclarationSet, DeclarationSignature};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub declarations: Vec<DeclarationSignature>,
}

impl ModelFile {
    /// Parse a model from JSON text. `origin` only labels errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, GenProblem> {
        serde_json::from_str(text).map_err(|e| GenProblem::ModelLoad {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate into a batch.
    pub fn into_set(self) -> Result<DeclarationSet, GenProblem> {
        Ok(DeclarationSet::new(self.declarations)?)
    }
}

/// Read, parse, and validate a model file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_model(path: &Path) -> Result<DeclarationSet, GenProblem> {
    let text = std::fs::read_to_string(path).map_err(|e| GenProblem::ModelLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let set = ModelFile::parse(&text, path)?.into_set()?;
    tracing::debug!(declarations = set.len(), "model loaded");
    Ok(set)
}
