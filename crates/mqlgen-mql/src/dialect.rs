//! Backend naming conventions.
//!
//! The compiler itself is namespace-agnostic; everything Freebase-specific
//! about key and value spelling lives in `MqlDialect`, which can be loaded
//! from JSON (missing fields fall back to the Freebase defaults).

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

pub const FREEBASE_NAMESPACE: &str = "freebase";
pub const RDF_TYPE: &str = "rdf:type";
pub const TYPE_KEY: &str = "type";
pub const REVERSE_MARKER: char = '!';
pub const LANG_NAMESPACE: &str = "/lang/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MqlDialect {
    /// Relations `"<namespace>:a.b.c"` are rewritten to `"/a/b/c"`.
    pub namespace: String,
    /// Reserved type predicate, rewritten to `type_key`.
    pub type_predicate: String,
    pub type_key: String,
    /// Prefix for keys of incoming (reversed) relations.
    pub reverse_marker: char,
    /// Prefix for language ids, e.g. `/lang/` + `en`.
    pub lang_namespace: String,
}

impl Default for MqlDialect {
    fn default() -> Self {
        Self::freebase()
    }
}

impl MqlDialect {
    pub fn freebase() -> Self {
        Self {
            namespace: FREEBASE_NAMESPACE.to_string(),
            type_predicate: RDF_TYPE.to_string(),
            type_key: TYPE_KEY.to_string(),
            reverse_marker: REVERSE_MARKER,
            lang_namespace: LANG_NAMESPACE.to_string(),
        }
    }

    /// Parse and validate a dialect document.
    pub fn from_json_str(text: &str) -> Result<Self, CompileError> {
        let dialect: Self = serde_json::from_str(text).map_err(CompileError::DialectJson)?;
        dialect.validate()?;
        Ok(dialect)
    }

    /// The namespace must be a non-empty prefix without the `:` separator.
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.namespace.is_empty() || self.namespace.contains(':') {
            return Err(CompileError::InvalidDialect {
                field: "namespace",
                reason: format!("`{}` is not a namespace prefix", self.namespace),
            });
        }
        Ok(())
    }
}
