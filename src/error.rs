// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for catalog loading and language switching.
//!
//! Every failure leaves the selector in its last-known-good state; the
//! variants only describe why the new language could not be installed.

use crate::registry::LangId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog's text was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// One or more line keys were referenced with differing source strings.
    #[error("mismatched references at line(s) {}", format_lines(.lines))]
    MismatchedReferences { lines: Vec<u32> },

    /// A quoted literal opened on this physical line was never closed.
    #[error("unterminated string literal on line {line}")]
    TruncatedLiteral { line: usize },
}

/// Failures surfaced by [`crate::select::LanguageSelector`] and the backends.
#[derive(Debug, Error)]
pub enum LangError {
    #[error("no installed catalog declares language {language}")]
    CatalogNotFound { language: LangId },

    #[error("catalog {} rejected: {reason}", .path.display())]
    CatalogMalformed { path: PathBuf, reason: CatalogError },

    #[error("failed to load {}: {reason}", .path.display())]
    ModuleLoadFailed { path: PathBuf, reason: String },

    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings: {0}")]
    Settings(String),
}

impl LangError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LangError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the catalog contents rather than the environment.
    pub fn is_catalog_fault(&self) -> bool {
        matches!(
            self,
            LangError::CatalogMalformed { .. } | LangError::ModuleLoadFailed { .. }
        )
    }
}

fn format_lines(lines: &[u32]) -> String {
    lines
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_lists_lines() {
        let err = CatalogError::MismatchedReferences {
            lines: vec![10, 42],
        };
        assert_eq!(err.to_string(), "mismatched references at line(s) 10, 42");
    }

    #[test]
    fn malformed_wraps_reason() {
        let err = LangError::CatalogMalformed {
            path: PathBuf::from("Languages/French.po"),
            reason: CatalogError::TruncatedLiteral { line: 7 },
        };
        assert!(err.is_catalog_fault());
        assert!(err.to_string().contains("French.po"));
        assert!(err.to_string().contains("line 7"));
    }
}
