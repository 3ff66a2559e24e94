// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for DXF parsing

use thiserror::Error;

/// Result type for DXF parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a DXF file
///
/// A parse error is fatal for the file: callers must surface it rather
/// than substitute empty results. Semantically sparse but structurally
/// valid drawings never produce an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("DXF parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unexpected end of file: {0}")]
    UnexpectedEof(String),
}

impl Error {
    /// Create a parse error at a given source line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
