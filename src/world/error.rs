use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::validator::ValidationError;

/// Errors raised while turning a world file into a playable `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },

    #[error("{}", render_validation(.0))]
    Invalid(Vec<ValidationError>),
}

fn render_validation(errors: &[ValidationError]) -> String {
    let mut msg = format!("world failed validation ({} problem(s))", errors.len());
    for e in errors {
        msg.push_str("\n  - ");
        msg.push_str(&e.message);
    }
    msg
}

pub type WorldResult<T> = Result<T, WorldError>;
