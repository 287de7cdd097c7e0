use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a dchound run.
///
/// Everything else the pipeline can encounter (zero host blocks, a domain
/// controller without a resolvable domain, unrecognized lines) is a valid
/// state of the result model and is reported descriptively, never raised.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read scan file '{path}': {source}")]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write artifact '{path}': {source}")]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
