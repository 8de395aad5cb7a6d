use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read export {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: {reason}")]
    Row { line: usize, reason: String },
}
