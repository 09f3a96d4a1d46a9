use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed record: {source}")]
    MalformedRecord {
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn malformed(source: serde_json::Error) -> Self {
        Self::MalformedRecord { source }
    }
}
