use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported format: {format}")]
    UnsupportedFormat { format: String },

    #[error("could not resolve input format; pass --from or use a known file extension")]
    UnresolvedFormat,

    #[error("unsupported input file extension: {path}")]
    UnsupportedPathExtension { path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input must be an array of customer records")]
    NotARecordArray,
}
