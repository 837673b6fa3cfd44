use sqlparser::parser::ParserError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Query failed the SQL blacklist: {}", .0.join(", "))]
    Blacklist(Vec<String>),

    #[error("Invalid query: {0}")]
    InvalidQuery(ParserError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<ParserError> for Error {
    fn from(value: ParserError) -> Self {
        Error::InvalidQuery(value)
    }
}
