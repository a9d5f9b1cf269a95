use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("header has no category columns")]
    EmptyHeader,
    #[error("line {line}: invalid value {token:?}")]
    InvalidValue { line: usize, token: String },
    #[error("line {line}: series {label:?} has {values} values but there are {categories} categories")]
    SeriesLength {
        line: usize,
        label: String,
        values: usize,
        categories: usize,
    },
    #[error("failed to draw chart: {0}")]
    Draw(String),
}
