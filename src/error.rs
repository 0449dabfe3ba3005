use thiserror::Error;

use crate::core::ColorParseError;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid draw area: width={width}, height={height}")]
    InvalidDrawArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    ColorParse(#[from] ColorParseError),
}
