use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("cannot build scales from an empty dataset")]
    EmptyDataset,

    #[error("degenerate scale domain: min and max are both {value}")]
    DegenerateScale { value: f64 },

    #[error("row {line}: cannot parse field `{field}`: {reason}")]
    Parse {
        line: usize,
        field: &'static str,
        reason: String,
    },
}
