use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("event time must be non-negative, got {0}")]
    NegativeTime(i64),

    #[error("position {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
