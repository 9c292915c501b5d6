//! Error types for overlap-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    /// A `(event, user, date, time block)` tuple appeared more than once in
    /// the input. Only returned by the checked aggregation entry point.
    #[error("duplicate availability record: user {user_id} already answered {date} {time_block} in event {event_id}")]
    DuplicateRecord {
        event_id: String,
        user_id: String,
        date: String,
        time_block: String,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time block: {0}")]
    InvalidTimeBlock(String),

    #[error("Invalid grid config: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, OverlapError>;
