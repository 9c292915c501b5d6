//! Date and time-block grid generation.
//!
//! The rendering layer draws a days × blocks grid and the engine's records
//! live on its cells. This module produces the cell tokens: ISO `YYYY-MM-DD`
//! dates and `"HH:MM-HH:MM"` time blocks, plus the human-facing formatters
//! for both. Tokens are opaque to the aggregation -- only generation and
//! display ever parse them.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};

/// Shape of the availability grid.
///
/// Fields missing from a serialized config take the production defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// First hour of the day covered by the grid (0-23).
    pub start_hour: u32,
    /// Last hour of the day covered by the grid, inclusive (0-23).
    pub end_hour: u32,
    /// Width of one block in minutes (1-60).
    pub block_minutes: u32,
    /// How many consecutive days the app renders.
    pub days: u32,
}

impl Default for GridConfig {
    /// The production grid: full day, 30-minute blocks, one week.
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 23,
            block_minutes: 30,
            days: 7,
        }
    }
}

impl GridConfig {
    fn validate(&self) -> Result<()> {
        if self.block_minutes == 0 || self.block_minutes > 60 {
            return Err(OverlapError::InvalidGrid(format!(
                "block_minutes must be in 1..=60, got {}",
                self.block_minutes
            )));
        }
        if self.end_hour > 23 || self.start_hour > self.end_hour {
            return Err(OverlapError::InvalidGrid(format!(
                "hour range {}..={} is out of bounds",
                self.start_hour, self.end_hour
            )));
        }
        Ok(())
    }
}

/// Generate the time-block tokens for one day of the grid.
///
/// Blocks are emitted hour by hour; a block that runs past the hour carries
/// into the next one, so a full default day ends with `"23:30-24:00"`. The
/// `24:00` end token never appears as a block start and is never parsed by
/// the aggregation.
///
/// # Errors
/// Returns [`OverlapError::InvalidGrid`] for a zero/oversized block width or
/// an out-of-bounds hour range.
pub fn generate_time_blocks(config: &GridConfig) -> Result<Vec<String>> {
    config.validate()?;

    let mut blocks = Vec::new();
    for hour in config.start_hour..=config.end_hour {
        let mut minute = 0;
        while minute < 60 {
            let end_minute = minute + config.block_minutes;
            let (end_hour, end_minute) = if end_minute >= 60 {
                (hour + 1, end_minute - 60)
            } else {
                (hour, end_minute)
            };
            blocks.push(format!(
                "{:02}:{:02}-{:02}:{:02}",
                hour, minute, end_hour, end_minute
            ));
            minute += config.block_minutes;
        }
    }

    Ok(blocks)
}

/// Generate `count` consecutive ISO `YYYY-MM-DD` date tokens from `start`.
pub fn generate_dates(start: NaiveDate, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string())
        .collect()
}

/// Format an ISO date token as `"Tue, Jan 2"` for column headers.
///
/// # Errors
/// Returns [`OverlapError::InvalidDate`] if the token is not `YYYY-MM-DD`.
pub fn format_date(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| OverlapError::InvalidDate(date.to_string()))?;
    Ok(format!(
        "{}, {} {}",
        parsed.format("%a"),
        parsed.format("%b"),
        parsed.day()
    ))
}

/// Format a time-block token's start as `"9:00 AM"` for row labels.
///
/// Only the start of the block is shown; the width is implied by the grid.
///
/// # Errors
/// Returns [`OverlapError::InvalidTimeBlock`] if the token does not begin
/// with a valid `HH:MM`.
pub fn format_time_block(time_block: &str) -> Result<String> {
    let start = time_block.split('-').next().unwrap_or(time_block);
    let (hour_str, minute_str) = start
        .split_once(':')
        .ok_or_else(|| OverlapError::InvalidTimeBlock(time_block.to_string()))?;

    let hour: u32 = hour_str
        .parse()
        .map_err(|_| OverlapError::InvalidTimeBlock(time_block.to_string()))?;
    let minute: u32 = minute_str
        .parse()
        .map_err(|_| OverlapError::InvalidTimeBlock(time_block.to_string()))?;
    if hour > 23 || minute > 59 {
        return Err(OverlapError::InvalidTimeBlock(time_block.to_string()));
    }

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    Ok(format!("{}:{:02} {}", hour12, minute, meridiem))
}
