//! Error types for project domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing a [`super::Project`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The start or end date was not supplied.
    #[error("project start date and end date are required")]
    MissingDates,

    /// The end date lies before the current day.
    #[error("project end date {end_date} is before today ({today})")]
    EndDateInPast {
        /// Supplied end date.
        end_date: NaiveDate,
        /// Current day according to the injected clock.
        today: NaiveDate,
    },

    /// The start date is after the end date or after the current day.
    #[error("project start date {start_date} must not be after {end_date} or after today ({today})")]
    InvalidStartDate {
        /// Supplied start date.
        start_date: NaiveDate,
        /// Supplied end date.
        end_date: NaiveDate,
        /// Current day according to the injected clock.
        today: NaiveDate,
    },

    /// The project status was not supplied.
    #[error("project status is required")]
    MissingStatus,
}

/// Error returned while parsing project status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
