//! # Feedplan Core Library
//!
//! This library provides the business logic for Feedplan, a tracker for an
//! infant's daily calorie intake. The CLI binary is a thin presentation
//! layer over the same library.
//!
//! ## Architecture
//!
//! - **Converter**: Pure unit and calorie conversions
//! - **Feeding Log**: Today's feeds as typed by the user, with lenient time parsing
//! - **Progress**: Consumed and remaining calories against the daily goal
//! - **Projector**: Suggested schedule for the rest of the day
//! - **Storage**: TOML-based configuration and the current day's session
//!
//! ## Key Components
//!
//! - [`compute_totals`], [`compute_progress`], [`project_schedule`]: Entry points
//! - [`ScheduleProjector`]: Remaining-schedule projection
//! - [`FeedingLog`]: Caller-owned log of today's feeds
//! - [`Config`]: Application configuration management

pub mod convert;
pub mod error;
pub mod feeding;
pub mod log;
pub mod plan;
pub mod progress;
pub mod projector;
pub mod storage;

pub use convert::{FeedingInterval, PowderInstruction};
pub use error::{ConfigError, CoreError, LogError, SessionError, ValidationError};
pub use feeding::FeedingConfig;
pub use log::{FeedEdit, FeedEvent, FeedingLog, ParsedTime};
pub use plan::{compute_progress, compute_totals, project_schedule, project_schedule_with};
pub use progress::{FeedingWarning, Progress, Totals};
pub use projector::{
    Projection, ProjectionOutcome, ProjectionRequest, ProjectorConfig, ScheduleProjector,
    ScheduleSlot,
};
pub use storage::{Config, DaySession};
