//! Schyntax domain-specific language for defining event schedules.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use schyntax::Schedule;
//!
//! let schedule = Schedule::new("days(mo..fr) hours(16)").unwrap();
//! let start = Utc.with_ymd_and_hms(2015, 6, 6, 12, 0, 0).unwrap();
//! let next = schedule.next_after(&start).unwrap();
//! assert_eq!(next, Utc.with_ymd_and_hms(2015, 6, 8, 16, 0, 0).unwrap());
//! ```
#![deny(unsafe_code)]

mod ast;
mod compiler;
/// Crate specific Errors implementation.
pub mod error;
mod ir;
mod lexer;
mod parser;
/// Schyntax schedule parser and event search engine.
pub mod schedule;
mod terminal;
mod token;
mod utils;
mod validator;

/// Re-export of public entities.
pub use error::Error;
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
