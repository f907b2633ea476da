//! Front-ends for the rewind tic-tac-toe engine.
//!
//! [`tui`] is the interactive game. [`script`] and [`replay`] drive the same
//! engine from a move script and print the result, which is what the
//! `rewind replay` command does.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod script;
pub mod tui;
pub mod view;

pub use config::{AppConfig, ConfigError, HistoryLabelStyle};
pub use replay::{ReplayFormat, ReplayReport, render};
pub use script::{ScriptError, ScriptStep, parse_script, run_script};
