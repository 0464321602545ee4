//! mailsift - ask a hosted LLM whether an email is spam, from the terminal
//!
//! The library holds everything but process setup: the credential holder,
//! prompt templates, the completion client, per-run session state, report
//! export and the terminal form built on top of them.

pub mod app;
pub mod classify;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod input;
pub mod report;
pub mod samples;
pub mod session;
pub mod ui;
