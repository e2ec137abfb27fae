//! Library components of the `navshell` command-line tool.

pub mod logging;
pub mod session;
pub mod settings;
