//! Terminal display and formatting utilities.

pub mod json_printer;
