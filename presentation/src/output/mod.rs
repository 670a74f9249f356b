//! Output formatting for validation annotations and submission notices

pub mod console;
