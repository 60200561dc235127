//! File loading for the command-line driver.

pub mod file_io;
