pub mod cli;
pub mod errors;
pub mod fp;
pub mod oop;
pub mod report;
