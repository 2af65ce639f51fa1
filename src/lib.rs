// cmdrunner - runs recurring shell commands on a weekly schedule
// Library exports

pub mod cli;
pub mod config;
pub mod executor;
pub mod scheduling;
pub mod tasks;
