// Recurring task scheduling loop

pub mod runner;

pub use runner::Runner;
