pub mod agents;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod manager;
pub mod runner;
pub mod telemetry;
pub mod tools;
pub mod workflow;
