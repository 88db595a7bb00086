#![warn(clippy::all, clippy::pedantic)]

pub mod config_loader_tests;
