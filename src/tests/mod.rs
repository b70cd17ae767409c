#![warn(clippy::all, clippy::pedantic)]

pub mod components_tests;
pub mod hard_drop_test;
pub mod input_tests;
pub mod time_tests;
