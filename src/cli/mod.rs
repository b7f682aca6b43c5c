pub mod commands;
pub mod global;
