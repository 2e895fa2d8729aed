pub mod commands;
pub mod overview;
