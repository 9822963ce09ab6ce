pub mod commands;
pub mod index;
pub mod package;
pub mod query;
pub mod report;
pub mod tree;
