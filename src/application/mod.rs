pub mod agent;
pub mod shell;
