pub mod app;
pub mod bootstrap;
