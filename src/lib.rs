pub mod app;
pub mod client;
pub mod conf;
pub mod event;
pub mod job;
