pub mod alerts;
pub mod recommend;
pub mod summary;
pub mod watch;
