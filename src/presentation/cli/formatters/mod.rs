pub mod alert_fmt;
pub mod summary_fmt;
