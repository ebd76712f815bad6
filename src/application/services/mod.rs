pub mod account;
pub mod alerts;
pub mod health;
pub mod recommendations;
