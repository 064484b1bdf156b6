pub mod aggregate;
pub mod ranking;
