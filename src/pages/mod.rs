//! Page components, one per view state

pub mod employee;
pub mod manager;
