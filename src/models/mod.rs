//! Data models for employees, travel orders and their participants.
//!
//! Wire names are camelCase; enumerations are snake_case strings.

mod employee;
mod participant;
mod travel_order;

pub use employee::*;
pub use participant::*;
pub use travel_order::*;
