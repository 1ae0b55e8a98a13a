//! API handlers for CrewRoster REST endpoints

pub mod duties;
pub mod health;
pub mod openapi;
pub mod roster;
