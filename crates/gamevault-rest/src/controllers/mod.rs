//! REST API controllers.

pub mod auth_controller;
pub mod games_controller;
pub mod games_v2_controller;
pub mod health_controller;

pub use health_controller::*;
