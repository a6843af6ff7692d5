//! HydroSight - Smart-home water monitoring dashboard.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod args;
pub mod message;
pub mod subscription;
pub mod view;

// Re-export commonly used types
pub use app::HydroSight;
pub use message::Message;
pub use view::View;
