// Shared components
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain
pub mod notification;
pub mod push;

// Application layer
pub mod api;
pub mod server;
