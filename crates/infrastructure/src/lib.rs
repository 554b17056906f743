//! dnsfault infrastructure layer: socket adapters for the application ports.
pub mod dns;
