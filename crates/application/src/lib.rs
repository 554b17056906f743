//! dnsfault application layer: transport ports and the response dispatcher.
pub mod ports;
pub mod use_cases;
