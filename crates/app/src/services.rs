//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod actions;
pub mod loader;
pub mod poller;

#[cfg(test)]
pub(crate) mod testing;
