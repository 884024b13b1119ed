//! Application layer - Use cases orchestrating the domain
//!
//! This layer contains:
//! - Ports: Repository contracts implemented by infrastructure adapters
//! - Services: Character, wealth and dice use cases
//! - DTOs: Serializable request/response shapes for the API boundary

pub mod dto;
pub mod ports;
pub mod services;
