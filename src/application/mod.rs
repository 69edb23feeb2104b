/// Application layer - Use cases, tools and DTOs
///
/// This layer orchestrates the domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod prompts;
pub mod tools;
pub mod use_cases;
