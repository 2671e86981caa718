//! EnerGuide API: a read-only GraphQL service over residential energy efficiency evaluations.

pub mod configuration;
pub mod error;
mod executable;
pub mod filter;
pub mod predicate;
pub mod scalars;
pub mod schema;
pub mod server;
pub mod store;

pub use executable::Executable;
pub use executable::main;
