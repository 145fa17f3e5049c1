// ABOUTME: Type-safe identifiers and value types for registry entities.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod digest;
mod id;

pub use digest::Digest;
pub use id::{ProjectId, RepositoryId};
