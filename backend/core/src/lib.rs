pub mod envelope;
pub mod error;
pub mod registry;
pub mod traits;

pub use error::AgentError;
pub use registry::AgentRegistry;
pub use traits::Agent;
