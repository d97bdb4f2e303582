// ABOUTME: Validated domain types for service scoping.
// ABOUTME: Service names, stages, and the scope both pipelines query.

mod scope;
mod service_name;
mod stage;

pub use scope::{ARTIFACT_ROOT, ServiceScope};
pub use service_name::{ServiceName, ServiceNameError};
pub use stage::{DEFAULT_STAGE, Stage, StageError};
