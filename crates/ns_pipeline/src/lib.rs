pub mod outcome;
pub mod pipeline;

pub use outcome::RunOutcome;
pub use pipeline::Pipeline;

pub mod prelude {
    pub use super::outcome::*;
    pub use super::pipeline::Pipeline;
    pub use ns_core::{Credentials, PipelineConfig, PipelineResult};
}
