pub mod deploy;

pub use deploy::{DeploySummary, StepOutcome, StepStatus};
