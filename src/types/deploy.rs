use {
    crate::utils::version::ProjectVersion,
    serde::Serialize,
    std::path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Skipped,
    /// The step failed but the pipeline carried on; only the push step
    /// is allowed to end up here.
    FailedIgnored,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StepOutcome {
    pub fn new(step: &str, status: StepStatus) -> Self {
        Self {
            step: step.to_string(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(step: &str, status: StepStatus, detail: String) -> Self {
        Self {
            step: step.to_string(),
            status,
            detail: Some(detail),
        }
    }
}

/// Machine-readable record of a pipeline run, printed by
/// `deploy deploy --json`.
#[derive(Debug, Default, Serialize)]
pub struct DeploySummary {
    pub versions: Vec<ProjectVersion>,
    pub steps: Vec<StepOutcome>,
    pub artifacts: Vec<PathBuf>,
}

impl DeploySummary {
    pub fn record(&mut self, step: &str, status: StepStatus) {
        self.steps.push(StepOutcome::new(step, status));
    }
}
