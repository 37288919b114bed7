use chrono::{DateTime, Utc};
use pagepilot_core_types::{RunId, RunStatus, Step, StepId, StepStatus};
use serde::{Deserialize, Serialize};

/// Aggregate of one step sequence. The step list is fixed for the run's
/// lifetime; only the controller mutates a live `Run`.
#[derive(Clone, Debug)]
pub struct Run {
    pub id: RunId,
    pub steps: Vec<Step>,
    pub status: RunStatus,
    pub current_index: usize,
    pub description: String,
}

impl Run {
    pub fn idle() -> Self {
        Self {
            id: RunId::new(),
            steps: Vec::new(),
            status: RunStatus::Idle,
            current_index: 0,
            description: "idle".to_string(),
        }
    }

    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            id: RunId::new(),
            steps,
            status: RunStatus::Idle,
            current_index: 0,
            description: "pending start".to_string(),
        }
    }

    /// Immutable point-in-time copy handed to observers. Mutating the copy
    /// never touches the live run.
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            run_id: self.id.clone(),
            status: self.status,
            current_index: self.current_index,
            total_steps: self.steps.len(),
            steps: self.steps.iter().map(StepSnapshot::of).collect(),
            description: self.description.clone(),
            at: Utc::now(),
        }
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::idle()
    }
}

/// Observer view of one step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub id: StepId,
    pub label: String,
    pub status: StepStatus,
    pub error: Option<String>,
}

impl StepSnapshot {
    fn of(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            label: step.label(),
            status: step.status,
            error: step.error.clone(),
        }
    }
}

/// Observer view of the run, pushed after every meaningful transition.
/// Snapshots are monotonically non-decreasing in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub run_id: RunId,
    pub status: RunStatus,
    pub current_index: usize,
    pub total_steps: usize,
    pub steps: Vec<StepSnapshot>,
    pub description: String,
    pub at: DateTime<Utc>,
}

impl RunSnapshot {
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }
}
