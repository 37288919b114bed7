//! Shared primitives for the PagePilot automation engine crates.

use std::fmt;

use uuid::Uuid;

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StepId(pub String);

impl StepId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for StepId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scroll axis direction for `StepKind::Scroll`.
#[cfg_attr(
    feature = "serde-full",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Default scroll magnitude in pixels when the caller omits one.
pub const DEFAULT_SCROLL_AMOUNT: u32 = 500;

#[cfg(feature = "serde-full")]
fn default_scroll_amount() -> u32 {
    DEFAULT_SCROLL_AMOUNT
}

/// Closed sum of the six step kinds. The serde shape matches the JSON the
/// upstream command parser emits: a `type` tag plus the kind's own fields.
#[cfg_attr(
    feature = "serde-full",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
#[derive(Clone, Debug, PartialEq)]
pub enum StepKind {
    Click {
        target: String,
    },
    Type {
        target: String,
        value: String,
    },
    Scroll {
        direction: ScrollDirection,
        #[cfg_attr(feature = "serde-full", serde(default = "default_scroll_amount"))]
        amount: u32,
    },
    Navigate {
        url: String,
    },
    /// Suspend for `amount` milliseconds.
    Wait {
        amount: u64,
    },
    Capture,
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Click { .. } => "click",
            StepKind::Type { .. } => "type",
            StepKind::Scroll { .. } => "scroll",
            StepKind::Navigate { .. } => "navigate",
            StepKind::Wait { .. } => "wait",
            StepKind::Capture => "capture",
        }
    }

    /// Free text the sensitivity heuristic inspects: target description plus
    /// the value being entered, where the kind carries them. Navigation URLs
    /// are deliberately included too, so a destination like `/checkout` is
    /// held for confirmation the same way a labeled control is.
    pub fn intent_text(&self) -> String {
        match self {
            StepKind::Click { target } => target.clone(),
            StepKind::Type { target, value } => format!("{} {}", target, value),
            StepKind::Navigate { url } => url.clone(),
            _ => String::new(),
        }
    }
}

#[cfg_attr(
    feature = "serde-full",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StepStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl StepStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Failed)
    }
}

/// One declarative unit of automated interaction. Steps are created by the
/// caller; the engine mutates only `status` and `error`, and a terminal
/// status is never re-entered.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub id: StepId,
    #[cfg_attr(feature = "serde-full", serde(flatten))]
    pub kind: StepKind,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub status: StepStatus,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub error: Option<String>,
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self {
            id: StepId::new(),
            kind,
            status: StepStatus::Pending,
            error: None,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::new(StepKind::Click {
            target: target.into(),
        })
    }

    pub fn type_text(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(StepKind::Type {
            target: target.into(),
            value: value.into(),
        })
    }

    pub fn scroll(direction: ScrollDirection, amount: u32) -> Self {
        Self::new(StepKind::Scroll { direction, amount })
    }

    pub fn navigate(url: impl Into<String>) -> Self {
        Self::new(StepKind::Navigate { url: url.into() })
    }

    pub fn wait(amount_ms: u64) -> Self {
        Self::new(StepKind::Wait { amount: amount_ms })
    }

    pub fn capture() -> Self {
        Self::new(StepKind::Capture)
    }

    /// Short human-readable label used in run descriptions and logs.
    pub fn label(&self) -> String {
        match &self.kind {
            StepKind::Click { target } => format!("click '{}'", target),
            StepKind::Type { target, .. } => format!("type into '{}'", target),
            StepKind::Scroll { direction, amount } => {
                format!("scroll {:?} {}px", direction, amount).to_lowercase()
            }
            StepKind::Navigate { url } => format!("navigate to {}", url),
            StepKind::Wait { amount } => format!("wait {}ms", amount),
            StepKind::Capture => "capture screenshot".to_string(),
        }
    }

    pub fn mark_running(&mut self) {
        if !self.status.is_terminal() {
            self.status = StepStatus::Running;
        }
    }

    pub fn mark_completed(&mut self) {
        if !self.status.is_terminal() {
            self.status = StepStatus::Completed;
        }
    }

    pub fn mark_failed(&mut self, error: impl Into<String>) {
        if !self.status.is_terminal() {
            self.status = StepStatus::Failed;
            self.error = Some(error.into());
        }
    }
}

#[cfg_attr(
    feature = "serde-full",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
    Error,
}

impl RunStatus {
    /// A run in `Running` or `Paused` holds the engine; anything else may be
    /// replaced by a new `start`.
    pub fn is_active(&self) -> bool {
        matches!(self, RunStatus::Running | RunStatus::Paused)
    }
}
