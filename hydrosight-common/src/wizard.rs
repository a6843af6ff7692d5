//! Scripted AR repair wizard.
//!
//! A fixed, linear walk through four steps. The first step simulates a scan
//! and advances on its own after [`SCAN_DELAY`]; the rest advance on user
//! action, and the action on the last step closes the wizard.

use std::time::Duration;

/// How long the simulated pipe scan takes.
pub const SCAN_DELAY: Duration = Duration::from_secs(2);

/// Steps of the repair flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RepairStep {
    /// Camera scanning the pipe assembly.
    #[default]
    Scanning,
    /// Fault identified, waiting for the user to start the fix.
    IssueDetected,
    /// Guided adjustment in progress.
    Adjusting,
    /// Repair finished.
    Resolved,
}

/// Static content for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub title: &'static str,
    pub text: &'static str,
    pub action_label: &'static str,
    /// Delay after which the step advances without input, if any.
    pub auto_advance: Option<Duration>,
}

impl RepairStep {
    /// All steps, in order.
    pub const ALL: [RepairStep; 4] = [
        RepairStep::Scanning,
        RepairStep::IssueDetected,
        RepairStep::Adjusting,
        RepairStep::Resolved,
    ];

    /// Zero-based position in the flow.
    pub fn index(self) -> usize {
        match self {
            RepairStep::Scanning => 0,
            RepairStep::IssueDetected => 1,
            RepairStep::Adjusting => 2,
            RepairStep::Resolved => 3,
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<RepairStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn info(self) -> StepInfo {
        match self {
            RepairStep::Scanning => StepInfo {
                title: "Analyzing Plumbing...",
                text: "Scan the pipe assembly under the sink.",
                action_label: "Scanning...",
                auto_advance: Some(SCAN_DELAY),
            },
            RepairStep::IssueDetected => StepInfo {
                title: "AI Assistant",
                text: "Issue Detected: P-Trap compression nut loose.",
                action_label: "Tap to fix",
                auto_advance: None,
            },
            RepairStep::Adjusting => StepInfo {
                title: "AI Assistant",
                text: "Use a channel-lock plier. Rotate clockwise 1/4 turn.",
                action_label: "Simulate Turn",
                auto_advance: None,
            },
            RepairStep::Resolved => StepInfo {
                title: "AI Assistant",
                text: "Leak resolved! Great job.",
                action_label: "Finish",
                auto_advance: None,
            },
        }
    }
}

/// What the caller should do after a wizard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Keep the wizard open.
    Stay,
    /// The flow is finished; dismiss the wizard.
    Close,
}

/// Progress through the repair flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairWizard {
    step: RepairStep,
}

impl RepairWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RepairStep {
        self.step
    }

    pub fn index(&self) -> usize {
        self.step.index()
    }

    pub fn info(&self) -> StepInfo {
        self.step.info()
    }

    /// Whether the step is waiting on a timer rather than the user.
    pub fn awaiting_auto_advance(&self) -> bool {
        self.step.info().auto_advance.is_some()
    }

    /// Whether the action button accepts input.
    pub fn action_enabled(&self) -> bool {
        !self.awaiting_auto_advance()
    }

    /// Whether the "Tighten Here" marker is drawn over the camera feed.
    pub fn shows_overlay_hint(&self) -> bool {
        self.step >= RepairStep::Adjusting
    }

    /// The scan timer elapsed. Only moves the wizard out of the scan step.
    pub fn scan_complete(&mut self) {
        if self.step == RepairStep::Scanning {
            self.step = RepairStep::IssueDetected;
            tracing::debug!("Repair scan complete");
        }
    }

    /// The user pressed the action button.
    pub fn act(&mut self) -> WizardOutcome {
        if self.awaiting_auto_advance() {
            return WizardOutcome::Stay;
        }

        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = self.step.index(), to = next.index(), "Repair step advanced");
                self.step = next;
                WizardOutcome::Stay
            }
            None => WizardOutcome::Close,
        }
    }
}
