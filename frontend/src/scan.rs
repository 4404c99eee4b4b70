//! Scripted scan timeline shown while a document is "being analysed".
//!
//! The timeline has no link to backend progress. It runs two independent
//! clocks: a percentage counter that gains one point every
//! [`PROGRESS_TICK_MS`], and four fixed steps that each start at
//! `i * STEP_DURATION_MS` and complete [`STEP_COMPLETE_LEAD_MS`] before the
//! next one starts. Completion is reported once, [`SCAN_FINISH_GRACE_MS`]
//! after the last step's slot.
//!
//! [`ScanTimeline`] is pure state. The modal drives it from real timers;
//! tests drive it through [`ScanTimeline::advance_to`].

use thiserror::Error;

use crate::config::{PROGRESS_TICK_MS, SCAN_FINISH_GRACE_MS, STEP_COMPLETE_LEAD_MS, STEP_DURATION_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl StepStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            StepStatus::Pending => "scan-step pending",
            StepStatus::InProgress => "scan-step in-progress",
            StepStatus::Completed => "scan-step completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanStep {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

const STEP_DEFINITIONS: [(&str, &str, &str); 4] = [
    ("metadata", "Extracting Metadata", "Reading document properties and hidden data..."),
    ("comparison", "Comparing with 70TB Database", "Cross-referencing against historical records..."),
    ("ai", "AI Fraud Analysis", "Running deep learning models for pattern detection..."),
    ("validation", "Validation Complete", "Generating comprehensive report..."),
];

pub const STEP_COUNT: usize = STEP_DEFINITIONS.len();

fn initial_steps() -> Vec<ScanStep> {
    STEP_DEFINITIONS
        .iter()
        .map(|&(id, label, description)| ScanStep {
            id,
            label,
            description,
            status: StepStatus::Pending,
        })
        .collect()
}

/// Scheduled transitions of the step list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    StartStep(usize),
    CompleteStep(usize),
    Finish,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("timeline is closed")]
    Closed,
    #[error("no scan step at index {0}")]
    UnknownStep(usize),
    #[error("step {index} cannot go from {from:?} to {to:?}")]
    OutOfOrder {
        index: usize,
        from: StepStatus,
        to: StepStatus,
    },
    #[error("cannot finish before every step completed")]
    Unfinished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanTimeline {
    open: bool,
    filename: String,
    steps: Vec<ScanStep>,
    percent: u8,
    finished: bool,
    elapsed_ms: u32,
    fired: usize,
}

impl Default for ScanTimeline {
    fn default() -> Self {
        Self {
            open: false,
            filename: String::new(),
            steps: initial_steps(),
            percent: 0,
            finished: false,
            elapsed_ms: 0,
            fired: 0,
        }
    }
}

impl ScanTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn steps(&self) -> &[ScanStep] {
        &self.steps
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index of the step currently running, if any.
    pub fn active_step(&self) -> Option<usize> {
        self.steps.iter().position(|s| s.status == StepStatus::InProgress)
    }

    /// Start a fresh run. Reopening an open timeline restarts it.
    pub fn open(&mut self, filename: impl Into<String>) {
        *self = Self {
            open: true,
            filename: filename.into(),
            ..Self::default()
        };
    }

    /// Reset every step to pending and the counter to zero.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Advance the percentage counter by one point; returns the new value.
    pub fn tick(&mut self) -> u8 {
        if self.open && self.percent < 100 {
            self.percent += 1;
        }
        self.percent
    }

    /// Apply a step transition. Returns `true` only for the first `Finish`
    /// of the current run.
    pub fn apply(&mut self, event: TimelineEvent) -> Result<bool, TimelineError> {
        if !self.open {
            return Err(TimelineError::Closed);
        }
        match event {
            TimelineEvent::StartStep(index) => {
                self.check_index(index)?;
                let previous_done = self.steps[..index]
                    .iter()
                    .all(|s| s.status == StepStatus::Completed);
                self.transition(index, StepStatus::Pending, StepStatus::InProgress, previous_done)?;
                Ok(false)
            }
            TimelineEvent::CompleteStep(index) => {
                self.check_index(index)?;
                self.transition(index, StepStatus::InProgress, StepStatus::Completed, true)?;
                Ok(false)
            }
            TimelineEvent::Finish => {
                if self.steps.iter().any(|s| s.status != StepStatus::Completed) {
                    return Err(TimelineError::Unfinished);
                }
                if self.finished {
                    return Ok(false);
                }
                self.finished = true;
                Ok(true)
            }
        }
    }

    /// Fixed event list of one run, ordered by offset in milliseconds.
    pub fn schedule() -> Vec<(u32, TimelineEvent)> {
        let mut events = Vec::with_capacity(STEP_COUNT * 2 + 1);
        for i in 0..STEP_COUNT {
            let start = i as u32 * STEP_DURATION_MS;
            events.push((start, TimelineEvent::StartStep(i)));
            events.push((start + STEP_DURATION_MS - STEP_COMPLETE_LEAD_MS, TimelineEvent::CompleteStep(i)));
        }
        events.push((Self::finish_at_ms(), TimelineEvent::Finish));
        events.sort_by_key(|(at, _)| *at);
        events
    }

    pub fn finish_at_ms() -> u32 {
        STEP_COUNT as u32 * STEP_DURATION_MS + SCAN_FINISH_GRACE_MS
    }

    /// Replay ticks and scheduled events up to `elapsed_ms` since opening.
    /// Returns `true` if completion fired during this call.
    pub fn advance_to(&mut self, elapsed_ms: u32) -> bool {
        if !self.open || elapsed_ms < self.elapsed_ms {
            return false;
        }

        let ticks = elapsed_ms / PROGRESS_TICK_MS - self.elapsed_ms / PROGRESS_TICK_MS;
        for _ in 0..ticks {
            self.tick();
        }

        let mut completed = false;
        let schedule = Self::schedule();
        while let Some(&(at, event)) = schedule.get(self.fired) {
            if at > elapsed_ms {
                break;
            }
            self.fired += 1;
            match self.apply(event) {
                Ok(fired) => completed |= fired,
                Err(e) => log::warn!("⚠️ Scan timeline rejected {:?}: {}", event, e),
            }
        }

        self.elapsed_ms = elapsed_ms;
        completed
    }

    fn check_index(&self, index: usize) -> Result<(), TimelineError> {
        if index < self.steps.len() {
            Ok(())
        } else {
            Err(TimelineError::UnknownStep(index))
        }
    }

    fn transition(
        &mut self,
        index: usize,
        from: StepStatus,
        to: StepStatus,
        allowed: bool,
    ) -> Result<(), TimelineError> {
        let step = &mut self.steps[index];
        if !allowed || step.status != from {
            return Err(TimelineError::OutOfOrder {
                index,
                from: step.status,
                to,
            });
        }
        step.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(t: &ScanTimeline) -> Vec<StepStatus> {
        t.steps().iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_schedule_offsets() {
        let schedule = ScanTimeline::schedule();
        assert_eq!(schedule.first(), Some(&(0, TimelineEvent::StartStep(0))));
        assert!(schedule.contains(&(650, TimelineEvent::CompleteStep(0))));
        assert!(schedule.contains(&(750, TimelineEvent::StartStep(1))));
        assert!(schedule.contains(&(2900, TimelineEvent::CompleteStep(3))));
        assert_eq!(schedule.last(), Some(&(3200, TimelineEvent::Finish)));
    }

    #[test]
    fn test_steps_advance_in_order_and_finish_once() {
        let mut t = ScanTimeline::new();
        t.open("invoice.pdf");

        let mut started = Vec::new();
        let mut completions = 0;
        for ms in (0..=4_000).step_by(10) {
            if t.advance_to(ms) {
                completions += 1;
            }
            if let Some(active) = t.active_step() {
                if started.last() != Some(&active) {
                    started.push(active);
                }
            }
        }

        assert_eq!(started, vec![0, 1, 2, 3]);
        assert_eq!(completions, 1);
        assert!(t.is_finished());
        assert!(statuses(&t).iter().all(|s| *s == StepStatus::Completed));
        assert_eq!(t.percent(), 100);
    }

    #[test]
    fn test_state_at_intermediate_times() {
        let mut t = ScanTimeline::new();
        t.open("invoice.pdf");

        t.advance_to(700);
        assert_eq!(
            statuses(&t),
            vec![StepStatus::Completed, StepStatus::Pending, StepStatus::Pending, StepStatus::Pending]
        );
        assert_eq!(t.percent(), 23);

        t.advance_to(1_600);
        assert_eq!(t.active_step(), Some(2));
        assert!(!t.is_finished());

        assert!(!t.advance_to(3_199));
        assert!(t.advance_to(3_200));
    }

    #[test]
    fn test_percent_caps_at_100() {
        let mut t = ScanTimeline::new();
        t.open("a.pdf");
        for _ in 0..250 {
            t.tick();
        }
        assert_eq!(t.percent(), 100);
    }

    #[test]
    fn test_close_before_completion_resets() {
        let mut t = ScanTimeline::new();
        t.open("a.pdf");
        t.advance_to(1_800);
        assert!(t.percent() > 0);

        t.close();
        assert!(!t.is_open());
        assert_eq!(t.percent(), 0);
        assert!(statuses(&t).iter().all(|s| *s == StepStatus::Pending));
        // closed timelines ignore clocks
        assert!(!t.advance_to(5_000));
        assert_eq!(t.tick(), 0);
    }

    #[test]
    fn test_reopen_fires_completion_again() {
        let mut t = ScanTimeline::new();
        t.open("a.pdf");
        assert!(t.advance_to(3_500));
        t.close();
        t.open("b.pdf");
        assert_eq!(t.filename(), "b.pdf");
        assert!(t.advance_to(3_500));
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        let mut t = ScanTimeline::new();
        assert_eq!(t.apply(TimelineEvent::StartStep(0)), Err(TimelineError::Closed));

        t.open("a.pdf");
        assert!(matches!(
            t.apply(TimelineEvent::StartStep(2)),
            Err(TimelineError::OutOfOrder { index: 2, .. })
        ));
        assert!(t.apply(TimelineEvent::CompleteStep(0)).is_err());
        assert_eq!(t.apply(TimelineEvent::StartStep(9)), Err(TimelineError::UnknownStep(9)));
        assert_eq!(t.apply(TimelineEvent::Finish), Err(TimelineError::Unfinished));

        t.apply(TimelineEvent::StartStep(0)).unwrap();
        assert!(t.apply(TimelineEvent::StartStep(0)).is_err());
    }

    #[test]
    fn test_second_finish_is_silent() {
        let mut t = ScanTimeline::new();
        t.open("a.pdf");
        for i in 0..STEP_COUNT {
            t.apply(TimelineEvent::StartStep(i)).unwrap();
            t.apply(TimelineEvent::CompleteStep(i)).unwrap();
        }
        assert_eq!(t.apply(TimelineEvent::Finish), Ok(true));
        assert_eq!(t.apply(TimelineEvent::Finish), Ok(false));
    }
}
