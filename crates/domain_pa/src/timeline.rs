//! Request progress timeline
//!
//! A timeline is an ordered list of named steps with completion flags. The
//! completed steps always form a prefix: a step may only be completed once
//! every earlier step is complete, so a rendered timeline never shows a
//! finished step after an unfinished one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PaError;

/// A single timeline step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Step name ("Submitted", "Under Review", ...)
    pub name: String,
    /// Date the step happened or is expected
    pub date: NaiveDate,
    /// Whether the step has happened
    pub completed: bool,
}

impl TimelineStep {
    /// Creates a completed step
    pub fn done(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            completed: true,
        }
    }

    /// Creates a planned (not yet completed) step
    pub fn planned(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            completed: false,
        }
    }
}

/// Ordered sequence of timeline steps with monotonic completion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Creates an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timeline from pre-built steps, validating the
    /// completed-prefix invariant
    pub fn with_steps(steps: Vec<TimelineStep>) -> Result<Self, PaError> {
        let timeline = Self { steps };
        if !timeline.is_monotonic() {
            return Err(PaError::TimelineOrder(
                "completed steps must precede incomplete steps".to_string(),
            ));
        }
        Ok(timeline)
    }

    /// Returns the steps in order
    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// Returns true when every completed step precedes every incomplete one
    pub fn is_monotonic(&self) -> bool {
        let mut seen_incomplete = false;
        for step in &self.steps {
            if step.completed && seen_incomplete {
                return false;
            }
            if !step.completed {
                seen_incomplete = true;
            }
        }
        true
    }

    /// Appends a planned step at the end of the timeline
    pub fn plan_step(&mut self, name: impl Into<String>, date: NaiveDate) {
        self.steps.push(TimelineStep::planned(name, date));
    }

    /// Records that a step happened on the given date
    ///
    /// If the first incomplete step has this name it is completed in place
    /// (keeping its planned position); otherwise a completed step is
    /// inserted just before the incomplete tail. Either way the
    /// completed-prefix invariant is preserved.
    pub fn record_step(&mut self, name: impl Into<String>, date: NaiveDate) {
        let name = name.into();
        match self.steps.iter().position(|s| !s.completed) {
            Some(first_incomplete) => {
                if self.steps[first_incomplete].name == name {
                    let step = &mut self.steps[first_incomplete];
                    step.completed = true;
                    step.date = date;
                } else {
                    self.steps.insert(first_incomplete, TimelineStep::done(name, date));
                }
            }
            None => self.steps.push(TimelineStep::done(name, date)),
        }
    }

    /// Number of completed steps
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Returns true when every step is complete
    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(|s| s.completed)
    }
}
