//! Mutable state of one terminal session.
//!
//! The state is deliberately small: an append-only transcript, the repair
//! flag, the unlocked project set, a one-shot announcement latch, and a
//! counter of in-flight voltage evaluations. Both `repaired` and the
//! unlocked set are independently observable by the host, which picks a
//! screen variant from them.

use std::collections::BTreeSet;

/// The project identifiers revealed when the vault unlocks.
pub const PROJECT_IDS: [&str; 6] = [
    "project1", "project2", "project3", "project4", "project5", "project6",
];

#[derive(Debug, Default)]
pub struct SessionState {
    /// Ordered transcript lines; insertion order is display order.
    transcript: Vec<String>,

    /// True once the chip has been repaired. Never reverts.
    repaired: bool,

    /// Unlocked project ids. Empty until the vault unlock fires, then the
    /// full set in one step. Monotonic.
    unlocked: BTreeSet<String>,

    /// Guards the "all unlocked" notification so it fires at most once
    /// per session.
    success_announced: bool,

    /// Number of voltage evaluations currently waiting on the scheduler.
    voltage_in_flight: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single line to the transcript.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.transcript.push(line.into());
    }

    /// Append several lines to the transcript, preserving order.
    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.transcript.push(line.into());
        }
    }

    /// Replace the whole transcript with the given banner.
    ///
    /// This is the only operation that ever removes transcript lines; the
    /// repair state is untouched.
    pub fn reset_transcript<I, S>(&mut self, banner: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transcript.clear();
        self.push_lines(banner);
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn repaired(&self) -> bool {
        self.repaired
    }

    /// Mark the chip repaired. Returns true only on the false -> true edge.
    pub fn mark_repaired(&mut self) -> bool {
        if self.repaired {
            return false;
        }
        self.repaired = true;
        true
    }

    pub fn unlocked(&self) -> &BTreeSet<String> {
        &self.unlocked
    }

    /// Populate the unlocked set with every project id in one step.
    ///
    /// Returns true only on the empty -> non-empty edge. The set never
    /// shrinks, so calling this again is a no-op.
    pub fn unlock_all(&mut self) -> bool {
        debug_assert!(self.repaired, "vault unlock without a repaired chip");
        let was_empty = self.unlocked.is_empty();
        self.unlocked
            .extend(PROJECT_IDS.iter().map(|id| id.to_string()));
        was_empty
    }

    pub fn success_announced(&self) -> bool {
        self.success_announced
    }

    pub fn mark_success_announced(&mut self) {
        self.success_announced = true;
    }

    /// True while at least one voltage evaluation is waiting to land.
    ///
    /// Advisory: the host disables the input field, the interpreter itself
    /// keeps accepting submissions.
    pub fn busy(&self) -> bool {
        self.voltage_in_flight > 0
    }

    pub fn voltage_started(&mut self) {
        self.voltage_in_flight += 1;
    }

    pub fn voltage_finished(&mut self) {
        self.voltage_in_flight = self.voltage_in_flight.saturating_sub(1);
    }
}
