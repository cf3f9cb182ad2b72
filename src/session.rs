//! The terminal session: parsing, dispatch, and timed side effects.
//!
//! `VaultSession` is the single entry point the host talks to. It owns the
//! session state, the scheduler for delayed emissions, and the
//! notification announcer. `submit` never fails: every malformed input
//! degrades to transcript text, and the host only ever reads state back.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::commands::{self, CommandKind};
use crate::config::{Config, DelayConfig};
use crate::notify::{NotificationSink, UnlockAnnouncer};
use crate::scheduler::Scheduler;
use crate::services::time_source::SharedTimeSource;
use crate::state::SessionState;

/// A delayed emission scheduled by a command handler.
///
/// Each variant carries exactly what the firing step needs; the voltage
/// result keeps the submitted value so overlapping attempts stay
/// independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    VoltageResult { value: String },
    VaultUnlock,
    HackMidway,
    HackDenied,
    CoffeeGrind,
    CoffeeWater,
    CoffeeReady,
}

pub struct VaultSession {
    state: SessionState,
    scheduler: Scheduler<VaultEvent>,
    announcer: UnlockAnnouncer,
    sink: Box<dyn NotificationSink>,
    prompt: String,
    delays: DelayConfig,
    rng: SmallRng,
}

impl VaultSession {
    pub fn new(config: &Config, time: SharedTimeSource, sink: Box<dyn NotificationSink>) -> Self {
        Self::with_rng(config, time, sink, SmallRng::from_os_rng())
    }

    /// Deterministic variant for tests.
    pub fn with_seed(
        config: &Config,
        time: SharedTimeSource,
        sink: Box<dyn NotificationSink>,
        seed: u64,
    ) -> Self {
        Self::with_rng(config, time, sink, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: &Config,
        time: SharedTimeSource,
        sink: Box<dyn NotificationSink>,
        rng: SmallRng,
    ) -> Self {
        let mut state = SessionState::new();
        state.push_lines(commands::BOOT_BANNER);

        Self {
            state,
            scheduler: Scheduler::new(time),
            announcer: UnlockAnnouncer::new(),
            sink,
            prompt: config.prompt.clone(),
            delays: config.delays.clone(),
            rng,
        }
    }

    /// Handle one submitted line.
    ///
    /// Always appends at least the echo line. Synchronous output lands
    /// before this returns; delayed output lands on later `tick` calls.
    pub fn submit(&mut self, raw_line: &str) {
        let trimmed = raw_line.trim();

        if trimmed.is_empty() {
            self.state.push_line(format!("{} ", self.prompt));
            self.state.push_lines(commands::EMPTY_INPUT_ERROR);
            return;
        }

        let (command, args) = split_command(trimmed);
        if args.is_empty() {
            self.state.push_line(format!("{} {}", self.prompt, command));
        } else {
            self.state
                .push_line(format!("{} {} {}", self.prompt, command, args));
        }

        match commands::find(command) {
            Some(spec) if spec.requires_args() && args.is_empty() => {
                self.state.push_lines(spec.usage_error.iter().copied());
            }
            Some(spec) => {
                tracing::debug!(command = spec.name, args, "dispatching command");
                self.run(spec.kind, args);
            }
            None => {
                tracing::debug!(command, "unknown command");
                self.state.push_lines(commands::unknown_command(command));
            }
        }

        self.announcer.observe(&mut self.state, self.sink.as_mut());
    }

    /// Fire every scheduled event whose time has come.
    ///
    /// The host calls this once per loop iteration; tests advance their
    /// clock and then call it. Output interleaves by completion time when
    /// delayed commands overlap.
    pub fn tick(&mut self) {
        while let Some(event) = self.scheduler.pop_due() {
            self.apply(event);
        }
        self.announcer.observe(&mut self.state, self.sink.as_mut());
    }

    fn run(&mut self, kind: CommandKind, args: &str) {
        match kind {
            CommandKind::SetVoltage => self.run_set_voltage(args),
            CommandKind::Help => self.state.push_lines(commands::HELP_TEXT),
            CommandKind::Status => self
                .state
                .push_lines(commands::status_report(self.state.repaired())),
            CommandKind::Ls => self.state.push_lines(commands::LS_TEXT),
            CommandKind::Cat => self.run_cat(args),
            CommandKind::Whoami => self.state.push_lines(commands::WHOAMI_TEXT),
            CommandKind::Ping => self.run_ping(args),
            CommandKind::Joke => {
                let joke = commands::JOKES
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(commands::JOKES[0]);
                self.state.push_lines(commands::joke_block(joke));
            }
            CommandKind::Hack => {
                self.state.push_lines(commands::HACK_START);
                self.scheduler
                    .schedule(self.delays.hack_step(), VaultEvent::HackMidway);
                self.scheduler
                    .schedule(self.delays.hack_step() * 2, VaultEvent::HackDenied);
            }
            CommandKind::Coffee => {
                self.state.push_lines(commands::COFFEE_START);
                self.scheduler
                    .schedule(self.delays.coffee_step(), VaultEvent::CoffeeGrind);
                self.scheduler
                    .schedule(self.delays.coffee_step() * 2, VaultEvent::CoffeeWater);
                self.scheduler
                    .schedule(self.delays.coffee_step() * 3, VaultEvent::CoffeeReady);
            }
            CommandKind::Secret => {
                self.state.push_lines(commands::SECRET_TEXT);
                if self.state.repaired() {
                    self.state.push_lines(commands::SECRET_DONE);
                } else {
                    self.state.push_lines(commands::SECRET_HINT);
                }
            }
            CommandKind::Clear => {
                self.state.reset_transcript(commands::CLEAR_BANNER);
            }
        }
    }

    fn run_set_voltage(&mut self, args: &str) {
        // A second attempt while one is in flight is accepted and
        // evaluated as its own fresh attempt; busy only disables the
        // host's input field.
        self.state.voltage_started();
        self.state.push_lines(commands::VOLTAGE_APPLYING);
        self.scheduler.schedule(
            self.delays.voltage_apply(),
            VaultEvent::VoltageResult {
                value: args.to_string(),
            },
        );
    }

    fn run_cat(&mut self, args: &str) {
        match commands::find_file(args) {
            Some(file) => self.state.push_lines(file.body.iter().copied()),
            None => self.state.push_lines(commands::cat_unknown_file(args)),
        }
    }

    fn run_ping(&mut self, args: &str) {
        let lines = if args.contains("google") || args.contains("8.8.8.8") {
            commands::ping_external(args)
        } else if args.contains("robot") || args.contains("localhost") {
            commands::ping_local(args, self.state.repaired())
        } else {
            commands::ping_unreachable(args)
        };
        self.state.push_lines(lines);
    }

    fn apply(&mut self, event: VaultEvent) {
        match event {
            VaultEvent::VoltageResult { value } => {
                if value == commands::REQUIRED_VOLTAGE {
                    self.state.push_lines(commands::VOLTAGE_SUCCESS);
                    if self.state.mark_repaired() {
                        tracing::info!("chip repaired");
                        self.scheduler
                            .schedule(self.delays.vault_unlock(), VaultEvent::VaultUnlock);
                    }
                } else {
                    self.state.push_lines(commands::voltage_failure(&value));
                }
                self.state.voltage_finished();
            }
            VaultEvent::VaultUnlock => {
                if self.state.unlock_all() {
                    tracing::info!("vault unlocked");
                }
            }
            VaultEvent::HackMidway => self.state.push_line(commands::HACK_MIDWAY),
            VaultEvent::HackDenied => self.state.push_lines(commands::HACK_DENIED),
            VaultEvent::CoffeeGrind => self.state.push_line(commands::COFFEE_GRIND),
            VaultEvent::CoffeeWater => self.state.push_line(commands::COFFEE_WATER),
            VaultEvent::CoffeeReady => self.state.push_lines(commands::COFFEE_READY),
        }
    }

    pub fn transcript(&self) -> &[String] {
        self.state.transcript()
    }

    pub fn repaired(&self) -> bool {
        self.state.repaired()
    }

    pub fn unlocked(&self) -> &std::collections::BTreeSet<String> {
        self.state.unlocked()
    }

    /// True while a voltage evaluation is in flight. The host uses this
    /// to disable the input field; submissions are still accepted.
    pub fn is_busy(&self) -> bool {
        self.state.busy()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Split a trimmed input line on the first run of whitespace.
///
/// The command keeps its original casing (matching is case-insensitive,
/// the echo shows what was typed); args come back trimmed.
fn split_command(trimmed: &str) -> (&str, &str) {
    match trimmed.find(char::is_whitespace) {
        Some(idx) => (&trimmed[..idx], trimmed[idx..].trim()),
        None => (trimmed, ""),
    }
}
