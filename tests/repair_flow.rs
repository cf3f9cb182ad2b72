//! End-to-end interpreter scenarios on a simulated clock.
//!
//! These mirror how the host drives the session: submit a line, advance
//! the clock, tick, observe transcript/state/notifications.

mod common;

use std::time::Duration;

use common::new_session;
use vaultbot::commands::{CLEAR_BANNER, REPAIR_POPUP, UNLOCK_POPUP};
use vaultbot::session::VaultSession;
use vaultbot::state::PROJECT_IDS;

/// Index of the first transcript line containing `needle`, panicking with
/// the transcript dumped when it is missing.
fn line_index(session: &VaultSession, needle: &str) -> usize {
    session
        .transcript()
        .iter()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| {
            panic!(
                "{needle:?} not found in transcript: {:#?}",
                session.transcript()
            )
        })
}

#[test]
fn help_discovers_the_main_goal() {
    let (mut session, _, _) = new_session();
    session.submit("help");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("set_voltage")));
}

#[test]
fn full_repair_flow_unlocks_vault_and_notifies_twice() {
    let (mut session, time, sink) = new_session();

    session.submit("set_voltage 5");
    assert!(session.is_busy());
    assert!(!session.repaired());
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Applying voltage to chip")));

    // The result lands only after the apply delay.
    time.advance(Duration::from_millis(1500));
    session.tick();
    assert!(session.repaired());
    assert!(!session.is_busy());
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("CHIP FULLY REPAIRED")));
    assert_eq!(sink.drain(), vec![REPAIR_POPUP.to_string()]);

    // The vault unlocks after a further delay, in one atomic step.
    assert!(session.unlocked().is_empty());
    time.advance(Duration::from_millis(1999));
    session.tick();
    assert!(session.unlocked().is_empty());

    time.advance(Duration::from_millis(1));
    session.tick();
    assert_eq!(session.unlocked().len(), PROJECT_IDS.len());
    for id in PROJECT_IDS {
        assert!(session.unlocked().contains(id), "{id} should be unlocked");
    }
    assert_eq!(sink.drain(), vec![UNLOCK_POPUP.to_string()]);
}

#[test]
fn wrong_voltage_fails_and_changes_nothing() {
    let (mut session, time, sink) = new_session();

    session.submit("set_voltage 4");
    time.advance(Duration::from_secs(5));
    session.tick();

    assert!(!session.repaired());
    assert!(session.unlocked().is_empty());
    assert!(sink.drain().is_empty());
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Incorrect voltage '4V'")));
}

#[test]
fn voltage_match_is_literal_not_numeric() {
    for wrong in ["5.0", "05", "five", "5V"] {
        let (mut session, time, _) = new_session();
        session.submit(&format!("set_voltage {wrong}"));
        time.advance(Duration::from_secs(5));
        session.tick();
        assert!(!session.repaired(), "{wrong:?} must not repair the chip");
    }

    // Surrounding whitespace is trimmed away before the comparison.
    let (mut session, time, _) = new_session();
    session.submit("set_voltage    5   ");
    time.advance(Duration::from_secs(5));
    session.tick();
    assert!(session.repaired());
}

#[test]
fn missing_voltage_argument_is_synchronous_usage_error() {
    let (mut session, _, _) = new_session();
    session.submit("set_voltage");
    assert!(!session.is_busy());
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Please specify voltage value")));
}

#[test]
fn repair_is_idempotent_and_notifications_latch() {
    let (mut session, time, sink) = new_session();
    let mut notifications = Vec::new();

    // First full repair.
    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(4));
    session.tick();
    notifications.extend(sink.drain());

    // Clear the transcript, then repair again.
    session.submit("clear");
    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(4));
    session.tick();
    notifications.extend(sink.drain());

    assert!(session.repaired());
    assert_eq!(session.unlocked().len(), PROJECT_IDS.len());

    // The success block still prints, but nothing re-notifies.
    assert_eq!(
        notifications,
        vec![REPAIR_POPUP.to_string(), UNLOCK_POPUP.to_string()]
    );
}

#[test]
fn concurrent_voltage_attempts_both_evaluate() {
    let (mut session, time, _) = new_session();

    session.submit("set_voltage 4");
    time.advance(Duration::from_millis(500));
    session.tick();

    // Still busy with the first attempt; the second is accepted anyway.
    assert!(session.is_busy());
    session.submit("set_voltage 5");

    // First attempt lands: failure, but the second is still in flight.
    time.advance(Duration::from_millis(1000));
    session.tick();
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Incorrect voltage '4V'")));
    assert!(!session.repaired());
    assert!(session.is_busy());

    // Second attempt lands: success.
    time.advance(Duration::from_millis(500));
    session.tick();
    assert!(session.repaired());
    assert!(!session.is_busy());
}

#[test]
fn clear_resets_transcript_but_not_repair_state() {
    let (mut session, time, _) = new_session();
    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(2));
    session.tick();
    time.advance(Duration::from_secs(2));
    session.tick();
    session.submit("ls");
    assert!(session.transcript().len() > CLEAR_BANNER.len());

    session.submit("clear");
    assert_eq!(session.transcript(), &CLEAR_BANNER);
    assert!(session.repaired());
    assert_eq!(session.unlocked().len(), PROJECT_IDS.len());
}

#[test]
fn cat_matches_known_files_by_substring() {
    let (mut session, _, _) = new_session();

    session.submit("cat repair_manual");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("ROBOT CHIP REPAIR GUIDE")));

    session.submit("cat chip_diagnostics.log");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Apply exactly 5 volts to repair")));
}

#[test]
fn cat_unknown_file_lists_the_four_known_names() {
    let (mut session, _, _) = new_session();
    session.submit("cat nonsense");

    let start = line_index(&session, "cat: nonsense: No such file or directory");
    let listing = &session.transcript()[start..];
    for name in [
        "chip_diagnostics.log",
        "repair_manual.pdf",
        "easter_eggs.txt",
        "robot_memories.db",
    ] {
        assert!(listing.iter().any(|l| l.contains(name)), "{name} missing");
    }
    assert_eq!(
        listing.iter().filter(|l| l.trim_start().starts_with('•')).count(),
        4,
        "exactly the four known files are listed"
    );
}

#[test]
fn ping_classifies_targets_and_reflects_repair_state() {
    let (mut session, time, _) = new_session();

    session.submit("ping google.com");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Internet connection: ACTIVE")));

    session.submit("ping robot");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("⚡ Status: NEEDS REPAIR")));

    session.submit("ping example.org");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Host unreachable")));

    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(4));
    session.tick();

    session.submit("ping localhost");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("⚡ Status: FULLY OPERATIONAL")));
}

#[test]
fn overlapping_commands_interleave_by_completion_time() {
    let (mut session, time, _) = new_session();

    // coffee stages fire at +0.8/+1.6/+2.4; hack, submitted half a second
    // later, fires at +1.5/+2.5. The transcript must follow fire times.
    session.submit("coffee");
    time.advance(Duration::from_millis(500));
    session.tick();
    session.submit("hack");

    time.advance(Duration::from_secs(3));
    session.tick();

    let grind = line_index(&session, "Grinding beans");
    let hack_midway = line_index(&session, "60% - Bypassing security");
    let water = line_index(&session, "Adding hot water");
    let coffee_ready = line_index(&session, "Your virtual coffee is ready");
    let denied = line_index(&session, "ACCESS DENIED");

    assert!(grind < hack_midway);
    assert!(hack_midway < water);
    assert!(water < coffee_ready);
    assert!(coffee_ready < denied);
}

#[test]
fn secret_hints_at_the_voltage_until_repaired() {
    let (mut session, time, _) = new_session();

    session.submit("secret");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("The chip needs exactly 5 volts")));

    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(4));
    session.tick();
    session.submit("clear");

    session.submit("secret");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("already mastered chip repair")));
    assert!(!session
        .transcript()
        .iter()
        .any(|l| l.contains("The chip needs exactly 5 volts")));
}

#[test]
fn status_is_a_view_over_the_repair_flag() {
    let (mut session, time, _) = new_session();

    session.submit("status");
    assert!(session.transcript().iter().any(|l| l.contains("❌ CORRUPTED")));

    session.submit("set_voltage 5");
    time.advance(Duration::from_secs(4));
    session.tick();
    session.submit("clear");

    session.submit("status");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("✅ OPERATIONAL")));
}

#[test]
fn joke_prints_one_of_the_fixed_jokes() {
    let (mut session, _, _) = new_session();
    session.submit("joke");

    let told = vaultbot::commands::JOKES
        .iter()
        .filter(|j| session.transcript().iter().any(|l| l.contains(*j)))
        .count();
    assert_eq!(told, 1);
}

#[test]
fn unknown_and_empty_input_are_transcript_errors() {
    let (mut session, _, _) = new_session();

    session.submit("frobnicate the vault");
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Command not found: frobnicate")));

    let before = session.transcript().len();
    session.submit("   ");
    assert!(session.transcript().len() > before);
    assert!(session
        .transcript()
        .iter()
        .any(|l| l.contains("Please enter a command")));
}
