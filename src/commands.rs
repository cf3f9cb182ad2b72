//! The fixed command table and its canned output.
//!
//! Every command the terminal understands is declared here, together with
//! the text blocks the handlers emit. Handlers themselves live in
//! [`session`](crate::session); this module only knows names, arity and
//! words, which keeps the dispatch table testable on its own.

use once_cell::sync::Lazy;

/// Which handler a command dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    SetVoltage,
    Help,
    Status,
    Ls,
    Cat,
    Whoami,
    Ping,
    Joke,
    Hack,
    Coffee,
    Secret,
    Clear,
}

/// A single entry in the command table.
///
/// Commands that require an argument carry their own usage block; the
/// dispatcher prints it when the argument is missing, so handlers can
/// assume a non-empty argument string.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    /// Missing-argument error, empty for commands that take none.
    pub usage_error: &'static [&'static str],
    pub kind: CommandKind,
}

impl CommandSpec {
    pub fn requires_args(&self) -> bool {
        !self.usage_error.is_empty()
    }
}

fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "set_voltage",
            summary: "Set chip voltage (MAIN TASK: use 5)",
            usage_error: &VOLTAGE_USAGE_ERROR,
            kind: CommandKind::SetVoltage,
        },
        CommandSpec {
            name: "help",
            summary: "Show this help message",
            usage_error: &[],
            kind: CommandKind::Help,
        },
        CommandSpec {
            name: "status",
            summary: "Show detailed robot status",
            usage_error: &[],
            kind: CommandKind::Status,
        },
        CommandSpec {
            name: "ls",
            summary: "List directory contents",
            usage_error: &[],
            kind: CommandKind::Ls,
        },
        CommandSpec {
            name: "cat",
            summary: "Display file contents",
            usage_error: &CAT_USAGE_ERROR,
            kind: CommandKind::Cat,
        },
        CommandSpec {
            name: "whoami",
            summary: "Display current user info",
            usage_error: &[],
            kind: CommandKind::Whoami,
        },
        CommandSpec {
            name: "ping",
            summary: "Ping a network target",
            usage_error: &PING_USAGE_ERROR,
            kind: CommandKind::Ping,
        },
        CommandSpec {
            name: "joke",
            summary: "Tell a random robot joke",
            usage_error: &[],
            kind: CommandKind::Joke,
        },
        CommandSpec {
            name: "hack",
            summary: "Try to hack something",
            usage_error: &[],
            kind: CommandKind::Hack,
        },
        CommandSpec {
            name: "coffee",
            summary: "Make virtual coffee",
            usage_error: &[],
            kind: CommandKind::Coffee,
        },
        CommandSpec {
            name: "secret",
            summary: "Hidden surprise command",
            usage_error: &[],
            kind: CommandKind::Secret,
        },
        CommandSpec {
            name: "clear",
            summary: "Clear the terminal",
            usage_error: &[],
            kind: CommandKind::Clear,
        },
    ]
}

static COMMANDS: Lazy<Vec<CommandSpec>> = Lazy::new(builtin_commands);

/// Find a command by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// All known commands, in table order.
pub fn all() -> &'static [CommandSpec] {
    &COMMANDS
}

/// The accepted voltage, compared as a literal token: `"5.0"` and `"05"`
/// are wrong on purpose.
pub const REQUIRED_VOLTAGE: &str = "5";

/// Transcript seeded into every fresh session.
pub const BOOT_BANNER: [&str; 11] = [
    "🤖 ROBOT TERMINAL v2.0.1 - Chip Repair System",
    "=====================================",
    "🔧 Chip detected but corrupted!",
    "⚠️  System diagnostics: CRITICAL ERROR",
    "❌ Voltage: 0.0V (Expected: 5.0V)",
    "🌡️  Temperature: 85°C (OVERHEATING)",
    "",
    "🎯 MISSION: Repair the robot's chip by setting correct voltage",
    "💡 HINT: Try 'help' to see all available commands",
    "🔍 TIP: This terminal has many hidden features to discover!",
    "",
];

/// What `clear` leaves behind.
pub const CLEAR_BANNER: [&str; 3] = [
    "🤖 Terminal cleared",
    "💡 Type 'help' to see available commands",
    "",
];

pub const EMPTY_INPUT_ERROR: [&str; 3] = [
    "❌ Error: Please enter a command",
    "💡 Type 'help' for available commands",
    "",
];

pub fn unknown_command(command: &str) -> Vec<String> {
    vec![
        format!("❌ Command not found: {command}"),
        "💡 Type 'help' to see all available commands".into(),
        "🔍 Try exploring with 'ls' and 'cat' commands!".into(),
        "🎯 Main goal: set_voltage 5".into(),
        "".into(),
    ]
}

pub const HELP_TEXT: [&str; 27] = [
    "🤖 ROBOT TERMINAL - Available Commands:",
    "=====================================",
    "",
    "🔧 MAIN COMMANDS:",
    "  set_voltage <value>  - Set chip voltage (MAIN TASK: use 5)",
    "  status              - Show detailed robot status",
    "",
    "📁 FILE SYSTEM:",
    "  ls                  - List directory contents",
    "  cat <file>          - Display file contents",
    "",
    "🌐 NETWORK:",
    "  ping <target>       - Ping a network target",
    "  whoami              - Display current user info",
    "",
    "🎮 FUN COMMANDS:",
    "  joke                - Tell a random robot joke",
    "  coffee              - Make virtual coffee",
    "  hack                - Try to hack something",
    "  secret              - Hidden surprise command",
    "",
    "ℹ️  OTHER:",
    "  help                - Show this help message",
    "",
    "💡 TIP: Try 'ls' then 'cat <filename>' to explore files!",
    "🎯 GOAL: Use 'set_voltage 5' to repair the chip!",
    "",
];

pub const WHOAMI_TEXT: [&str; 6] = [
    "👤 Current User: chip-repair-specialist",
    "🔧 Access Level: ADMIN",
    "🎯 Mission: Fix the robot's corrupted chip",
    "🏠 Home Directory: /home/repair",
    "⚡ Permissions: Full system access",
    "",
];

pub const LS_TEXT: [&str; 12] = [
    "📁 Directory listing for /home/repair:",
    "=====================================",
    "  📄 chip_diagnostics.log    - Chip error details",
    "  📖 repair_manual.pdf       - Step-by-step repair guide",
    "  📁 secret_projects/        - Locked until chip is fixed",
    "  💾 robot_memories.db       - Robot's memory database",
    "  ⚙️  voltage_settings.cfg    - Power configuration",
    "  🥚 easter_eggs.txt         - Hidden surprises",
    "  🔒 vault_access.key        - Encrypted vault key",
    "",
    "💡 Use 'cat <filename>' to read files",
    "",
];

/// A readable file in the fake filesystem, looked up by substring match.
pub struct KnownFile {
    /// Substring that selects this file (`cat` matches with `contains`).
    pub keyword: &'static str,
    /// Full display name, used in error listings.
    pub display_name: &'static str,
    pub body: &'static [&'static str],
}

pub static KNOWN_FILES: [KnownFile; 4] = [
    KnownFile {
        keyword: "chip_diagnostics",
        display_name: "chip_diagnostics.log",
        body: &[
            "📄 === chip_diagnostics.log ===",
            "================================",
            "  [CRITICAL] Chip ID: RBT-2024-MAGIC",
            "  [ERROR] Voltage: 0.0V (Expected: 5.0V)",
            "  [ERROR] Temperature: 85°C (OVERHEATING)",
            "  [ERROR] Status: CORRUPTED",
            "  [WARNING] System instability detected",
            "  [INFO] Last known good state: 5.0V",
            "  [SOLUTION] Apply exactly 5 volts to repair",
            "",
        ],
    },
    KnownFile {
        keyword: "repair_manual",
        display_name: "repair_manual.pdf",
        body: &[
            "📖 === repair_manual.pdf ===",
            "=============================",
            "  ROBOT CHIP REPAIR GUIDE v2.1",
            "  ",
            "  Step 1: Locate missing chip ✅",
            "  Step 2: Install chip in socket ✅",
            "  Step 3: Set voltage to 5V ⏳",
            "  Step 4: Verify operation",
            "  ",
            "  ⚠️  WARNING: Incorrect voltage may cause damage!",
            "  ✅ SAFE VOLTAGE: Exactly 5.0V",
            "  🔧 COMMAND: set_voltage 5",
            "",
        ],
    },
    KnownFile {
        keyword: "easter_eggs",
        display_name: "easter_eggs.txt",
        body: &[
            "🥚 === easter_eggs.txt ===",
            "==========================",
            "  🎉 Congratulations! You found the easter egg file!",
            "  ",
            "  🎮 Fun commands to try:",
            "    • joke    - Robot humor",
            "    • hack    - Hacking attempt",
            "    • coffee  - Virtual caffeine",
            "    • secret  - Hidden surprise",
            "  ",
            "  🤖 The robot loves curious explorers!",
            "  🔍 Keep exploring the terminal!",
            "",
        ],
    },
    KnownFile {
        keyword: "robot_memories",
        display_name: "robot_memories.db",
        body: &[
            "💾 === robot_memories.db ===",
            "=============================",
            "  🔒 Database encrypted - chip repair required",
            "  📊 Records: 1,337 memories",
            "  💭 Last memory: 'I hope someone finds my chip...'",
            "  🤖 Status: Waiting for repair...",
            "",
        ],
    },
];

/// Resolve a `cat` argument to a known file by substring match.
pub fn find_file(args: &str) -> Option<&'static KnownFile> {
    KNOWN_FILES.iter().find(|f| args.contains(f.keyword))
}

pub const CAT_USAGE_ERROR: [&str; 4] = [
    "❌ Error: Please specify a file to read",
    "💡 Usage: cat <filename>",
    "📁 Available files: chip_diagnostics.log, repair_manual.pdf, easter_eggs.txt",
    "",
];

pub fn cat_unknown_file(args: &str) -> Vec<String> {
    let mut lines = vec![
        format!("❌ cat: {args}: No such file or directory"),
        "📁 Available files:".into(),
    ];
    for file in &KNOWN_FILES {
        lines.push(format!("  • {}", file.display_name));
    }
    lines.push("".into());
    lines
}

pub const PING_USAGE_ERROR: [&str; 4] = [
    "❌ Error: Please specify a target to ping",
    "💡 Usage: ping <target>",
    "🌐 Try: ping google.com or ping robot",
    "",
];

pub fn ping_external(target: &str) -> Vec<String> {
    vec![
        format!("🌐 PING {target} (8.8.8.8): 56 data bytes"),
        "64 bytes from 8.8.8.8: icmp_seq=0 time=12.345 ms".into(),
        "64 bytes from 8.8.8.8: icmp_seq=1 time=11.234 ms".into(),
        "64 bytes from 8.8.8.8: icmp_seq=2 time=13.456 ms".into(),
        "--- ping statistics ---".into(),
        "3 packets transmitted, 3 received, 0% packet loss".into(),
        "✅ Internet connection: ACTIVE".into(),
        "".into(),
    ]
}

pub fn ping_local(target: &str, repaired: bool) -> Vec<String> {
    let status = if repaired {
        "FULLY OPERATIONAL"
    } else {
        "NEEDS REPAIR"
    };
    vec![
        format!("🤖 PING {target} (127.0.0.1): 56 data bytes"),
        "64 bytes from 127.0.0.1: icmp_seq=0 time=0.042 ms".into(),
        "64 bytes from 127.0.0.1: icmp_seq=1 time=0.038 ms".into(),
        "🤖 Robot is responding! All systems online!".into(),
        format!("⚡ Status: {status}"),
        "".into(),
    ]
}

pub fn ping_unreachable(target: &str) -> Vec<String> {
    vec![
        format!("🌐 PING {target}: Host unreachable"),
        "❌ Network error: Unknown host".into(),
        "💡 Try: ping google.com or ping robot".into(),
        "".into(),
    ]
}

/// The status report is purely a view over the repaired flag.
pub fn status_report(repaired: bool) -> Vec<String> {
    let pick = |fixed: &str, broken: &str| if repaired { fixed } else { broken }.to_string();
    let mut lines = vec![
        "🤖 === ROBOT STATUS REPORT ===".to_string(),
        "===============================".to_string(),
        format!("  Chip Status: {}", pick("✅ OPERATIONAL", "❌ CORRUPTED")),
        format!("  Power Level: {}", pick("⚡ 100% (5.0V)", "🔋 15% (0.0V)")),
        format!("  Happiness: {}", pick("😊 MAXIMUM JOY", "😢 VERY SAD")),
        format!(
            "  Temperature: {}",
            pick("🌡️ 45°C (Normal)", "🔥 85°C (Overheating)")
        ),
        format!("  Vault Access: {}", pick("🔓 UNLOCKED", "🔒 LOCKED")),
        format!("  Memory Usage: {}", pick("💾 Normal", "💾 Corrupted")),
        format!("  System Uptime: {}", pick("⏰ Stable", "⏰ Unstable")),
        "".to_string(),
    ];
    if !repaired {
        lines.push("🔧 REPAIR NEEDED: Use 'set_voltage 5' to fix chip".to_string());
        lines.push("".to_string());
    }
    lines
}

pub const JOKES: [&str; 8] = [
    "Why do robots never panic? They have nerves of steel! 🤖",
    "What do you call a robot who takes the long way around? R2-Detour! 🛣️",
    "Why was the robot angry? Someone kept pushing its buttons! 😤",
    "What's a robot's favorite type of music? Heavy metal! 🎵",
    "Why don't robots ever get tired? They're always charged up! ⚡",
    "What do you call a robot that loves to garden? A ro-botanist! 🌱",
    "Why did the robot go to therapy? It had too many bugs! 🐛",
    "What's a robot's favorite snack? Computer chips! 💻",
];

pub fn joke_block(joke: &str) -> Vec<String> {
    vec![
        "🎭 === ROBOT JOKE GENERATOR ===".into(),
        format!("  {joke}"),
        "😄 Hope that made you smile!".into(),
        "".into(),
    ]
}

pub const HACK_START: [&str; 3] = [
    "🔓 === INITIATING HACK SEQUENCE ===",
    "Scanning for vulnerabilities...",
    "  [▓▓▓░░░░░░░] 30% - Checking firewalls...",
];

pub const HACK_MIDWAY: &str = "  [▓▓▓▓▓▓░░░░] 60% - Bypassing security...";

pub const HACK_DENIED: [&str; 7] = [
    "  [▓▓▓▓▓▓▓▓▓▓] 100% - Almost there...",
    "❌ ACCESS DENIED",
    "🛡️  Security system activated!",
    "🤖 Nice try! I'm unhackable!",
    "💡 But you can still fix my chip... 😉",
    "🔧 Hint: set_voltage 5",
    "",
];

pub const COFFEE_START: [&str; 3] = [
    "☕ === VIRTUAL COFFEE MACHINE ===",
    "Starting coffee brewing process...",
    "  🫘 Selecting premium beans...",
];

pub const COFFEE_GRIND: &str = "  ⚙️  Grinding beans... *whirrrr*";

pub const COFFEE_WATER: &str = "  💧 Adding hot water... *bubble bubble*";

pub const COFFEE_READY: [&str; 5] = [
    "  ☕ Your virtual coffee is ready!",
    "  🤖 Robots don't drink coffee, but I appreciate the gesture!",
    "  ⚡ I run on electricity and good vibes!",
    "  💡 Now how about fixing my chip? 😊",
    "",
];

pub const SECRET_TEXT: [&str; 7] = [
    "🤫 === SECRET COMMAND ACTIVATED ===",
    "  🎉 Congratulations, curious explorer!",
    "  🔍 You have the spirit of a true hacker!",
    "  🤖 The robot is impressed by your curiosity!",
    "  ✨ Keep exploring and learning!",
    "  🏆 Achievement unlocked: Terminal Explorer!",
    "",
];

pub const SECRET_HINT: [&str; 4] = [
    "  💡 Psst... between you and me...",
    "  🔧 The chip needs exactly 5 volts... 😉",
    "  ⚡ Command: set_voltage 5",
    "",
];

pub const SECRET_DONE: [&str; 3] = [
    "  🎊 You've already mastered chip repair!",
    "  🤖 The robot is forever grateful!",
    "",
];

pub const VOLTAGE_USAGE_ERROR: [&str; 3] = [
    "❌ Error: Please specify voltage value",
    "💡 Usage: set_voltage <value>",
    "🔧 Example: set_voltage 5",
];

pub const VOLTAGE_APPLYING: [&str; 2] = [
    "🔄 Applying voltage to chip...",
    "⚡ Initializing power systems...",
];

pub const VOLTAGE_SUCCESS: [&str; 8] = [
    "✅ Voltage applied successfully!",
    "🔧 Chip repair in progress...",
    "⚡ Power levels: OPTIMAL (5.0V)",
    "🌡️  Temperature: Cooling down... 45°C",
    "🎉 CHIP FULLY REPAIRED!",
    "🔓 Unlocking secret vault...",
    "🤖 Robot status: FULLY OPERATIONAL!",
    "",
];

pub fn voltage_failure(value: &str) -> Vec<String> {
    vec![
        format!("❌ Error: Incorrect voltage '{value}V'"),
        "⚠️  Warning: Wrong voltage can damage chip!".into(),
        "🔧 Required voltage: 5V".into(),
        "💡 Try: set_voltage 5".into(),
        "".into(),
    ]
}

/// Popup shown the moment the chip is repaired.
pub const REPAIR_POPUP: &str =
    "🎉 Perfect! You fixed the chip! The robot is now fully operational!";

/// Popup shown once the vault has unlocked every project.
pub const UNLOCK_POPUP: &str =
    "🎊 AMAZING! The chip is working perfectly! All secret projects unlocked!";
