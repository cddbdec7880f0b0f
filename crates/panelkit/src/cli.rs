//! Clap derive structures for the `panelkit` CLI.
//!
//! Defines the command tree, global flags, and shared enums. Kept free of
//! workspace dependencies so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// panelkit -- shell settings from the command line
#[derive(Debug, Parser)]
#[command(
    name = "panelkit",
    version,
    about = "Inspect and change shell settings from the command line",
    long_about = "Talks to the panelkit settings bridge to manage Wi-Fi, Bluetooth,\n\
        battery, display, sound and PIN lock settings.\n\n\
        Scanned Wi-Fi networks are classified by security protocol and\n\
        cipher, and saved networks are reconciled against the live scan.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Settings bridge URL (overrides config file)
    #[arg(long, short = 'g', env = "PANELKIT_GATEWAY", global = true)]
    pub gateway: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "PANELKIT_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PANELKIT_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "PANELKIT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output, Color & Log Enums ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wi-Fi radio, scans and saved networks
    #[command(alias = "w")]
    Wifi(WifiArgs),

    /// Bluetooth adapter and devices
    #[command(alias = "bt")]
    Bluetooth(BluetoothArgs),

    /// Battery level and performance modes
    Battery(BatteryArgs),

    /// Screen brightness
    Display(DisplayArgs),

    /// Audio devices and volume
    Sound(SoundArgs),

    /// PIN lock
    Security(SecurityArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  WIFI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct WifiArgs {
    #[command(subcommand)]
    pub command: WifiCommand,
}

#[derive(Debug, Subcommand)]
pub enum WifiCommand {
    /// Radio state and the network currently joined
    Status,

    /// Radio state, joined network, scan and saved networks in one view
    Overview,

    /// Scan for networks in range
    #[command(alias = "ls")]
    Scan,

    /// List saved networks
    Known,

    /// Detail page for a saved network
    Show {
        /// Backend id of the saved network
        network_id: String,
    },

    /// Detail page for a network in range
    Inspect {
        /// Network name (SSID)
        name: String,

        /// Mark the network as the one currently joined
        #[arg(long)]
        connected: bool,
    },

    /// Join a network with a passphrase
    Connect {
        /// Network name (SSID)
        ssid: String,

        /// Passphrase (prompted when omitted)
        #[arg(long, env = "PANELKIT_WIFI_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Join an open network without a passphrase
        #[arg(long, conflicts_with = "password")]
        open: bool,
    },

    /// Join a saved network by id
    Join {
        /// Backend id of the saved network
        network_id: String,
    },

    /// Disconnect from a network and drop its saved credentials
    Forget {
        /// Network name (SSID)
        ssid: String,
    },

    /// Turn the radio on
    On,

    /// Turn the radio off
    Off,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BLUETOOTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BluetoothArgs {
    #[command(subcommand)]
    pub command: BluetoothCommand,
}

#[derive(Debug, Subcommand)]
pub enum BluetoothCommand {
    /// Adapter state and device groups
    Show,

    /// Scan for devices
    #[command(alias = "ls")]
    Devices,

    /// Power the adapter on
    On,

    /// Power the adapter off
    Off,

    /// Connect to a device
    Connect {
        /// Device address
        address: String,
    },

    /// Disconnect and forget a device
    Forget {
        /// Device address
        address: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BATTERY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BatteryArgs {
    #[command(subcommand)]
    pub command: BatteryCommand,
}

#[derive(Debug, Subcommand)]
pub enum BatteryCommand {
    /// Charge level and performance mode
    Show,

    /// List available performance modes
    Modes,

    /// Show or set the performance mode
    Mode {
        /// Mode to switch to (shows the current mode when omitted)
        value: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DISPLAY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DisplayArgs {
    #[command(subcommand)]
    pub command: DisplayCommand,
}

#[derive(Debug, Subcommand)]
pub enum DisplayCommand {
    /// Display settings
    Show,

    /// Show or set brightness
    Brightness {
        /// Level 0-100 (shows the current level when omitted)
        value: Option<u8>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SOUND
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SoundArgs {
    #[command(subcommand)]
    pub command: SoundCommand,
}

/// Which side of the audio stack a command targets.
#[derive(Debug, Args)]
pub struct SoundTarget {
    /// Target input devices instead of outputs
    #[arg(long, short = 'i')]
    pub input: bool,

    /// Device name (default device when omitted)
    #[arg(long, short = 'd', default_value = "")]
    pub device: String,
}

#[derive(Debug, Subcommand)]
pub enum SoundCommand {
    /// Volumes and devices
    Show,

    /// List devices with their volume
    Devices {
        /// List input devices instead of outputs
        #[arg(long, short = 'i')]
        input: bool,
    },

    /// Show or set volume
    Volume {
        /// Level 0-100 (shows the current level when omitted)
        value: Option<u8>,

        #[command(flatten)]
        target: SoundTarget,
    },

    /// Toggle mute
    Mute {
        #[command(flatten)]
        target: SoundTarget,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SECURITY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SecurityArgs {
    #[command(subcommand)]
    pub command: SecurityCommand,
}

#[derive(Debug, Subcommand)]
pub enum SecurityCommand {
    /// Whether the PIN lock is enabled
    Show,

    /// Set or change the PIN (prompts for both PINs)
    SetPin,

    /// Remove the PIN lock (prompts for the current PIN)
    RemovePin,

    /// Check a PIN without changing anything
    Verify,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value
    Set {
        /// Config key (dot-separated path, e.g., "gateway.url")
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
