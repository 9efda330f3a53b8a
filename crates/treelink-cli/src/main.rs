use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use treelink_core::control::{ControlFrame, ControlMode};
use treelink_core::{Instrument, LEVEL_COUNT, LightingPacket, TreeMask, frame};

#[derive(Parser, Debug)]
#[command(name = "treelink")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("TREELINK_BUILD_COMMIT"), " ", env!("TREELINK_BUILD_DATE"), ")"
))]
#[command(
    about = "Pack, unpack and inspect tree-lighting radio frames.",
    long_about = None,
    after_help = "Examples:\n  treelink frame pack --trees 1,2,3 --levels 255 --fade-ms 500\n  treelink frame unpack fefffeffff7f3f05 --pretty\n  treelink control pack --mode set-id --unit 3"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on 8-byte lighting frames.
    Frame {
        #[command(subcommand)]
        command: FrameCommands,
    },
    /// Operations on address-control frames.
    Control {
        #[command(subcommand)]
        command: ControlCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FrameCommands {
    /// Pack a lighting instruction and print the frame as hex.
    #[command(
        after_help = "Examples:\n  treelink frame pack --trees all --levels 255,128,0 --fade-ms 1000\n  treelink frame pack --trees 0x07 --memory 3"
    )]
    Pack {
        /// Target trees: 'all', 'none', a comma list of tree numbers
        /// (1-6), or a hex mask like 0x07
        #[arg(long, default_value = "none")]
        trees: String,

        /// Comma-separated PWM levels (0-255); missing slots are zero
        #[arg(long, conflicts_with = "memory")]
        levels: Option<String>,

        /// Memory bank index to recall instead of dimmer levels
        #[arg(long)]
        memory: Option<u8>,

        /// Fade duration in milliseconds (100 ms wire resolution)
        #[arg(long, default_value_t = 0)]
        fade_ms: u32,

        /// Emit JSON with the hex bytes and the as-received packet
        #[arg(long)]
        json: bool,
    },

    /// Unpack a hex-encoded frame.
    Unpack {
        /// 8 frame bytes as hex (16 digits)
        hex: String,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Human-readable rendering instead of JSON
        #[arg(long, conflicts_with_all = ["pretty", "compact"])]
        text: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ControlCommands {
    /// Pack an address-control frame and print it as hex.
    Pack {
        /// What the frame asks the unit to do
        #[arg(long, value_enum)]
        mode: ModeArg,

        /// Unit id to assign or query (0-7)
        #[arg(long, default_value_t = 0)]
        unit: u8,
    },

    /// Unpack and verify a hex-encoded control frame.
    Unpack {
        /// 3 frame bytes as hex (6 digits)
        hex: String,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Exit with a non-zero code when verification fails
        #[arg(long)]
        strict: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Assign the unit id to the receiving tree
    SetId,
    /// Ask the receiving tree to report its id
    Query,
}

impl From<ModeArg> for ControlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::SetId => ControlMode::SetTreeId,
            ModeArg::Query => ControlMode::IdQuery,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Frame { command } => match command {
            FrameCommands::Pack {
                trees,
                levels,
                memory,
                fade_ms,
                json,
            } => cmd_frame_pack(&trees, levels.as_deref(), memory, fade_ms, json),
            FrameCommands::Unpack {
                hex,
                pretty,
                compact,
                text,
            } => cmd_frame_unpack(&hex, pretty, compact, text),
        },
        Commands::Control { command } => match command {
            ControlCommands::Pack { mode, unit } => cmd_control_pack(mode, unit),
            ControlCommands::Unpack {
                hex,
                pretty,
                compact,
                strict,
            } => cmd_control_unpack(&hex, pretty, compact, strict),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

#[derive(Debug, Serialize)]
struct PackedFrame {
    hex: String,
    packet: LightingPacket,
}

#[derive(Debug, Serialize)]
struct ControlReport {
    mode: ControlMode,
    unit_id: u8,
    verified: bool,
}

fn cmd_frame_pack(
    trees: &str,
    levels: Option<&str>,
    memory: Option<u8>,
    fade_ms: u32,
    json: bool,
) -> Result<(), CliError> {
    let trees = parse_trees(trees)?;
    let packet = match memory {
        Some(index) => LightingPacket {
            instrument: Instrument::Memory,
            memory_index: index,
            fade_time_ms: fade_ms,
            trees,
            ..LightingPacket::default()
        },
        None => LightingPacket {
            instrument: Instrument::Dimmer,
            pwm_levels: parse_levels(levels.unwrap_or(""))?,
            fade_time_ms: fade_ms,
            trees,
            ..LightingPacket::default()
        },
    };

    let wire = frame::pack(&packet);
    if json {
        // Echo the packet as a receiver will see it, losses included.
        let received = frame::unpack(&wire)
            .context("packed frame failed to unpack")
            .map_err(CliError::from)?;
        let report = PackedFrame {
            hex: format_hex(&wire),
            packet: received,
        };
        let out = serde_json::to_string(&report)
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", out);
    } else {
        println!("{}", format_hex(&wire));
    }
    Ok(())
}

fn cmd_frame_unpack(hex: &str, pretty: bool, compact: bool, text: bool) -> Result<(), CliError> {
    let payload = parse_hex(hex)?;
    let packet = frame::unpack(&payload).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some(format!(
                "a lighting frame is {} bytes ({} hex digits)",
                frame::FRAME_LEN,
                frame::FRAME_LEN * 2
            )),
        )
    })?;

    if text {
        println!("{}", render_packet(&packet));
        return Ok(());
    }
    println!("{}", serialize_json(&packet, pretty, compact)?);
    Ok(())
}

fn cmd_control_pack(mode: ModeArg, unit: u8) -> Result<(), CliError> {
    if unit > 7 {
        return Err(CliError::new(
            format!("unit id {unit} out of range"),
            Some("unit ids occupy 3 bits; use 0-7".to_string()),
        ));
    }
    let frame = ControlFrame::new(mode.into(), unit);
    println!("{}", format_hex(&frame.encode()));
    Ok(())
}

fn cmd_control_unpack(hex: &str, pretty: bool, compact: bool, strict: bool) -> Result<(), CliError> {
    let payload = parse_hex(hex)?;
    let frame = ControlFrame::decode(&payload).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("a control frame is 3 bytes (6 hex digits)".to_string()),
        )
    })?;

    let report = ControlReport {
        mode: frame.mode(),
        unit_id: frame.unit_id(),
        verified: frame.verify(),
    };
    println!("{}", serialize_json(&report, pretty, compact)?);

    if strict && !frame.verify() {
        return Err(CliError::new(
            "verification word mismatch",
            Some("the frame is likely foreign traffic on the channel".to_string()),
        ));
    }
    Ok(())
}

fn serialize_json<T: Serialize>(value: &T, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

/// Human rendering of a packet, for bench debugging.
fn render_packet(packet: &LightingPacket) -> String {
    let mut out = String::from("Packet:");
    if packet.trees.is_all() {
        out.push_str(" (All Trees)");
    } else if packet.trees == TreeMask::NONE {
        out.push_str(" *** NO TREES ***");
    } else {
        out.push_str(" Trees");
        for tree in packet.trees.trees() {
            out.push_str(&format!(" {tree}"));
        }
    }
    match packet.instrument {
        Instrument::Memory => {
            out.push_str(&format!(" Mem[{}]", packet.memory_index));
        }
        Instrument::Dimmer => {
            let levels: Vec<String> = packet
                .pwm_levels
                .iter()
                .map(|level| format!("{level:02x}"))
                .collect();
            out.push_str(&format!(" Dim:[{}]", levels.join(",")));
        }
    }
    out.push_str(&format!(" Fade Time {}ms", packet.fade_time_ms));
    out
}

fn parse_trees(spec: &str) -> Result<TreeMask, CliError> {
    let spec = spec.trim();
    if spec.eq_ignore_ascii_case("all") {
        return Ok(TreeMask::ALL);
    }
    if spec.eq_ignore_ascii_case("none") {
        return Ok(TreeMask::NONE);
    }
    if let Some(hex) = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")) {
        let mask = u8::from_str_radix(hex, 16).map_err(|_| {
            CliError::new(
                format!("invalid tree mask '{spec}'"),
                Some("use a hex byte like 0x07".to_string()),
            )
        })?;
        return Ok(TreeMask(mask));
    }

    let mut mask = TreeMask::NONE;
    for part in spec.split(',') {
        let tree: u8 = part.trim().parse().map_err(|_| {
            CliError::new(
                format!("invalid tree list '{spec}'"),
                Some("use 'all', 'none', a hex mask, or tree numbers like 1,2,6".to_string()),
            )
        })?;
        let single = TreeMask::single(tree).ok_or_else(|| {
            CliError::new(
                format!("tree number {tree} out of range"),
                Some(format!("trees are numbered 1-{}", treelink_core::TREE_COUNT)),
            )
        })?;
        mask = TreeMask(mask.0 | single.0);
    }
    Ok(mask)
}

fn parse_levels(spec: &str) -> Result<[u8; LEVEL_COUNT], CliError> {
    let mut levels = [0u8; LEVEL_COUNT];
    if spec.trim().is_empty() {
        return Ok(levels);
    }
    let parts: Vec<&str> = spec.split(',').collect();
    if parts.len() > LEVEL_COUNT {
        return Err(CliError::new(
            format!("too many levels: got {}, frame has {}", parts.len(), LEVEL_COUNT),
            Some("pass at most 16 comma-separated values".to_string()),
        ));
    }
    for (slot, part) in parts.iter().enumerate() {
        levels[slot] = part.trim().parse().map_err(|_| {
            CliError::new(
                format!("invalid level '{}'", part.trim()),
                Some("levels are 0-255".to_string()),
            )
        })?;
    }
    Ok(levels)
}

fn parse_hex(hex: &str) -> Result<Vec<u8>, CliError> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 || hex.is_empty() {
        return Err(CliError::new(
            format!("invalid hex input '{hex}'"),
            Some("expected an even number of hex digits".to_string()),
        ));
    }
    (0..hex.len())
        .step_by(2)
        .map(|at| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| {
                CliError::new(
                    format!("invalid hex input '{hex}'"),
                    Some("expected hex digits only".to_string()),
                )
            })
        })
        .collect()
}

fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::{format_hex, parse_hex, parse_levels, parse_trees, render_packet};
    use treelink_core::{Instrument, LightingPacket, TreeMask};

    #[test]
    fn tree_specs_parse() {
        assert_eq!(parse_trees("all").unwrap(), TreeMask::ALL);
        assert_eq!(parse_trees("none").unwrap(), TreeMask::NONE);
        assert_eq!(parse_trees("0x07").unwrap(), TreeMask(0x07));
        assert_eq!(parse_trees("1,3,6").unwrap(), TreeMask(0b10_0101));
        assert!(parse_trees("7").is_err());
        assert!(parse_trees("apple").is_err());
    }

    #[test]
    fn level_lists_pad_with_zero() {
        let levels = parse_levels("255,128").unwrap();
        assert_eq!(levels[0], 255);
        assert_eq!(levels[1], 128);
        assert_eq!(levels[2], 0);
        assert!(parse_levels("1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17").is_err());
    }

    #[test]
    fn hex_round_trips() {
        let bytes = parse_hex("fe0a00").unwrap();
        assert_eq!(bytes, vec![0xfe, 0x0a, 0x00]);
        assert_eq!(format_hex(&bytes), "fe0a00");
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn text_rendering_matches_the_bench_format() {
        let packet = LightingPacket {
            instrument: Instrument::Memory,
            memory_index: 5,
            fade_time_ms: 500,
            trees: TreeMask(0b101),
            ..LightingPacket::default()
        };
        assert_eq!(
            render_packet(&packet),
            "Packet: Trees 1 3 Mem[5] Fade Time 500ms"
        );
    }

    #[test]
    fn text_rendering_handles_sentinels() {
        let mut packet = LightingPacket {
            trees: TreeMask::ALL,
            ..LightingPacket::default()
        };
        assert!(render_packet(&packet).contains("(All Trees)"));
        packet.trees = TreeMask::NONE;
        assert!(render_packet(&packet).contains("*** NO TREES ***"));
    }
}
