//! Agamotto CLI
//!
//! Usage:
//!   agamotto                                # frames from stdin, move the OS pointer
//!   agamotto --input session.jsonl          # frames from a file
//!   agamotto --dry-run                      # print commands instead of dispatching
//!   agamotto --json                         # snapshot JSON per frame
//!
//! Input is one JSON frame record per line, produced by the external vision
//! collaborator: {"t": <seconds>, "hands": [{"label": "Left"|"Right",
//! "landmarks": [{"x":..,"y":..,"z":..} x21]}]}

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use serde::Deserialize;

use agamotto::core::{Controller, EnigoBackend, FeedbackPlayer};
use agamotto::types::{ControllerSnapshot, Gesture, HandFrame, SnapshotMode};
use agamotto::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "agamotto",
    version = VERSION,
    about = "Agamotto - gesture-driven pointer control",
    long_about = "Agamotto turns hand-landmark observations into OS pointer actions.\n\n\
                  Unlock: pinch thumb to ring finger, then cross your wrists and hold.\n\
                  Calibrate: pinky-pinch each of four corners (hold 0.45s), fist to undo.\n\
                  Control: pinch index to tap or drag, pinch middle to right-click,\n\
                  flat hand to scroll, fist to double-click.\n\n\
                  Frames are read as JSON lines from --input (default stdin), each\n\
                  {\"t\": seconds, \"hands\": [...]} as produced by the vision process."
)]
struct Args {
    /// Frame source: path to a JSONL file, or '-' for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Screen width in pixels (0 = detect from the OS)
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Screen height in pixels (0 = detect from the OS)
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Print pointer commands instead of dispatching them
    #[arg(long)]
    dry_run: bool,

    /// Output a snapshot as JSON for every frame
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Suppress audio feedback
    #[arg(long)]
    quiet: bool,
}

/// One line of vision output
#[derive(Debug, Deserialize)]
struct FrameRecord {
    /// Capture timestamp, monotonic seconds
    t: f64,
    #[serde(default)]
    hands: Vec<HandFrame>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut backend = if args.dry_run {
        None
    } else {
        match EnigoBackend::new() {
            Ok(backend) => Some(backend),
            Err(e) => {
                eprintln!("Failed to open input backend: {:?}", e);
                eprintln!("Falling back to --dry-run.");
                None
            }
        }
    };

    let (width, height) = screen_size(&args, backend.as_ref());
    let mut controller = Controller::new(width, height);
    let player = FeedbackPlayer::spawn(args.quiet);

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        match File::open(&args.input) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Cannot open {}: {}", args.input, e);
                std::process::exit(1);
            }
        }
    };

    if !args.json {
        print_header(width, height, args.no_color);
    }

    let mut frames: u64 = 0;
    let mut last_status = String::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let record: FrameRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Skipping malformed frame: {}", e);
                continue;
            }
        };

        let step = controller.process(&record.hands, record.t);
        frames += 1;

        for event in &step.feedback {
            player.send(*event);
        }

        for cmd in &step.commands {
            match backend.as_mut() {
                Some(backend) => {
                    if let Err(e) = backend.apply(cmd) {
                        // Never fatal: skip the command and keep tracking
                        eprintln!("Pointer dispatch failed: {:?}", e);
                    }
                }
                None => println!("  -> {}", cmd),
            }
        }

        if args.json {
            match serde_json::to_string(&step.snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Snapshot serialization failed: {}", e),
            }
        } else {
            let status = format_status(&step.snapshot, controller.current_gesture(), args.no_color);
            if status != last_status {
                println!("{}", status);
                last_status = status;
            }
        }
    }

    if !args.json {
        println!("\nSession ended. Frames: {}", frames);
    }
}

/// Pick the target screen size: flags first, then the OS, then a fallback
fn screen_size(args: &Args, backend: Option<&EnigoBackend>) -> (u32, u32) {
    if args.width > 0 && args.height > 0 {
        return (args.width, args.height);
    }
    if let Some((w, h)) = backend.and_then(|b| b.screen_size()) {
        return (w, h);
    }
    (1920, 1080)
}

fn print_header(width: u32, height: u32, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Agamotto v{} - {}x{}", VERSION, width, height);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Agamotto v{} - {}x{}\x1b[0m", VERSION, width, height);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!("Unlock: pinch ring finger, then cross wrists and hold.");
    println!();
}

/// One status line per state change
fn format_status(snapshot: &ControllerSnapshot, gesture: Gesture, no_color: bool) -> String {
    let state = snapshot.system.state;
    let color = if no_color { "" } else { state.color_code() };
    let reset = if no_color {
        ""
    } else {
        agamotto::types::SystemState::color_reset()
    };

    let detail = match &snapshot.mode {
        SnapshotMode::Standby => {
            if snapshot.system.message.is_empty() {
                "standby".to_string()
            } else {
                snapshot.system.message.clone()
            }
        }
        SnapshotMode::Calibration(view) => format!("{} [{}/4]", view.message, view.step),
        SnapshotMode::Running(view) => format!(
            "{} ({:.0}, {:.0}){}",
            gesture,
            view.screen_pos.x,
            view.screen_pos.y,
            if view.is_dragging { " | dragging" } else { "" }
        ),
    };

    format!("{}[{}] {}{}", color, state, detail, reset)
}
