//! Subcommand handlers.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use super::args::ConfigAction;
use crate::ascii::DetailTier;
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::decode::{FrameSource, GifSource};
use crate::protocol::{Request, Response};
use crate::sequencer::{delay_to_ms, AnimationSequencer};
use crate::session::Session;

/// Shortest sleep between frames while playing; GIFs often declare 0.
const MIN_PLAYER_DELAY_MS: u32 = 20;

/// Longest uninterrupted sleep while waiting out a frame delay.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

/// Sleep for `total`, waking every [`SLEEP_SLICE`] to poll `stop`.
///
/// Returns true if `stop` fired before the time was up.
fn sleep_unless_stopped<F: Fn() -> bool>(total: Duration, stop: F) -> bool {
    let deadline = Instant::now() + total;
    loop {
        if stop() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

fn open_sequencer(
    path: &Path,
    tier: DetailTier,
) -> Result<AnimationSequencer<GifSource>, Box<dyn std::error::Error>> {
    let source = GifSource::open(path)?;
    log::info!("Rendering {} at {} detail", path.display(), tier.name());
    Ok(AnimationSequencer::new(source, tier.profile())?)
}

/// Print one frame to stdout.
pub fn render(path: &Path, tier: DetailTier, frame: i64) -> CommandResult {
    let mut sequencer = open_sequencer(path, tier)?;
    let rendered = sequencer.request_frame(frame)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.art.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Play the animation, honoring each frame's delay. Stops on Ctrl+C.
pub fn play(path: &Path, tier: DetailTier, loops: u32, clear_screen: bool) -> CommandResult {
    let mut sequencer = open_sequencer(path, tier)?;
    let frame_count = sequencer.frame_count();
    let mut stdout = io::stdout().lock();

    let first = sequencer.render_initial()?;
    let mut art = first.art;
    let mut delay_ms = delay_to_ms(sequencer.source().frame_info(0)?.delay);
    let mut shown = 0u64;

    loop {
        if clear_screen {
            stdout.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        stdout.write_all(art.as_bytes())?;
        stdout.flush()?;
        shown += 1;

        let hold = Duration::from_millis(delay_ms.max(MIN_PLAYER_DELAY_MS) as u64);
        if sleep_unless_stopped(hold, ctrlc_received) {
            break;
        }
        if loops > 0 && shown >= loops as u64 * frame_count as u64 {
            break;
        }

        let next = sequencer.next_frame()?;
        art = next.art;
        delay_ms = next.delay_ms;
    }

    Ok(())
}

/// Print frame count, dimensions, output grid and timing.
pub fn info(path: &Path, tier: DetailTier) -> CommandResult {
    let source = GifSource::open(path)?;
    let sequencer = AnimationSequencer::new(source, tier.profile())?;
    let source = sequencer.source();
    let grid = sequencer.grid();

    let mut delays = Vec::with_capacity(source.frame_count());
    for i in 0..source.frame_count() {
        delays.push(delay_to_ms(source.frame_info(i)?.delay));
    }
    let total_ms: u64 = delays.iter().map(|&d| d as u64).sum();

    println!("File:        {}", path.display());
    println!("Dimensions:  {}x{}", source.width(), source.height());
    println!("Frames:      {}", source.frame_count());
    println!("Duration:    {} ms", total_ms);
    println!(
        "Output grid: {}x{} ({} tier)",
        grid.width,
        grid.height,
        tier.name()
    );
    println!("Delays (ms): {:?}", delays);
    Ok(())
}

/// Serve the JSON-lines protocol on stdin/stdout until stdin closes.
pub fn serve(path: &Path, tier: DetailTier) -> CommandResult {
    let sequencer = open_sequencer(path, tier)?;

    let (response_tx, response_rx) = mpsc::channel::<Response>();
    let writer = thread::spawn(move || -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        for response in response_rx {
            match response.to_json() {
                Ok(line) => {
                    writeln!(stdout, "{}", line)?;
                    stdout.flush()?;
                }
                Err(e) => log::error!("Failed to serialize response: {}", e),
            }
        }
        Ok(())
    });

    let session = Session::spawn(sequencer, response_tx.clone());
    let read_result = forward_requests(io::stdin().lock(), &session, &response_tx);

    session.shutdown();
    drop(response_tx);
    match writer.join() {
        Ok(result) => result?,
        Err(_) => return Err("response writer panicked".into()),
    }
    read_result?;
    Ok(())
}

/// Feed JSON-lines requests from `input` to the session.
///
/// Malformed lines get an error response. Stops at end of input, or as soon
/// as the worker or the response writer has gone away.
fn forward_requests<R: BufRead>(
    input: R,
    session: &Session,
    responses: &mpsc::Sender<Response>,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Request::from_json(&line) {
            Ok(request) => {
                if !session.submit(request) {
                    log::debug!("Render worker stopped, closing input");
                    break;
                }
            }
            Err(e) => {
                log::warn!("Ignoring malformed request: {}", e);
                let response = Response::Error {
                    message: format!("invalid request: {}", e),
                };
                if responses.send(response).is_err() {
                    log::debug!("Response writer stopped, closing input");
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_override: Option<&Path>) -> CommandResult {
    let config_path = config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path.as_path()))?;
            println!("Current configuration:");
            println!("  Tier: {}", config.render.tier().name());
            println!(
                "  Clear screen: {}",
                if config.player.clear_screen { "yes" } else { "no" }
            );
            if config.player.loops == 0 {
                println!("  Loops: forever");
            } else {
                println!("  Loops: {}", config.player.loops);
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'gif-ascii config show' to view current settings.",
                    config_path.display()
                )
                .into());
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG)?;

            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
