#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod playback;

use anyhow::{bail, Result};
use log::info;
use pathlight_engine::{EngineConfig, GuidanceEngine};
use playback::RecordedFrame;
use std::path::PathBuf;

fn log_init() {
    tracing_subscriber::fmt::init();
}

/// Batch entry point: replays one recorded frame of detector output
/// through the guidance engine and prints the navigation message.
///
/// Usage: pathlight <recorded-frame.json> [--grayscale]
fn main() -> Result<()> {
    log_init();

    let mut path: Option<PathBuf> = None;
    let mut grayscale = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--grayscale" => grayscale = true,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => bail!("unexpected argument: {other}"),
        }
    }
    let Some(path) = path else {
        bail!("usage: pathlight <recorded-frame.json> [--grayscale]");
    };

    let recorded = RecordedFrame::load(&path)?;
    info!(
        "replaying {} ({}x{}, {} models)",
        path.display(),
        recorded.width,
        recorded.height,
        recorded.models.len()
    );

    // The grayscale toggle is resolved here, before the frame reaches any
    // detector; the engine itself never sees the flag.
    let mut frame = recorded.frame()?;
    if grayscale {
        frame = frame.to_grayscale();
    }

    let engine = GuidanceEngine::new(recorded.detector_set(), EngineConfig::default());
    let message = engine.process(&frame);
    println!("{}", serde_json::to_string_pretty(&message)?);

    Ok(())
}
