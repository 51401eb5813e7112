//! Quake Waves entry point
//!
//! Native mode reads one JSON event per line from stdin and prints the
//! resulting scene as JSON. The browser build is driven from JavaScript
//! through `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quake Waves (native) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::{BufRead, Write};

    use quake_waves::Settings;
    use quake_waves::sim::{ViewEvent, WaveViewer, apply_event};

    let settings = Settings::load()?;
    let mut viewer = WaveViewer::from_settings(&settings)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", viewer.current_scene()?.to_json()?)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Rejected events are logged and skipped; the state is unchanged
        let applied = ViewEvent::from_json(&line).and_then(|event| apply_event(&mut viewer, &event));
        if let Err(e) = applied {
            log::warn!("Ignored event: {}", e);
            continue;
        }

        writeln!(out, "{}", viewer.current_scene()?.to_json()?)?;
        out.flush()?;
    }

    log::info!("Input closed after {} accepted events", viewer.revision());
    Ok(())
}
