//! Blank-canvas demo: an 800x600 window cleared to teal every frame, until
//! the window is closed or Escape is held.

use learngl::{run_frame_loop, Error, GlWindow, WindowConfig};

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = WindowConfig::default();
    let mut window = GlWindow::new(&config)?;

    log::info!("entering frame loop");
    run_frame_loop(&mut window, || {});
    Ok(())
}
