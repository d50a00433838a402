//! Rectangle demo: two orange triangles covering a quad on the teal canvas,
//! drawn with one indexed call per frame.

use learngl::{run_frame_loop, Error, GlWindow, RectangleScene, WindowConfig};

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
    let scene = RectangleScene::new(window.gl_context())?;

    log::info!("entering frame loop");
    run_frame_loop(&mut window, || scene.draw());
    Ok(())
}
