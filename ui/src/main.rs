#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context as _, anyhow};
use roster_business::RosterConfig;
use roster_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RosterConfig::init().context("invalid ROSTER_* configuration")?;

    // The login simulation runs on this runtime; entering it lets commands
    // spawn from the UI thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("failed to start async runtime")?;
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Roster",
        native_options,
        Box::new(move |_cc| {
            let app = roster_ui::RosterApp::new(State::new(config));
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("eframe exited with an error: {err}"))
}
