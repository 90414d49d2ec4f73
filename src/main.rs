//! Smooth Shift Lock - headless demo
//!
//! Runs the shift lock controller against a simulated camera and character
//! for a scripted session and logs what it does.
//!
//! Pass `--save-settings` to write the active settings to the config dir.

mod camera;
mod host;
mod session;
mod settings;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::GameSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting smooth shift lock demo...");

    let settings = GameSettings::load();
    if std::env::args().any(|arg| arg == "--save-settings") {
        let path = settings.save().context("Failed to save settings")?;
        info!("Wrote settings to {}", path.display());
    }

    let report = session::run(&settings).context("Shift lock session failed")?;

    info!(
        "Session finished: {} frames, {:.2}s simulated, locked={}",
        report.frames, report.simulated_seconds, report.enabled_at_end
    );
    info!(
        "Final camera offset ({:.3}, {:.3}, {:.3}), body lags camera by {:.4} rad",
        report.final_offset.x,
        report.final_offset.y,
        report.final_offset.z,
        report.heading_error()
    );
    info!(
        "After teardown: {} key listeners, {} buttons",
        report.listeners_after_teardown, report.buttons_after_teardown
    );

    Ok(())
}
