//! Installs the global logger.

use std::panic;

/// Logs `[HH:MM:SS LEVEL target] message` lines to stdout at `level`, and routes panic
/// messages through the logger.
pub fn init(level: log::LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())?;

    panic::set_hook(Box::new(|info| {
        log::error!("{}", info);
    }));

    log::debug!("Logging initialized at {}", level);
    Ok(())
}
