use owo_colors::{OwoColorize, Stream::Stderr};

/// Setting this environment variable (to anything) enables trace logging
pub const TRACE_ENV_VAR: &str = "IPGUARD_TRACE";

/// Render a padded, coloured label for a log level
fn level_label(level: log::Level) -> String {
    // Level labels are padded to keep the output aligned
    let label = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    label
        .if_supports_color(Stderr, |text| match level {
            log::Level::Error => text.red().to_string(),
            log::Level::Warn => text.yellow().to_string(),
            log::Level::Info => text.green().to_string(),
            log::Level::Debug => text.bright_blue().to_string(),
            log::Level::Trace => text.bright_white().to_string(),
        })
        .if_supports_color(Stderr, |text| text.bold())
        .to_string()
}

/// Pick the log level from the `--verbose` flag and the trace environment variable
fn level_filter(verbose: bool) -> log::LevelFilter {
    match std::env::var_os(TRACE_ENV_VAR) {
        Some(_) => log::LevelFilter::Trace,
        None if verbose => log::LevelFilter::Debug,
        None => log::LevelFilter::Info,
    }
}

/// Enable the logger.
///
/// Logs go to STDERR so they never mix with classification results on STDOUT.
pub fn enable_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}{}: {}",
                level_label(record.level()),
                // Only show the outer package name if verbose logging is enabled (otherwise nothing)
                match verbose {
                    true => format!(
                        " [{}]",
                        record.target().split("::").next().unwrap_or_default()
                    ),
                    false => String::new(),
                }
                .if_supports_color(Stderr, |text| text.bright_black()),
                message
            ));
        })
        .level(level_filter(verbose))
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("Verbose logging enabled");
    Ok(())
}
