//! Default logging setup for the ordered collections tools
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

/// Environment variable holding the log filter, e.g. `ORDERED_LOG=ordered_collections=trace`.
pub const FILTER_ENV: &str = "ORDERED_LOG";
/// Environment variable selecting whether log output is colored (`auto`, `always` or `never`).
pub const STYLE_ENV: &str = "ORDERED_LOG_STYLE";

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Returns a logger builder configured from the environment with the default format.
///
/// Messages are prefixed with the time elapsed since this was called and their level. Whenever
/// the target of a message differs from the previous one, a header line naming the new target is
/// written first.
pub fn builder() -> env_logger::Builder {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, "info")
            .write_style(STYLE_ENV),
    );
    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        let mut last_target = match last_target.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });
    builder
}

/// Perform the default logging setup used by the ordered collections tools.
///
/// Does nothing if a logger was installed already.
pub fn setup() {
    if builder().try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
