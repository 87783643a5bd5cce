use crate::Result;
use colorful::Colorful;
use core::fmt::Arguments;
use core::time::Duration;
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Record};
use std::io;
use std::path::Path;
use std::time::Instant;

lazy_static! {
    static ref STARTED: Instant = Instant::now();
}

/// Console goes to stderr so stdout only carries the rendered screen.
pub fn init_logger(log_dir: Option<&Path>) -> Result<()> {
    lazy_static::initialize(&STARTED);
    let colored = atty::is(atty::Stream::Stderr);

    let console = fern::Dispatch::new()
        .format(move |cb, message, record| console_format(cb, message, record, colored))
        .level(LevelFilter::Warn)
        .level_for("pokedex_details", LevelFilter::Info)
        .level_for("dex", LevelFilter::Info)
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new().chain(console);

    if let Some(dir) = log_dir {
        let mut prefix = dir.to_string_lossy().into_owned();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }

        std::fs::create_dir_all(dir)?;

        let file = fern::Dispatch::new()
            .format(file_format)
            .level(LevelFilter::Warn)
            .level_for("pokedex_details", LevelFilter::Debug)
            .level_for("requester", LevelFilter::Debug)
            .chain(fern::DateBased::new(prefix, String::from("dex-%F.log")));

        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    Ok(())
}

/// `pokedex_details::screen` reads as `screen`, the binary itself as `dex`.
fn short_target(target: &str) -> &str {
    match target.split("::").last() {
        Some("pokedex_details") | None => "dex",
        Some(last) => last,
    }
}

/// One console line: time since the run started, level, module, message.
fn console_line(
    elapsed: Duration,
    level: Level,
    target: &str,
    message: &str,
    colored: bool,
) -> String {
    let level_name = format!("{:<5}", level.as_str().to_lowercase());
    let level_name = if colored {
        level_style(level, &level_name)
    } else {
        level_name
    };

    format!(
        "{:>6.3}s {} {}: {}",
        elapsed.as_secs_f64(),
        level_name,
        short_target(target),
        message
    )
}

fn console_format(cb: fern::FormatCallback, message: &Arguments, record: &Record, colored: bool) {
    let line = console_line(
        STARTED.elapsed(),
        record.level(),
        record.target(),
        &message.to_string(),
        colored,
    );

    cb.finish(format_args!("{}", line))
}

fn file_format(cb: fern::FormatCallback, message: &Arguments, record: &Record) {
    cb.finish(format_args!(
        "{} [{}] {} {}",
        chrono::Local::now().format("%F %T%.3f"),
        record.level(),
        record.target(),
        message,
    ))
}

fn level_style(level: Level, name: &str) -> String {
    let styled = match level {
        Level::Trace | Level::Debug => name.dark_gray(),
        Level::Info => name.cyan(),
        Level::Warn => name.yellow(),
        Level::Error => name.red().bold(),
    };

    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_shortened() {
        assert_eq!(short_target("pokedex_details"), "dex");
        assert_eq!(short_target("pokedex_details::screen"), "screen");
        assert_eq!(short_target("requester::pokeapi"), "pokeapi");
        assert_eq!(short_target("dex"), "dex");
    }

    #[test]
    fn plain_console_line() {
        let line = console_line(
            Duration::from_millis(1250),
            Level::Info,
            "pokedex_details::screen",
            "Loaded pikachu with 3 evolutions",
            false,
        );

        assert_eq!(line, " 1.250s info  screen: Loaded pikachu with 3 evolutions");
    }

    #[test]
    fn colored_console_line_keeps_the_text() {
        let line = console_line(Duration::from_secs(0), Level::Error, "dex", "boom", true);

        assert!(line.contains("error"));
        assert!(line.ends_with("dex: boom"));
    }
}
