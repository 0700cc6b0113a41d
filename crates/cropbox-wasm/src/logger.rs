//! Console logging setup.

use log::{Level, LevelFilter};

/// Route `log` records to the browser console.
///
/// The console logger is installed once and passes everything through;
/// `level` only moves the global max level, so later calls can change it.
pub(crate) fn init(level: LevelFilter) {
    let _ = console_log::init_with_level(Level::Trace);
    log::set_max_level(level);
}

/// Parse a level name, defaulting to `Info` for anything unrecognised.
pub(crate) fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("OFF"), LevelFilter::Off);
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
