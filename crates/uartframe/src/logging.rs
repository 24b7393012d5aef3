use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Diagnostic verbosity for the read cycle, written to stderr.
///
/// `Info` reports the configuration milestones (port opened, baud applied,
/// frame received). `Debug` adds the per-chunk progress the frame loop
/// emits: declared length, bytes per read, running total. `Quiet` limits
/// stderr to warnings and errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Quiet,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

pub fn init_logging(format: LogFormat, verbosity: Verbosity) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(verbosity.filter())
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_progress_levels() {
        assert!(Verbosity::Quiet.filter() < LevelFilter::INFO);
        assert!(Verbosity::Quiet.filter() >= LevelFilter::WARN);
    }

    #[test]
    fn debug_enables_chunk_progress() {
        assert_eq!(Verbosity::Debug.filter(), LevelFilter::DEBUG);
        assert!(Verbosity::Info.filter() < LevelFilter::DEBUG);
        assert_eq!(Verbosity::Trace.filter(), LevelFilter::TRACE);
    }
}
