use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Installs the stderr subscriber. `RUST_LOG` directives are kept; the
/// `--log-level` value applies to the mktable crates.
pub fn init(level: LogLevel) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["mktable_core", "mktable_cli"] {
        if let Ok(directive) = format!("{}={}", target, level).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    // A second init (tests calling run twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
