use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

type FilteredRegistry = Layered<EnvFilter, Registry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose, LogFormat::Compact);
}

pub fn init_json_logger(verbose: bool) {
    init_logger(verbose, LogFormat::Json);
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("guarded_divide=debug,warn")
        } else {
            EnvFilter::new("guarded_divide=warn")
        }
    })
}

// stdout belongs to the console dialogue, so the fmt layer writes to stderr.
fn stderr_layer(format: LogFormat) -> Box<dyn Layer<FilteredRegistry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => Box::new(layer.compact()),
        LogFormat::Json => Box::new(layer.json()),
    }
}

fn init_logger(verbose: bool, format: LogFormat) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(stderr_layer(format))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_formats_build_on_the_filtered_registry() {
        for format in [LogFormat::Compact, LogFormat::Json] {
            let subscriber = tracing_subscriber::registry()
                .with(EnvFilter::new("guarded_divide=debug"))
                .with(stderr_layer(format));

            tracing::subscriber::with_default(subscriber, || {
                tracing::debug!("logger smoke line");
            });
        }
    }
}
