//! JSON log sink.
//!
//! One object per line with the event fields flattened to the top level, so a
//! request record reads `{"timestamp":..,"level":"INFO","msg":..,"method":..,
//! "path":..,"status":..,"filename":..,"line_number":..}`.

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// `RUST_LOG` when set, `info` otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
}

/// Build the JSON subscriber over an arbitrary writer.
pub fn json_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer),
    )
}

/// Install the process-wide stdout sink.
pub fn init() {
    json_subscriber(env_filter(), std::io::stdout).init();
}
