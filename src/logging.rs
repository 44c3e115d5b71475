use std::{backtrace::Backtrace, panic::PanicHookInfo};

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber and the panic hook. `RUST_LOG` wins over
/// `log_level` when set.
///
/// Logs go to stderr; stdout carries the generated code.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        std::panic::set_hook(Box::new(log_panic));
    }
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic");
    let location = info
        .location()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());

    tracing::error!(
        panic = %message,
        location = %location,
        backtrace = %Backtrace::capture(),
        "entity-gen panicked"
    );
}
