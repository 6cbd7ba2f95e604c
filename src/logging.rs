//! Log output setup for the binary.
//!
//! Library code only uses the `log` macros; the binary installs `env_logger`
//! once at startup. `RUST_LOG` overrides the default `info` level.

use std::io::Write;

use chrono::Local;
use env_logger::Env;

/// Install the global logger. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
