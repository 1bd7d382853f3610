use std::io::Write;

use env_logger::Env;
use log::LevelFilter;

/// Initialize an [`env_logger::Logger`] writing to stderr.
///
/// Controlled by `$RUST_LOG`; defaults to `warn` so normal command output on
/// stdout stays clean. Calling it twice is harmless.
pub fn init_logger() {
    let env = Env::default().default_filter_or(LevelFilter::Warn.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format(|f, record| {
            writeln!(
                f,
                "[{} {}] {}",
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        })
        .try_init();
}
