//! Logger setup. `RUST_LOG` overrides the configured default level on
//! native targets; in the browser records go to the developer console.

#[cfg(not(target_arch = "wasm32"))]
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(default_level: &str) {
    let level = default_level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}
