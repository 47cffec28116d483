#[cfg(target_arch = "wasm32")]
fn main() {
    markpad::app::bootstrap::start();
}

/// Render the page for a single location and print it.
///
/// Usage: `markpad [PATH]`, PATH defaulting to `/`.
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    use markpad::app::infrastructure::logging;
    use markpad::app::{AppSettings, render_page};

    let settings = AppSettings::load();
    logging::init(&settings.log_level);

    let requested = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    match render_page(&settings, &requested).await {
        Ok(html) => {
            print!("{}", html);
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to render {}: {}", requested, e);
            std::process::ExitCode::FAILURE
        }
    }
}
