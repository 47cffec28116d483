//! Mounts the application into the hosting page, or renders a single
//! location to HTML on native targets.

use std::sync::atomic::{AtomicBool, Ordering};

use super::domain::settings::AppSettings;
use super::infrastructure::error::MountError;

pub const MOUNT_SELECTOR: &str = "#app";
pub const PAGE_TITLE: &str = "MarkPad";

/// Element id named by a `#<id>` selector.
pub fn mount_id(selector: &str) -> Result<&str, MountError> {
    match selector.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Ok(id),
        _ => Err(MountError::InvalidSelector(selector.to_string())),
    }
}

/// One-shot guard; the first `claim` wins.
#[derive(Debug, Default)]
pub struct MountSlot(AtomicBool);

impl MountSlot {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn claim(&self) -> Result<(), MountError> {
        if self.0.swap(true, Ordering::SeqCst) {
            Err(MountError::AlreadyMounted)
        } else {
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
static APP_MOUNT: MountSlot = MountSlot::new();

/// Router basename for the configured base path; `None` when served at `/`.
fn basename(settings: &AppSettings) -> Option<String> {
    let trimmed = settings.base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

/// Attach the application to the configured element. Fails if the element
/// is missing or the application is already mounted; there is no retry.
#[cfg(target_arch = "wasm32")]
pub fn mount(settings: &AppSettings) -> super::infrastructure::error::Result<()> {
    use crate::ui::views::{App, AppProps};

    settings.validate()?;
    let id = mount_id(&settings.mount_selector)?;
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| MountError::TargetNotFound(settings.mount_selector.clone()))?;

    APP_MOUNT.claim()?;
    let props = AppProps {
        basename: basename(settings),
    };
    yew::Renderer::<App>::with_root_and_props(root, props).render();
    log::info!("MarkPad mounted at {}", settings.mount_selector);
    Ok(())
}

/// Browser entry point.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use super::infrastructure::logging;

    console_error_panic_hook::set_once();
    let settings = AppSettings::default();
    logging::init(&settings.log_level);

    if let Err(e) = mount(&settings) {
        log::error!("Failed to start MarkPad: {}", e);
    }
}

/// Render the page for `path` (as the address bar would show it).
#[cfg(not(target_arch = "wasm32"))]
pub async fn render_page(
    settings: &AppSettings,
    path: &str,
) -> super::infrastructure::error::Result<String> {
    use super::infrastructure::page::page_shell;
    use crate::ui::views::{ServerApp, ServerAppProps};

    settings.validate()?;
    let id = mount_id(&settings.mount_selector)?;

    let url = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    log::debug!("Rendering {}", url);

    let props = ServerAppProps {
        url,
        basename: basename(settings),
    };
    let body = yew::ServerRenderer::<ServerApp>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;

    Ok(page_shell(PAGE_TITLE, id, &body))
}
