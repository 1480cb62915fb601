//! Handoff to WhatsApp: the one place the checkout touches the outside world
//!
//! A valid submit turns into a `https://wa.me/<recipient>?text=<message>`
//! link that a [`Launcher`] opens in a new browsing context. Opening is
//! fire-and-forget: nothing waits for the messaging app, and its absence is
//! never detected.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::checkout::{CheckoutEvent, CheckoutView, Effect, ValidationErrors};
use crate::error::CheckoutError;

pub const DEFAULT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_RECIPIENT: &str = "6283173441172";

/// Fixed-prefix messaging link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppLink {
    pub base_url: String,
    pub recipient: String,
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl WhatsAppLink {
    pub fn url_for(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(message)
        )
    }
}

/// Pull the decoded `text` parameter back out of a link
pub fn message_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("text="))
        .and_then(|encoded| urlencoding::decode(encoded).ok())
        .map(|decoded| decoded.into_owned())
}

/// Something that can ask the platform to open a URL
pub trait Launcher {
    fn open(&self, url: &str) -> Result<(), CheckoutError>;
}

/// Opens URLs with the desktop's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(url: &str) -> std::process::Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = std::process::Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = std::process::Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler").arg(url);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = std::process::Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Spawn `cmd` and reap it on a background thread so it never lingers as a zombie
fn spawn_reaped(
    cmd: &mut std::process::Command,
) -> std::io::Result<std::thread::JoinHandle<Option<std::process::ExitStatus>>> {
    let mut child = cmd.spawn()?;
    let pid = child.id();
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!(pid, %status, "opener exited");
            Some(status)
        }
        Err(e) => {
            warn!(pid, error = %e, "failed to reap opener");
            None
        }
    }))
}

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), CheckoutError> {
        use std::process::Stdio;

        let mut cmd = Self::command(url);
        let opener = cmd.get_program().to_string_lossy().into_owned();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The reaper thread is detached; the caller never waits on the opener
        spawn_reaped(&mut cmd).map_err(|source| CheckoutError::Launch {
            opener,
            url: url.to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Opens URLs in a new browser tab
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

#[cfg(target_arch = "wasm32")]
impl Launcher for BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), CheckoutError> {
        let blocked = |reason: String| CheckoutError::BrowserBlocked {
            url: url.to_string(),
            reason,
        };
        let window = web_sys::window().ok_or_else(|| blocked("no window".to_string()))?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| blocked(format!("{:?}", e)))?;
        Ok(())
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// Validation failed; nothing was opened
    Rejected(ValidationErrors),
    /// The link was handed to the launcher
    Opened { url: String, message: String },
}

/// Validate, compose, encode and open.
///
/// Returns `Rejected` without touching the launcher when the form is invalid.
pub fn submit(
    view: &mut CheckoutView,
    link: &WhatsAppLink,
    launcher: &dyn Launcher,
) -> Result<HandoffOutcome, CheckoutError> {
    let message = match view.dispatch(CheckoutEvent::Submit) {
        Effect::Handoff { message } => message,
        Effect::Rejected | Effect::None => {
            return Ok(HandoffOutcome::Rejected(view.errors().clone()));
        }
    };

    let url = link.url_for(&message);
    info!(
        quantity = view.order().quantity(),
        payment = %view.payment_method(),
        "opening whatsapp handoff"
    );

    if let Err(e) = launcher.open(&url) {
        warn!(error = %e, "handoff launch failed");
        return Err(e);
    }

    Ok(HandoffOutcome::Opened { url, message })
}
