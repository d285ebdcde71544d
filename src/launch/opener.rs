use std::cell::RefCell;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::platform::Platform;
use crate::profile::Browser;
use crate::script;

pub trait UrlOpener {
    fn open_url(&self, url: &str, browser: &Browser) -> AppResult<()>;
}

/// Hands URLs to the operating system, detached from this process.
#[derive(Debug, Clone, Copy)]
pub struct SystemOpener {
    platform: Platform,
}

impl SystemOpener {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str, browser: &Browser) -> AppResult<()> {
        let result = match script::browser_application(self.platform, browser) {
            Some(app) => {
                debug!(url, app, "opening url with browser");
                open::with_detached(url, app)
            }
            None => {
                debug!(url, "opening url with default handler");
                open::that_detached(url)
            }
        };

        result.map_err(|err| AppError::Launch(format!("unable to open {url}: {err}")))
    }
}

/// Records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct DryRunOpener {
    opened: RefCell<Vec<String>>,
}

impl DryRunOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for DryRunOpener {
    fn open_url(&self, url: &str, browser: &Browser) -> AppResult<()> {
        info!(url, %browser, "dry run: would open url");
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
