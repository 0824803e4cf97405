use std::io;

/// Opens URLs outside the application.
pub trait Navigator: Send {
    /// Opens `url` in a new browsing context.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}
