use contracts::shared::form_submit::SubmitError;

/// Page-level navigation, abstracted so the interceptor can run without a
/// browser window.
pub trait Navigator {
    /// Scheme, host and port of the current page, e.g. `https://shop.example`.
    fn origin(&self) -> Result<String, SubmitError>;
    fn navigate(&self, url: &str) -> Result<(), SubmitError>;
}

/// Navigator backed by `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl WindowNavigator {
    fn location() -> Result<web_sys::Location, SubmitError> {
        web_sys::window()
            .map(|w| w.location())
            .ok_or_else(|| SubmitError::Dom("window is not available".to_string()))
    }
}

impl Navigator for WindowNavigator {
    fn origin(&self) -> Result<String, SubmitError> {
        Self::location()?
            .origin()
            .map_err(|e| SubmitError::Navigation(format!("{:?}", e)))
    }

    fn navigate(&self, url: &str) -> Result<(), SubmitError> {
        Self::location()?
            .set_href(url)
            .map_err(|e| SubmitError::Navigation(format!("{:?}", e)))
    }
}
