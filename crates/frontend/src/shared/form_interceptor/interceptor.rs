use contracts::shared::form_submit::{SubmissionIntent, SubmitError, SubmitOutcome};

use super::busy::{BusyGuard, BusyIndicator};
use super::navigator::Navigator;
use super::transport::Transport;

/// Turns a submission into a fetch and, when the server asks for it,
/// a client-side navigation.
///
/// There is no guard against overlapping submissions; each call sends
/// exactly one request and awaits it.
pub struct FormInterceptor<T, N> {
    transport: T,
    navigator: N,
}

impl<T: Transport, N: Navigator> FormInterceptor<T, N> {
    pub fn new(transport: T, navigator: N) -> Self {
        Self {
            transport,
            navigator,
        }
    }

    /// Run one submission. `busy` is taken already shown, so the indicator
    /// is visible from the moment the caller handles the event, and is
    /// released however the submission settles.
    pub async fn submit<I: BusyIndicator>(
        &self,
        intent: SubmissionIntent,
        busy: BusyGuard<I>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let _busy = busy;

        let request = intent.to_request()?;
        log::debug!("Submitting form: {} {}", request.method, request.url);

        let response = self.transport.send(&request).await?;
        log::debug!("Form response: {:?}", response);

        let origin = self.navigator.origin()?;
        match response.navigation_target(&origin) {
            Some(target) => {
                self.navigator.navigate(&target)?;
                Ok(SubmitOutcome::Navigated(target))
            }
            None => Ok(SubmitOutcome::Stayed {
                status: response.status,
            }),
        }
    }
}
