use async_trait::async_trait;
use contracts::shared::form_submit::protocol::LOCATION_HEADER;
use contracts::shared::form_submit::{FormMethod, InboundResponse, OutboundRequest, SubmitError};
use gloo_net::http::Request;
use web_sys::RequestRedirect;

/// Sends one [`OutboundRequest`] without following redirects.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &OutboundRequest) -> Result<InboundResponse, SubmitError>;
}

/// Transport over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<InboundResponse, SubmitError> {
        let mut builder = match request.method {
            FormMethod::Get => Request::get(&request.url),
            FormMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder = builder.redirect(RequestRedirect::Manual);

        let built = match &request.body {
            Some(body) => builder.body(body.as_str()),
            None => builder.build(),
        }
        .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?;

        let response = built
            .send()
            .await
            .map_err(|e| SubmitError::Network(format!("Failed to send request: {}", e)))?;

        Ok(InboundResponse::new(
            response.status(),
            response.headers().get(LOCATION_HEADER),
        ))
    }
}
