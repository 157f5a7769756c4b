//! Intercepts a form's native submission and replays it over `fetch`,
//! showing a busy indicator and following `location` answers client-side.

pub mod binding;
pub mod busy;
pub mod controls;
pub mod interceptor;
pub mod navigator;
pub mod transport;

pub use binding::install;
pub use busy::{BusyGuard, BusyIndicator};
pub use controls::{gather_fields, FormControl};
pub use interceptor::FormInterceptor;
pub use navigator::{Navigator, WindowNavigator};
pub use transport::{GlooTransport, Transport};
