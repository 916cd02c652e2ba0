//! Core session, directory, and telemetry types for the SkyWatch
//! weather dashboard.
//!
//! Everything here is free of browser APIs so the token, login, and
//! chart logic can be tested natively; the frontend crate wires these
//! types to storage, timers, and the DOM.

mod chart;
mod generation;
mod signup;
mod token;
mod user;
mod weather;

pub use chart::{CHART_CAPACITY, ChartBuffer, ChartSample};
pub use generation::SessionGeneration;
pub use signup::{MIN_PASSWORD_LEN, SignupError, SignupRequest, signup};
pub use token::{
    ClaimsPayload, TOKEN_TTL_HOURS, decode_token, decode_token_at, encode_token, now_ms,
};
pub use user::{UserDirectory, UserRecord};
pub use weather::{LatestReading, MISSING_VALUE, PredictedReading, metric_text};
