//! Request/response middleware.
//!
//! - [`status_compat::legacy_status_codes`] -- Rewrites 404/409 to 400 when
//!   the server runs in [`ErrorStatusMode::Legacy`](crate::config::ErrorStatusMode).

pub mod status_compat;
