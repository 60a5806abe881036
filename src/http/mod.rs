//! Request plumbing shared by every endpoint: build, authenticate, send, classify.

mod classify;
mod client;
mod multipart;
mod request;

pub use classify::{UnauthorizedCode, UnauthorizedError, api_error};
pub use client::Client;
pub use multipart::{FILE_FIELD, receipt_form};
pub use request::{Payload, Query};
