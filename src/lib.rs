//! `posflow-client` is an async HTTP client for the POSFlow order-management API.
//!
//! Every call goes through [`PosFlowClient::request`], which applies a
//! per-attempt timeout and retries transient failures (timeouts, unreachable
//! server) with a fixed delay. HTTP error statuses are never retried.
//!
//! Resource helpers cover the backend's REST surface:
//! - orders: [`PosFlowClient::get_orders`], [`PosFlowClient::create_order`], ...
//! - products, inventory, sales, auth and menu
//! - [`PosFlowClient::health_check`]
//!
//! [`ViewRegistry`] tracks the admin, kitchen and customer views of a desktop
//! shell built on top of the client.

mod client;
mod error;
mod options;
mod request;
mod resources;
mod retry;
mod types;
mod views;

pub use client::{PosFlowClient, DEFAULT_BASE_URL};
pub use error::{ErrorKind, PosFlowError};
pub use options::ClientOptions;
pub use request::RequestOptions;
pub use types::{
    AvailabilityUpdate, Credentials, Envelope, ErrorInfo, OrderStatus, StatusUpdate,
    StockAdjustment,
};
pub use views::{View, ViewHost, ViewRegistry};

pub type Result<T> = std::result::Result<T, PosFlowError>;
