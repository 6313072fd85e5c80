//! Client-side counterpart of the HTTP API: a typed client, a
//! stale-while-revalidate cache over it and the dashboard auth gate.

pub mod api_client;
pub mod auth_gate;
pub mod error;
pub mod storage;
pub mod swr;

pub use api_client::{Fetcher, PortfolioClient};
pub use auth_gate::{AuthGate, AuthState, GuardDecision};
pub use error::ClientError;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use swr::{ResourceState, SwrCache, TypedResource};
