//! Application layer: the gateways callers use.
//!
//! Both gateways share one `ApiClient`, which owns the resolved credentials and
//! the transport, and turns vendor replies into `Response`s or errors.

mod api_client;
pub mod express;
pub mod gateway;
