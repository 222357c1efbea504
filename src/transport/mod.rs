pub mod request;

pub use request::{DEFAULT_TIMEOUT, HttpTransport, RequestError};
