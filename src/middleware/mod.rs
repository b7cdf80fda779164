pub mod cors;
pub mod request_tracking;

pub use cors::cors_layer;
pub use request_tracking::{REQUEST_ID_HEADER, request_tracking_middleware};
