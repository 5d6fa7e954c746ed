// ABOUTME: HTTP middleware shared by every route of the estimator API
// ABOUTME: Currently the CORS policy; tracing and timeouts are tower-http layers in routes

pub mod cors;

// CORS configuration
pub use cors::setup_cors;
