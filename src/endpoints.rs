//! The endpoint URIs served by the application.

/// The route the messaging provider posts incoming messages to.
pub const WHATSAPP_WEBHOOK: &str = "/whatsapp";
/// The route for health checks from load balancers and uptime monitors.
pub const HEALTH: &str = "/health";
