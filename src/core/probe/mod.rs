pub mod actions;
pub mod chain;
pub mod classifier;
pub mod client;
pub mod debug_logger;
pub mod interval;
pub mod prober;
pub mod scheduler;
pub mod session;
pub mod status_renderer;
pub mod types;
pub mod url;

// Re-export commonly used items
pub use chain::ProbeChain;
pub use classifier::classify;
pub use client::{IsahcProbeClient, ProbeClient, ProbeResponse};
pub use debug_logger::{get_debug_logger, EnhancedDebugLogger};
pub use interval::parse_interval;
pub use prober::Prober;
pub use scheduler::Scheduler;
pub use session::{ProberSession, SessionCallbacks};
pub use status_renderer::StatusRenderer;
pub use types::*;
