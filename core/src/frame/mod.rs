//! Frame-driven processing: signals, cancellation, and phase ordering.

pub mod cancel;
pub mod processor;
pub mod signal;
pub mod teleport;


pub use cancel::ActionCancelMonitor;
pub use processor::FrameProcessor;
pub use signal::FrameSignal;
pub use teleport::TeleportStatus;
