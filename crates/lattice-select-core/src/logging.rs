//! Logging facilities for Lattice Select.
//!
//! Lattice Select uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_select=debug")
//!     .init();
//! ```
//!
//! The constants below can be used in `tracing` directives to filter logs by
//! subsystem.

/// Span names used throughout Lattice Select for tracing.
pub mod span_names {
    /// Input dispatch span.
    pub const DISPATCH: &str = "lattice_select::dispatch";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_select_core::signal";
    /// Posted input queue target.
    pub const QUEUE: &str = "lattice_select_core::queue";
    /// Select widget state machine target.
    pub const SELECT: &str = "lattice_select::select";
    /// Option registry target.
    pub const REGISTRY: &str = "lattice_select::registry";
    /// Filter engine target.
    pub const FILTER: &str = "lattice_select::filter";
    /// Scroll synchronizer target.
    pub const SCROLL: &str = "lattice_select::scroll";
}
