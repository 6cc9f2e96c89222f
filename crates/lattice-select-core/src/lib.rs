//! Core reactive primitives for Lattice Select.
//!
//! This crate provides the small set of building blocks the select widgets are
//! assembled from:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Property System**: Values with change detection ([`Property`])
//! - **Posted Inputs**: Deferred, FIFO input delivery for observers that want
//!   to react to a notification by driving the widget again ([`PostQueue`])
//! - **Logging**: `tracing` targets used across the workspace ([`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_select_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use lattice_select_core::Property;
//!
//! struct Toggle {
//!     on: Property<bool>,
//! }
//!
//! impl Toggle {
//!     fn flip(&self) {
//!         self.on.set(!self.on.get());
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false) };
//! toggle.on.changed().connect(|on| println!("toggled: {on}"));
//! toggle.flip();
//! assert!(toggle.on.get());
//! ```

pub mod logging;
pub mod property;
pub mod queue;
pub mod signal;

pub use property::Property;
pub use queue::{PostQueue, Poster};
pub use signal::{ConnectionId, Signal};
