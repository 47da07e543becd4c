//! Kinetic Core Physics
//!
//! This crate provides the pure physics underneath the Kinetic scroller:
//!
//! - **Bounds**: scrollable range derived from content/viewport geometry
//! - **Momentum**: constant-deceleration coasting from a release velocity
//! - **Bounce Timing**: how long a rubber-band return animation should take
//!
//! Everything here is a pure function of its inputs; the drag state machine
//! and renderer wiring live in `kinetic_scroller`.
//!
//! # Example
//!
//! ```rust
//! use kinetic_core::{calc_momentum, ScrollConfig};
//!
//! let config = ScrollConfig::default();
//!
//! // A 300px drag toward the start edge over 300ms releases at 1 px/ms;
//! // the projected 500px coast is clamped to the 40px bounce buffer.
//! let momentum = calc_momentum(0.0, 300.0, 300.0, 1000.0, &config);
//! assert_eq!(momentum.position, 40.0);
//! assert_eq!(momentum.duration_ms, 40.0);
//! ```

pub mod bounds;
pub mod config;
pub mod events;
pub mod physics;

pub use bounds::{out_of_bounds, ContentMetrics, GeometryProvider};
pub use config::{ConfigError, ScrollConfig, ScrollConfigBuilder};
pub use events::DragEvent;
pub use physics::{bounce_time, calc_momentum, damped_delta, Momentum};
