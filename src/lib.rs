//! # Brewlog
//!
//! An embedded store for a personal log of brewed coffees:
//! - Whole-collection JSON persistence in a single named slot
//! - Atomic slot replacement (a failed write keeps the old collection)
//! - Serialized read-modify-write mutations, concurrent reads
//! - Pure in-memory filtering by name and roast
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Presentation layer (external)               │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │ load_all/add/update/delete  │ filter(snapshot)
//! ┌───────────────▼──────────────┐      ┌───────▼───────────────┐
//! │         CoffeeStore          │      │     Filter Engine     │
//! │  (write lock around R-M-W)   │      │   (pure, no I/O)      │
//! └───────────────┬──────────────┘      └───────────────────────┘
//!                 │
//!          ┌──────▼──────┐
//!          │    Codec    │  JSON array ⇄ Vec<Coffee>
//!          └──────┬──────┘
//!                 │
//!          ┌──────▼──────┐
//!          │   Medium    │  one text blob, atomic replace
//!          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod telemetry;

pub mod model;
pub mod codec;
pub mod medium;
pub mod store;
pub mod filter;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BrewError, Result};
pub use config::{Config, SyncStrategy};
pub use model::{BrewRatio, Coffee, RoastLevel};
pub use store::CoffeeStore;
pub use filter::{filter, CoffeeFilter};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Brewlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
