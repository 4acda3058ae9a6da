//! Record Model
//!
//! The `Coffee` entity and the closed `RoastLevel` enumeration.
//!
//! ## Durable Shape (one array element)
//! ```text
//! {
//!   "id":            string            (identity key, never changes)
//!   "name":          string
//!   "roastLevel":    "LIGHT" | ... | "DARK"     (omitted when unset)
//!   "notes":         string
//!   "imagePath":     string            (omitted when unset)
//!   "grindLevel":    number            (omitted when unset)
//!   "weightInGrams": number            (omitted when unset)
//!   "weighOut":      number            (omitted when unset)
//! }
//! ```
//!
//! Only the roast tag is persisted; display labels live in a static table.

mod coffee;
mod roast;

pub use coffee::{BrewRatio, Coffee};
pub use roast::{ParseRoastLevelError, RoastLevel};
