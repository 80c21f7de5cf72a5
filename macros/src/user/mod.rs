//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Cursor)]` | on struct/enum | Declare tag and full descriptor |
//! | `#[derive(Categorized)]` | on struct/enum | Declare tag only |

pub mod cursor;

pub use cursor::{expand_derive_categorized, expand_derive_cursor};
