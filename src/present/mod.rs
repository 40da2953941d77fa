//! Presentation helpers.
//!
//! Rendering itself (panels, prompts, key handling) belongs to the UI
//! layer; this module only covers the cosmetic symbol-to-glyph mapping.

pub mod emoji;

pub use emoji::EmojiMap;
