//! Point-buy Shared - the character store's wire format
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json, and tracing
//! 2. **No business logic** - pure data types and serialization
//! 3. **Lenient decoding** - saved records that name unknown classes still load

pub mod character_data;

pub use character_data::{decode_load_response, CharacterData};
