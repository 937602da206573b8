//! Point-buy Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Character management and persistence orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::CharacterManager;
