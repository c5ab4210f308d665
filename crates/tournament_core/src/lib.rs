//! Tournament engine for a 12-team national basketball tournament
//!
//! This crate provides:
//! - Starting form factors from exhibition results
//! - Group round robins with ranking- and form-weighted outcomes
//! - Standings, cross-group ranking and pot seeding
//! - A quarterfinal draw that keeps group mates apart where it can
//! - The knockout bracket through to the medals
//!
//! # Usage
//!
//! ```ignore
//! let form = calculate_form_factors(&history)?;
//! let groups = build_groups(&roster, &form)?;
//! let outcome = Tournament::new(groups, SimulationSettings::default())
//!     .run(&mut StdRng::seed_from_u64(7))?;
//! println!("{:?}", outcome.medals());
//! ```

pub mod draw;
pub mod error;
pub mod form;
pub mod group_stage;
pub mod knockout;
pub mod random;
pub mod roster;
pub mod seeding;
pub mod simulator;
pub mod standings;
pub mod tournament;
pub mod types;

pub use draw::*;
pub use error::*;
pub use form::*;
pub use group_stage::*;
pub use knockout::*;
pub use random::*;
pub use roster::*;
pub use seeding::*;
pub use simulator::*;
pub use standings::*;
pub use tournament::*;
pub use types::*;
