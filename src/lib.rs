//! Persistence for player-vs-player match results awaiting confirmation,
//! plus chat formatting helpers.

pub mod code;
pub mod config;
pub mod crud;
pub mod executor;
pub mod model;
pub mod schema;
pub mod text;

pub use code::generate_confirmation_code;
pub use config::{migrate, DbConfig};
pub use crud::MatchStore;
pub use executor::{Bind, Executed, QueryExecutor};
pub use model::{MatchModel, NewMatch};
pub use schema::{MatchKey, Outcome};
pub use text::{emojify, regex_escape, MESSAGE_LIMIT};
