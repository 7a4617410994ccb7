//! Plain data carried through the orchestrators. Acceptability is checked by validators, not here.

pub mod order;
pub mod user;

pub use order::*;
pub use user::*;
