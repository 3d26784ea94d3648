//! Conversation flows
//!
//! Each flow is a set of pure functions over the session store: input
//! text in, replies out. The dispatcher routes inbound messages to the
//! flow owning the user's session.

pub mod alarm;
pub mod assessment;
pub mod planner;
pub mod stress;
