//! Conversation state management
//!
//! Per-user sessions and their in-memory store.

pub mod session;
pub mod store;

pub use session::{
    ActiveFlow, AssessmentState, FlowKind, GradePromptSource, Session, WizardState, WizardStep,
};
pub use store::SessionStore;
