//! Menu and prompt catalog
//!
//! Static vocabulary of the bot: semantic intents, button labels,
//! screen texts and keyboard grids. Handlers match on intents and
//! labels from here and never on inline strings.

pub mod intent;
pub mod keyboards;
pub mod labels;
pub mod texts;

pub use intent::Intent;
pub use keyboards::Keyboard;
