mod event;
mod machine;

pub use event::{Command, InputEvent};
pub use machine::{is_misclick, Interaction, InteractionState, Transition};
