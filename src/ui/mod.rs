//! UI module - pointer gestures and input events driving a session

pub mod input;
pub mod interaction;

pub use input::{InputEvent, KeyCommand};
pub use interaction::{Effect, Interaction, InteractionState, Surface};
