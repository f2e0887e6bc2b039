//! Terminal presentation: input mapping, layout and drawing.
pub mod input;
pub mod keymap;
pub mod layout;
pub mod render;
pub mod text;
