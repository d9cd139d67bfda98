//! Input adapters translating outside events into explorer commands.

#[cfg(feature = "gui")]
pub mod gui;
