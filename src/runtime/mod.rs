//! Application lifecycle: startup, server mode, shutdown

pub mod lifetime;
pub mod modes;
