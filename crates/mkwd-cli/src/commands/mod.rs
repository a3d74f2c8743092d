//! Command handlers. `mkwd` has a single command, so there is one module.

pub mod scaffold;
