#![forbid(unsafe_code)]

//! Headless host and replay tooling for `sash-layout`.

pub mod cli;
pub mod error;
pub mod layouts;
pub mod script;
pub mod scripted_host;

pub use error::{HarnessError, Result};
pub use layouts::{Preset, load_config};
pub use script::{FrameRecord, FrameScript, ScriptFrame, ViewportSize, run_script};
pub use scripted_host::{Placement, ScriptedHost, named_window};
