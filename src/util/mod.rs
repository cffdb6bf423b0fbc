//! Helpers shared by the shell components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `appearance` keeps style derivation pure and testable; `theme` isolates
//! the browser glue behind the theme toggle.

pub mod appearance;
pub mod theme;
