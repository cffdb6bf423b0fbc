//! Client-side view state.
//!
//! DESIGN
//! ======
//! Only components with behaviour beyond hover styling own state. The top
//! bar is stateless, so the sidebar is the sole module here.

pub mod sidebar;
