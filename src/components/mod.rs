//! Shell chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SidebarPanel` and `TopNavBar` are independent leaves mounted by the host
//! page. `Tooltip` and `icon` are building blocks they share.

pub mod icon;
pub mod sidebar;
pub mod tooltip;
pub mod top_nav_bar;
