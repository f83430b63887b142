pub mod page;
pub mod results;
pub mod sidebar;
pub mod state;
