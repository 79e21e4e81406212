pub mod breadcrumbs;
pub mod format;
pub mod nav;
pub mod pie;
pub mod registry;
pub mod table;
