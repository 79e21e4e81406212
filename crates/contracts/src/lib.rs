//! Framework-free part of the budget UI library: the child registry used by
//! composite components, prop enums and the pure helpers behind tables, pie
//! charts, breadcrumbs and navigation menus.

pub mod enums;
pub mod shared;
