pub mod components;
pub mod dom;
pub mod icons;
pub mod registry_handle;
pub mod theme;
