pub mod badge;
pub mod dropdown;
pub mod input;
pub mod status_icon;

pub use badge::{Badge, CountBadge};
pub use dropdown::{Dropdown, DropdownOption};
pub use input::{AmountInput, Input};
pub use status_icon::StatusIcon;
