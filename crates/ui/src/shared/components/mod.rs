pub mod accordion;
pub mod breadcrumbs;
pub mod navbar_menu;
pub mod pie_chart;
pub mod table;
pub mod tabs;
pub mod toolbar;
pub mod ui;

pub use accordion::{Accordion, AccordionContext, AccordionItem};
pub use breadcrumbs::Breadcrumbs;
pub use navbar_menu::NavbarMenu;
pub use pie_chart::PieChart;
pub use table::{DataTable, TableCellMoney};
pub use tabs::{Tab, Tabs, TabsContext};
pub use toolbar::{Toolbar, ToolbarButton, ToolbarContext, ToolbarGroup, ToolbarSeparator};
pub use ui::{AmountInput, Badge, CountBadge, Dropdown, DropdownOption, Input, StatusIcon};
