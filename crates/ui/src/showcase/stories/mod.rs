pub mod data;
pub mod forms;
pub mod navigation;
pub mod tabs;

pub use data::{ChartStory, TableStory};
pub use forms::{BadgesStory, FormsStory};
pub use navigation::{AccordionStory, NavigationStory, ToolbarStory};
pub use tabs::TabsStory;
