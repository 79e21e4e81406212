//! Tabs: a tab panel that learns about its tabs through a child registry.
//!
//! ```text
//! <Tabs on_change=Callback::new(move |id| log::info!("{id}"))>
//!     <Tab id="overview" title="Overview">"..."</Tab>
//!     <Tab id="spending" title="Spending" default_active=true>"..."</Tab>
//!     <Tab id="archive" title="Archive" disabled=true>"..."</Tab>
//! </Tabs>
//! ```

pub mod tab;
pub mod tabs;

pub use tab::Tab;
pub use tabs::{TabRegistration, Tabs, TabsContext};
