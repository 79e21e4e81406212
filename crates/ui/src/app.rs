use crate::shared::theme::ThemeProvider;
use crate::showcase::ShowcasePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <ShowcasePage />
        </ThemeProvider>
    }
}
