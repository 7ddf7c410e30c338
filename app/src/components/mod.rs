use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

pub mod lookup;
pub mod overview;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="EV Charging Station Dashboard"/>

        <Router>
            <div class="layout">
                <aside class="sidebar">
                    <h2 class="sidebar-title">"Menu"</h2>
                    <nav class="sidebar-nav">
                        <A href="/" attr:class="sidebar-link">"Station overview"</A>
                        <A href="/stations" attr:class="sidebar-link">"Station lookup"</A>
                    </nav>
                </aside>

                <main class="content">
                    <Routes fallback=|| "Page not found.">
                        <Route path=StaticSegment("") view=overview::OverviewPage/>
                        <Route path=StaticSegment("stations") view=lookup::StationLookupPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
