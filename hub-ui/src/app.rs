//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    Analytics, Chat, Connect, CreatePage, GoalDetail, GoalPage, Goals, Home, Profile, Shorts,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/profile" view=Profile />
                        <Route path="/analytics" view=Analytics />
                        <Route path="/connect" view=Connect />
                        <Route path="/connect/goals" view=Goals />
                        <Route path="/connect/goals/:id" view=GoalDetail />
                        <Route path="/connect/chat" view=Chat />
                        <Route path="/connect/posts" view=GoalPage />
                        <Route path="/create" view=CreatePage />
                        <Route path="/shorts" view=Shorts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the global loading indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500">
                <span>"AspirationHub"</span>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-indigo-500">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
