//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎯"</span>
                        <span class="text-xl font-bold text-indigo-600">"AspirationHub"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/profile" label="Profile" />
                        <NavLink href="/analytics" label="Analytics" />
                        <NavLink href="/connect" label="Connect" />
                        <NavLink href="/shorts" label="Shorts" />
                        <A
                            href="/create"
                            class="ml-2 px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white font-medium transition-colors"
                        >
                            "+ Create"
                        </A>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
