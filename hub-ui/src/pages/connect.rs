//! Connect Page
//!
//! Community hub: trending goals, the community feed and links to the
//! goal list, chat and content pages.

use leptos::*;
use leptos_router::*;

use aspiration_hub::catalog;
use aspiration_hub::views::{LikeSet, Route};

use crate::components::{GoalCard, PostCard};

#[component]
pub fn Connect() -> impl IntoView {
    let liked = create_rw_signal(LikeSet::new());
    let trending = catalog::trending_goals();
    let posts = catalog::community_posts();

    view! {
        <div class="space-y-10">
            <div>
                <h1 class="text-3xl font-bold">"Connect"</h1>
                <p class="text-gray-500 mt-1">"Find people chasing the same goals"</p>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <HubLink route=Route::Goals icon="🎯" title="Goals" text="Browse every goal" />
                <HubLink route=Route::Chat icon="💬" title="Channels" text="Chat by topic" />
                <HubLink route=Route::Posts icon="📚" title="Content" text="Tips and questions" />
            </div>

            <section>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Trending Goals"</h2>
                    <A href=Route::Goals.path() class="text-indigo-600 hover:underline">"View all"</A>
                </div>
                <div class="grid md:grid-cols-3 gap-4">
                    {trending.into_iter().map(|goal| view! {
                        <GoalCard goal=goal href=Route::Goals.path() />
                    }).collect_view()}
                </div>
            </section>

            <section class="space-y-4">
                <h2 class="text-xl font-semibold">"Community Feed"</h2>
                {posts.into_iter().map(|post| {
                    let id = post.id.clone();
                    let id_for_click = id.clone();
                    let likes = post.likes;
                    view! {
                        <PostCard
                            post=post
                            liked=Signal::derive(move || liked.with(|l| l.is_liked(&id)))
                            likes=Signal::derive(move || likes)
                            on_like=move || liked.update(|l| { l.toggle(&id_for_click); })
                        />
                    }
                }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn HubLink(
    route: Route,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <A href=route.path() class="flex items-center space-x-4 bg-white rounded-xl p-4 border border-gray-200 hover:shadow-md">
            <span class="text-3xl">{icon}</span>
            <div>
                <p class="font-semibold">{title}</p>
                <p class="text-sm text-gray-500">{text}</p>
            </div>
        </A>
    }
}
