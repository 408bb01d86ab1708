//! Goal Content Page
//!
//! Tips and questions from the community. Each like click adds one to the
//! post's counter for this visit.

use leptos::*;

use aspiration_hub::catalog;
use aspiration_hub::views::LikeCounters;

use crate::components::PostCard;

#[component]
pub fn GoalPage() -> impl IntoView {
    let posts = catalog::content_posts();
    let counters = create_rw_signal(LikeCounters::seeded(&posts));

    view! {
        <div class="space-y-6 max-w-2xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Goal Content"</h1>
                <p class="text-gray-500 mt-1">"Questions and tips from people working on their goals"</p>
            </div>

            {posts.into_iter().map(|post| {
                let id = post.id.clone();
                let id_for_click = id.clone();
                let seed = post.likes;
                view! {
                    <PostCard
                        post=post
                        liked=Signal::derive(|| false)
                        likes=Signal::derive(move || counters.with(|c| c.get(&id).unwrap_or(seed)))
                        on_like=move || counters.update(|c| { c.increment(&id_for_click); })
                    />
                }
            }).collect_view()}
        </div>
    }
}
