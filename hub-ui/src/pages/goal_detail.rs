//! Goal Detail Page
//!
//! One goal from the data store and the posts attached to it.

use leptos::*;
use leptos_router::*;

use aspiration_hub::client::ClientError;
use aspiration_hub::models::{Goal, Post};
use aspiration_hub::views::Route;

use crate::api;
use crate::components::goal_card::category_class;
use crate::components::Loading;
use crate::state::global::GlobalState;

#[derive(Clone, PartialEq)]
enum Detail {
    Loading,
    Found(Goal, Vec<Post>),
    Missing,
    Failed(String),
}

#[component]
pub fn GoalDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let goal_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let detail = create_rw_signal(Detail::Loading);

    // Refetch whenever the id changes
    create_effect(move |_| {
        let id = goal_id();
        let state = state.clone();
        detail.set(Detail::Loading);
        state.begin_request();
        spawn_local(async move {
            detail.set(load(&id).await);
            state.end_request();
        });
    });

    view! {
        <div class="space-y-8">
            <A href=Route::Goals.path() class="text-indigo-600 hover:underline">"← All goals"</A>

            {move || match detail.get() {
                Detail::Loading => view! { <Loading /> }.into_view(),
                Detail::Missing => view! {
                    <div class="text-center py-12 text-gray-500">"This goal does not exist."</div>
                }.into_view(),
                Detail::Failed(reason) => view! {
                    <div class="text-center py-12 text-gray-500">
                        <p>"Could not load this goal."</p>
                        <p class="text-sm mt-1">{reason}</p>
                    </div>
                }.into_view(),
                Detail::Found(goal, posts) => view! { <GoalBody goal=goal posts=posts /> }.into_view(),
            }}
        </div>
    }
}

async fn load(id: &str) -> Detail {
    let goal = match api::fetch_goal(id).await {
        Ok(Some(row)) => row.into_goal(),
        Ok(None) => return Detail::Missing,
        Err(e) => return Detail::Failed(e.to_string()),
    };

    match api::fetch_posts(id).await {
        Ok(rows) => Detail::Found(goal, rows.into_iter().map(|r| r.into_post()).collect()),
        Err(ClientError::Api { status: 404, .. }) => Detail::Missing,
        Err(e) => Detail::Failed(e.to_string()),
    }
}

#[component]
fn GoalBody(goal: Goal, posts: Vec<Post>) -> impl IntoView {
    let counts = goal.counts;

    view! {
        <section class="bg-white rounded-xl p-6 border border-gray-200">
            <span class=format!("text-xs px-2 py-0.5 rounded-full {}", category_class(&goal.category))>
                {goal.category.clone()}
            </span>
            <h1 class="text-3xl font-bold mt-2">{goal.title.clone()}</h1>
            <p class="text-gray-600 mt-2">{goal.description.clone()}</p>
            <div class="flex space-x-6 mt-4 text-sm text-gray-500">
                <span>{counts.posts.map(|c| c.to_string()).unwrap_or_else(|| "–".into())}" posts"</span>
                <span>{counts.participants.map(|c| c.to_string()).unwrap_or_else(|| "–".into())}" participants"</span>
            </div>
        </section>

        <section class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Updates"</h2>
                <A href=Route::Create.path() class="text-indigo-600 hover:underline">"+ Post an update"</A>
            </div>

            {if posts.is_empty() {
                view! { <p class="text-gray-500">"No posts yet."</p> }.into_view()
            } else {
                posts.into_iter().map(|post| view! { <PostItem post=post /> }).collect_view()
            }}
        </section>
    }
}

#[component]
fn PostItem(post: Post) -> impl IntoView {
    let date = post
        .created_at
        .map(|d| d.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_default();

    view! {
        <article class="bg-white rounded-xl p-4 border border-gray-200">
            <p class="text-xs text-gray-500 mb-2">{date}</p>
            <p class="text-gray-800">{post.content.clone()}</p>
            {(!post.media_urls.is_empty()).then(|| view! {
                <div class="grid grid-cols-2 md:grid-cols-3 gap-2 mt-3">
                    {post.media_urls.iter().cloned().map(|src| view! {
                        <img src=src alt="" class="rounded-lg object-cover h-32 w-full" />
                    }).collect_view()}
                </div>
            })}
        </article>
    }
}
