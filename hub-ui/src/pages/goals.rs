//! Goals Page
//!
//! All goals from the data store with their post and participant counts.

use leptos::*;
use leptos_router::*;

use aspiration_hub::views::{GoalListing, Route};

use crate::api;
use crate::components::{CardSkeleton, GoalCard};
use crate::state::global::GlobalState;

#[component]
pub fn Goals() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let listing = create_rw_signal(GoalListing::new());

    // Fetch goals on mount
    create_effect(move |_| {
        let state = state.clone();
        listing.update(|l| l.begin());
        state.begin_request();
        spawn_local(async move {
            let result = api::fetch_goals().await;
            listing.update(|l| l.finish(result));
            state.end_request();
        });
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Goals"</h1>
                    <p class="text-gray-500 mt-1">"What the community is working towards"</p>
                </div>

                <A
                    href=Route::Create.path()
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                >
                    "+ New Goal"
                </A>
            </div>

            {move || listing.with(|l| {
                if l.is_loading() {
                    return view! { <CardSkeleton count=6 /> }.into_view();
                }

                if let Some(e) = l.error() {
                    return view! {
                        <div class="text-center py-12 text-gray-500">
                            <p>"Could not load goals."</p>
                            <p class="text-sm mt-1">{e.to_string()}</p>
                        </div>
                    }.into_view();
                }

                if l.goals().is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-500">"No goals yet. Create the first one!"</p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {l.goals().iter().cloned().map(|goal| {
                            let href = Route::goal(goal.id.clone()).path();
                            view! { <GoalCard goal=goal href=href /> }
                        }).collect_view()}
                    </div>
                }.into_view()
            })}
        </div>
    }
}
