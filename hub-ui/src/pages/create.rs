//! Create Page
//!
//! One form for both goals and posts. Post mode needs the goal list, which
//! is fetched on mount.

use leptos::*;
use leptos_router::*;

use aspiration_hub::models::Category;
use aspiration_hub::views::{CreateForm, FormMode, Submission, SubmitOutcome};

use crate::api;
use crate::state::global::GlobalState;

#[component]
pub fn CreatePage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(CreateForm::new());
    let navigate = use_navigate();

    // Fetch goal options on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_goal_options().await;
            form.update(|f| f.set_goal_options(result));
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(s)) => s,
            Some(Err(e)) => {
                state.show_error(&e.to_string());
                return;
            }
            None => return,
        };

        let state = state.clone();
        let navigate = navigate.clone();
        state.begin_request();
        spawn_local(async move {
            let result = match &submission {
                Submission::Goal(goal) => api::insert_goal(goal).await,
                Submission::Post(post) => api::insert_post(post).await,
            };
            state.end_request();

            match form.try_update(|f| f.finish_submit(&submission, result)) {
                Some(SubmitOutcome::Navigate(route)) => {
                    state.show_success("Saved!");
                    navigate(&route.path(), Default::default());
                }
                Some(SubmitOutcome::Failed(reason)) => state.show_error(&reason),
                Some(SubmitOutcome::Rejected(e)) => state.show_error(&e.to_string()),
                None => {}
            }
        });
    };

    let is_goal_mode = move || form.with(|f| f.mode() == FormMode::Goal);

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">
                    {move || if is_goal_mode() { "Create a Goal" } else { "Share an Update" }}
                </h1>
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100"
                    on:click=move |_| form.update(|f| f.toggle_mode())
                >
                    {move || if is_goal_mode() { "Switch to post" } else { "Switch to goal" }}
                </button>
            </div>

            <form on:submit=on_submit class="bg-white rounded-xl p-6 border border-gray-200 space-y-4">
                {move || if is_goal_mode() {
                    view! { <GoalFields form=form /> }.into_view()
                } else {
                    view! { <PostFields form=form /> }.into_view()
                }}

                <button
                    type="submit"
                    disabled=move || form.with(|f| f.is_submitting())
                    class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white rounded-lg font-medium"
                >
                    {move || if form.with(|f| f.is_submitting()) { "Saving..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn GoalFields(form: RwSignal<CreateForm>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium">"Title"</span>
            <input
                type="text"
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                prop:value=move || form.with(|f| f.goal_draft().title.clone())
                on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
            />
        </label>

        <label class="block">
            <span class="text-sm font-medium">"Description"</span>
            <textarea
                rows="4"
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                prop:value=move || form.with(|f| f.goal_draft().description.clone())
                on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
            />
        </label>

        <label class="block">
            <span class="text-sm font-medium">"Category"</span>
            <select
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                on:change=move |ev| {
                    let category = event_target_value(&ev).parse::<Category>().ok();
                    form.update(|f| f.set_category(category));
                }
            >
                <option value="" selected=move || form.with(|f| f.goal_draft().category.is_none())>
                    "Choose a category"
                </option>
                {Category::all().iter().map(|c| {
                    let c = *c;
                    view! {
                        <option
                            value=c.as_str()
                            selected=move || form.with(|f| f.goal_draft().category == Some(c))
                        >
                            {c.as_str()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
fn PostFields(form: RwSignal<CreateForm>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (media_input, set_media_input) = create_signal(String::new());

    let add_media = move || {
        let url = media_input.get_untracked();
        if form.try_update(|f| f.add_media_url(&url)).unwrap_or(false) {
            set_media_input.set(String::new());
        }
    };

    view! {
        <label class="block">
            <span class="text-sm font-medium">"Goal"</span>
            <select
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                on:change=move |ev| {
                    let id = event_target_value(&ev);
                    let result = form.try_update(|f| f.select_goal(&id));
                    if let Some(Err(e)) = result {
                        state.show_error(&e.to_string());
                    }
                }
            >
                <option value="" selected=move || form.with(|f| f.post_draft().goal_id.is_none())>
                    "Select a goal"
                </option>
                {move || form.with(|f| {
                    let selected = f.post_draft().goal_id.clone();
                    f.goal_options().iter().map(|o| {
                        let is_selected = selected.as_deref() == Some(o.id.as_str());
                        view! {
                            <option value=o.id.clone() selected=is_selected>{o.title.clone()}</option>
                        }
                    }).collect_view()
                })}
            </select>
            {move || form.with(|f| f.goal_options_error().map(|e| view! {
                <p class="text-sm text-red-600 mt-1">"Could not load goals: "{e.to_string()}</p>
            }))}
        </label>

        <label class="block">
            <span class="text-sm font-medium">"What did you do?"</span>
            <textarea
                rows="4"
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                prop:value=move || form.with(|f| f.post_draft().content.clone())
                on:input=move |ev| form.update(|f| f.set_content(event_target_value(&ev)))
            />
        </label>

        <div>
            <span class="text-sm font-medium">"Media URLs"</span>
            <input
                type="url"
                placeholder="Paste a link and press Enter"
                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg"
                prop:value=media_input
                on:input=move |ev| set_media_input.set(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add_media();
                    }
                }
            />
            <ul class="mt-2 space-y-1">
                {move || form.with(|f| {
                    f.post_draft().media_urls.iter().enumerate().map(|(i, url)| view! {
                        <li class="flex items-center justify-between text-sm bg-gray-50 px-3 py-1 rounded">
                            <span class="truncate">{url.clone()}</span>
                            <button
                                type="button"
                                class="text-red-500 ml-2"
                                on:click=move |_| form.update(|f| { f.remove_media_url(i); })
                            >
                                "Remove"
                            </button>
                        </li>
                    }).collect_view()
                })}
            </ul>
        </div>
    }
}
