//! Goal Card Component

use leptos::*;
use leptos_router::*;

use aspiration_hub::models::Goal;

/// Card linking to a goal. Missing counts render as a dash.
#[component]
pub fn GoalCard(
    goal: Goal,
    /// Link target, usually the goal's detail route
    #[prop(into)]
    href: String,
) -> impl IntoView {
    let posts = count_label(goal.counts.posts);
    let participants = count_label(goal.counts.participants);

    view! {
        <A
            href=href
            class="block bg-white rounded-xl border border-gray-200 hover:shadow-md transition-shadow overflow-hidden"
        >
            {goal.image_url.clone().map(|src| view! {
                <img src=src alt=goal.title.clone() class="w-full h-40 object-cover" />
            })}
            <div class="p-4">
                <div class="flex items-center justify-between mb-2">
                    <span class=format!("text-xs px-2 py-0.5 rounded-full {}", category_class(&goal.category))>
                        {goal.category.clone()}
                    </span>
                    {goal.difficulty.map(|d| view! {
                        <span class="text-xs text-gray-500">{d.to_string()}</span>
                    })}
                </div>
                <h3 class="font-semibold text-lg">{goal.title.clone()}</h3>
                <p class="text-gray-600 text-sm mt-1 line-clamp-2">{goal.description.clone()}</p>
                <div class="flex items-center space-x-4 mt-4 text-sm text-gray-500">
                    <span>"📝 "{posts}" posts"</span>
                    <span>"👥 "{participants}" joined"</span>
                </div>
            </div>
        </A>
    }
}

fn count_label(count: Option<u64>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "–".to_string())
}

pub fn category_class(category: &str) -> &'static str {
    match category {
        "Fitness" => "bg-green-100 text-green-700",
        "Learning" => "bg-blue-100 text-blue-700",
        "Career" => "bg-amber-100 text-amber-700",
        "Personal" => "bg-purple-100 text-purple-700",
        _ => "bg-gray-100 text-gray-700",
    }
}
