//! Profile Page

use leptos::*;

use aspiration_hub::catalog;
use aspiration_hub::models::GoalProgress;

#[component]
pub fn Profile() -> impl IntoView {
    let profile = catalog::sample_profile();
    let peak = profile.progress.iter().map(|p| p.value).max().unwrap_or(0).max(1);

    view! {
        <div class="space-y-8">
            <section class="bg-white rounded-xl p-6 border border-gray-200 flex items-center space-x-6">
                <img src=profile.avatar.clone() alt=profile.name.clone() class="w-24 h-24 rounded-full" />
                <div class="flex-1">
                    <h1 class="text-3xl font-bold">{profile.name.clone()}</h1>
                    <p class="text-gray-500">{profile.tagline.clone()}</p>
                </div>
                <div class="grid grid-cols-3 gap-6 text-center">
                    <Stat value=profile.goal_count label="Goals" />
                    <Stat value=profile.followers label="Followers" />
                    <Stat value=profile.achievement_count label="Achievements" />
                </div>
            </section>

            <div class="grid md:grid-cols-2 gap-6">
                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold mb-4">"Current Goals"</h2>
                    <div class="space-y-4">
                        {profile.goals.into_iter().map(|g| view! { <ProgressBar goal=g /> }).collect_view()}
                    </div>
                </section>

                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold mb-4">"Achievements"</h2>
                    <ul class="space-y-3">
                        {profile.achievements.into_iter().map(|a| view! {
                            <li class="flex items-center justify-between">
                                <span>"🏆 "{a.title}</span>
                                <span class="text-sm text-gray-500">{a.date}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </div>

            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <h2 class="text-xl font-semibold mb-4">"Progress Over Time"</h2>
                <div class="flex items-end space-x-4 h-48">
                    {profile.progress.into_iter().map(|p| {
                        let height = p.value * 100 / peak;
                        view! {
                            <div class="flex-1 flex flex-col items-center justify-end h-full">
                                <div class="w-full bg-indigo-500 rounded-t" style=format!("height: {}%", height) />
                                <span class="text-xs text-gray-500 mt-1">{p.label}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Stat(value: u32, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <p class="text-2xl font-bold">{value}</p>
            <p class="text-sm text-gray-500">{label}</p>
        </div>
    }
}

#[component]
fn ProgressBar(goal: GoalProgress) -> impl IntoView {
    let pct = goal.progress.min(100);

    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span>{goal.title}</span>
                <span class="text-gray-500">{pct}"%"</span>
            </div>
            <div class="h-2 bg-gray-200 rounded-full">
                <div class="h-2 bg-indigo-500 rounded-full" style=format!("width: {}%", pct) />
            </div>
        </div>
    }
}
