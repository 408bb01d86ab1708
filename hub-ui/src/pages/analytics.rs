//! Analytics Page
//!
//! Summary cards, weekly completion, category mix and monthly trend.
//! Bars are plain divs sized by percentage.

use leptos::*;

use aspiration_hub::catalog;
use aspiration_hub::models::{DayProgress, SummaryCard};

#[component]
pub fn Analytics() -> impl IntoView {
    let analytics = catalog::sample_analytics();
    let distribution = analytics.category_distribution.clone();
    let trend_peak = analytics
        .monthly_trend
        .iter()
        .map(|p| p.value)
        .max()
        .unwrap_or(0)
        .max(1);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-gray-500 mt-1">"How your goals are going"</p>
            </div>

            <div class="grid md:grid-cols-4 gap-4">
                {analytics.summary.into_iter().map(|card| view! { <Summary card=card /> }).collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold mb-4">"Weekly Progress"</h2>
                    <div class="space-y-3">
                        {analytics.weekly_progress.into_iter().map(|d| view! { <DayRow day=d /> }).collect_view()}
                    </div>
                </section>

                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold mb-4">"Goal Categories"</h2>
                    <ul class="space-y-3">
                        {distribution.iter().map(|share| {
                            let pct = share.percent_of(&distribution);
                            view! {
                                <li>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{share.name.clone()}</span>
                                        <span class="text-gray-500">{pct}"%"</span>
                                    </div>
                                    <div class="h-2 bg-gray-200 rounded-full">
                                        <div class="h-2 bg-emerald-500 rounded-full" style=format!("width: {}%", pct) />
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </section>
            </div>

            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <h2 class="text-xl font-semibold mb-4">"Monthly Trend"</h2>
                <div class="flex items-end space-x-4 h-48">
                    {analytics.monthly_trend.into_iter().map(|p| {
                        let height = p.value * 100 / trend_peak;
                        view! {
                            <div class="flex-1 flex flex-col items-center justify-end h-full">
                                <span class="text-xs text-gray-500 mb-1">{p.value}</span>
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
fn Summary(card: SummaryCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-4 border border-gray-200">
            <p class="text-sm text-gray-500">{card.title}</p>
            <p class="text-2xl font-bold mt-1">{card.value}</p>
            <p class="text-xs text-gray-400 mt-1">{card.note}</p>
        </div>
    }
}

#[component]
fn DayRow(day: DayProgress) -> impl IntoView {
    let pct = if day.total == 0 {
        0
    } else {
        day.completed * 100 / day.total
    };

    view! {
        <div class="flex items-center space-x-3">
            <span class="w-10 text-sm text-gray-500">{day.day}</span>
            <div class="flex-1 h-3 bg-gray-200 rounded-full">
                <div class="h-3 bg-indigo-500 rounded-full" style=format!("width: {}%", pct) />
            </div>
            <span class="w-12 text-right text-sm">{day.completed}"/"{day.total}</span>
        </div>
    }
}
