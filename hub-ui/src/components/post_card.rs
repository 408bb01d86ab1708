//! Post Card Component

use chrono::{DateTime, Utc};
use leptos::*;

use aspiration_hub::models::Post;

/// A post with its author, first media item and a like button.
/// The like button's state and count are owned by the page.
#[component]
pub fn PostCard<F>(
    post: Post,
    #[prop(into)]
    liked: Signal<bool>,
    #[prop(into)]
    likes: Signal<u64>,
    on_like: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let date = post.created_at.map(|d| relative_date(d, Utc::now()));

    view! {
        <article class="bg-white rounded-xl border border-gray-200 overflow-hidden">
            <div class="flex items-center space-x-3 p-4">
                {post.author.clone().map(|author| view! {
                    <img src=author.avatar alt=author.name.clone() class="w-10 h-10 rounded-full" />
                    <div>
                        <p class="font-medium">{author.name}</p>
                        {date.clone().map(|d| view! { <p class="text-xs text-gray-500">{d}</p> })}
                    </div>
                })}
            </div>

            {post.question.clone().map(|q| view! {
                <h3 class="px-4 font-semibold">{q}</h3>
            })}
            <p class="px-4 pb-3 text-gray-700">{post.content.clone()}</p>

            {post.cover().map(|src| view! {
                <img src=src.to_string() alt="" class="w-full max-h-96 object-cover" />
            })}

            <div class="flex items-center space-x-6 px-4 py-3 text-sm text-gray-500">
                <button
                    on:click=move |_| on_like()
                    class=move || if liked.get() { "text-red-500" } else { "hover:text-red-500" }
                >
                    {move || if liked.get() { "♥ " } else { "♡ " }}
                    {move || likes.get()}
                </button>
                <span>"💬 "{post.comments}</span>
            </div>
        </article>
    }
}

/// "today", "yesterday", "N days ago" within a week, else the calendar date
pub fn relative_date(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match now.signed_duration_since(at).num_days() {
        i64::MIN..=0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n @ 2..=6 => format!("{} days ago", n),
        _ => at.format("%b %d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_relative_date() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

        assert_eq!(relative_date(now - Duration::hours(3), now), "today");
        assert_eq!(relative_date(now + Duration::hours(1), now), "today");
        assert_eq!(relative_date(now - Duration::hours(30), now), "yesterday");
        assert_eq!(relative_date(now - Duration::days(4), now), "4 days ago");
        assert_eq!(relative_date(now - Duration::days(9), now), "May 01, 2024");
    }
}
