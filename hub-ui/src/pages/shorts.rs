//! Shorts Page
//!
//! One short at a time with previous/next navigation. Tapping the frame
//! toggles play/pause; playback itself is left to the linked video.

use leptos::*;

use aspiration_hub::catalog;
use aspiration_hub::views::ShortsCursor;

#[component]
pub fn Shorts() -> impl IntoView {
    let shorts = store_value(catalog::sample_shorts());
    let Some(cursor) = ShortsCursor::new(shorts.with_value(|s| s.len())) else {
        return view! { <p class="text-gray-500">"No shorts yet."</p> }.into_view();
    };
    let cursor = create_rw_signal(cursor);
    let current = move || shorts.with_value(|s| s[cursor.with(|c| c.index())].clone());

    view! {
        <div class="flex flex-col items-center space-y-6">
            <div
                class="relative w-full max-w-sm aspect-[9/16] bg-black rounded-2xl overflow-hidden cursor-pointer"
                on:click=move |_| cursor.update(|c| c.toggle_play())
            >
                <img src=move || current().thumbnail_url alt=move || current().title class="w-full h-full object-cover opacity-80" />

                {move || (!cursor.with(|c| c.is_playing())).then(|| view! {
                    <div class="absolute inset-0 flex items-center justify-center text-white text-6xl">"▶"</div>
                })}

                <div class="absolute bottom-0 left-0 right-0 p-4 bg-gradient-to-t from-black/80 text-white">
                    <span class="text-xs uppercase tracking-wide">{move || current().category}</span>
                    <h2 class="text-lg font-semibold">{move || current().title}</h2>
                    <p class="text-sm opacity-80">"@"{move || current().author}</p>
                    <p class="text-sm mt-1">{move || current().description}</p>
                    <a href=move || current().url target="_blank" class="text-xs underline">"Open video"</a>
                </div>
            </div>

            <div class="flex items-center space-x-4">
                <button
                    class="px-4 py-2 rounded-lg bg-white border border-gray-200 hover:bg-gray-100"
                    on:click=move |_| cursor.update(|c| c.previous())
                >
                    "↑ Previous"
                </button>
                <span class="text-sm text-gray-500">
                    {move || cursor.with(|c| format!("{} / {}", c.index() + 1, c.len()))}
                </span>
                <button
                    class="px-4 py-2 rounded-lg bg-white border border-gray-200 hover:bg-gray-100"
                    on:click=move |_| cursor.update(|c| c.next())
                >
                    "↓ Next"
                </button>
            </div>
        </div>
    }
    .into_view()
}
