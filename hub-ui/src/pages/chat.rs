//! Chat Page
//!
//! Fixed channels with their message threads. Composing is not wired up.

use leptos::*;

use aspiration_hub::catalog;
use aspiration_hub::models::Message;
use aspiration_hub::views::ChannelSelector;

#[component]
pub fn Chat() -> impl IntoView {
    let Some(selector) = ChannelSelector::new(catalog::sample_channels()) else {
        return view! { <p class="text-gray-500">"No channels yet."</p> }.into_view();
    };
    let selector = create_rw_signal(selector);

    view! {
        <div class="grid md:grid-cols-4 gap-6 h-[70vh]">
            <aside class="bg-white rounded-xl border border-gray-200 p-4 space-y-1">
                <h2 class="font-semibold mb-3">"Channels"</h2>
                {move || selector.with(|s| {
                    let active = s.active().id.clone();
                    s.channels().iter().map(|channel| {
                        let id = channel.id.clone();
                        let class = if channel.id == active {
                            "w-full text-left px-3 py-2 rounded-lg bg-indigo-50 text-indigo-700"
                        } else {
                            "w-full text-left px-3 py-2 rounded-lg hover:bg-gray-100"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| selector.update(|s| { s.select(&id); })
                            >
                                {channel.name.clone()}
                            </button>
                        }
                    }).collect_view()
                })}
            </aside>

            <section class="md:col-span-3 bg-white rounded-xl border border-gray-200 flex flex-col">
                <header class="px-4 py-3 border-b border-gray-200 font-semibold">
                    {move || selector.with(|s| s.active().name.clone())}
                </header>

                <div class="flex-1 overflow-y-auto p-4 space-y-4">
                    {move || selector.with(|s| {
                        s.messages().iter().cloned().map(|m| view! { <MessageRow message=m /> }).collect_view()
                    })}
                </div>

                <footer class="p-4 border-t border-gray-200">
                    <input
                        type="text"
                        disabled=true
                        placeholder="Messaging is coming soon"
                        class="w-full px-4 py-2 rounded-lg bg-gray-100 text-gray-400"
                    />
                </footer>
            </section>
        </div>
    }
    .into_view()
}

#[component]
fn MessageRow(message: Message) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3">
            <img src=message.avatar.clone() alt=message.username.clone() class="w-9 h-9 rounded-full" />
            <div>
                <p class="text-sm">
                    <span class="font-medium">{message.username.clone()}</span>
                    <span class="text-gray-400 ml-2">{message.timestamp.clone()}</span>
                </p>
                <p class="text-gray-800">{message.content.clone()}</p>
                {message.image.clone().map(|src| view! {
                    <img src=src alt="" class="mt-2 rounded-lg max-w-xs" />
                })}
            </div>
        </div>
    }
}
