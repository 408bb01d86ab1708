//! Home Page

use leptos::*;
use leptos_router::*;

use aspiration_hub::views::Route;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <section class="text-center py-16">
                <h1 class="text-5xl font-bold mb-4">"Turn aspirations into progress"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "Set goals, share your journey and grow with a community that cheers you on."
                </p>
                <div class="flex justify-center space-x-4">
                    <A
                        href=Route::Goals.path()
                        class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                    >
                        "Explore Goals"
                    </A>
                    <A
                        href=Route::Create.path()
                        class="px-6 py-3 border border-indigo-600 text-indigo-600 rounded-lg font-medium"
                    >
                        "Create a Goal"
                    </A>
                </div>
            </section>

            <section class="grid md:grid-cols-3 gap-6">
                <Feature
                    icon="🎯"
                    title="Set goals"
                    text="Fitness, learning, career or personal. Pick a category and describe what you are after."
                    route=Route::Create
                />
                <Feature
                    icon="🤝"
                    title="Connect"
                    text="Follow trending goals, join channels and learn from people on the same path."
                    route=Route::Connect
                />
                <Feature
                    icon="📈"
                    title="Track progress"
                    text="See your weekly completion, category mix and monthly trend at a glance."
                    route=Route::Analytics
                />
            </section>
        </div>
    }
}

#[component]
fn Feature(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    route: Route,
) -> impl IntoView {
    view! {
        <A href=route.path() class="block bg-white rounded-xl p-6 border border-gray-200 hover:shadow-md">
            <div class="text-4xl mb-3">{icon}</div>
            <h2 class="text-xl font-semibold mb-2">{title}</h2>
            <p class="text-gray-600">{text}</p>
        </A>
    }
}
