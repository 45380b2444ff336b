use leptos::{either::Either, ev::MouseEvent, prelude::*};

use super::icons::{MoonIcon, SunIcon};
use super::theme::Theme;

#[component]
pub fn Header(
    brand: String,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let toggle = move |_: MouseEvent| {
        set_theme.update(|t| *t = t.toggled());
        log::debug!("theme set to {:?}", theme.get_untracked());
    };

    view! {
        <nav class=move || format!("{} shadow-sm", theme.get().classes().surface)>
            <div class="max-w-6xl mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <h1 class="text-xl font-bold">{brand}</h1>
                    <button
                        on:click=toggle
                        aria-label="Toggle theme"
                        class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-700"
                    >
                        {move || {
                            if theme.get().is_dark() {
                                Either::Left(view! { <SunIcon size_class="w-5 h-5" /> })
                            } else {
                                Either::Right(view! { <MoonIcon size_class="w-5 h-5" /> })
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
