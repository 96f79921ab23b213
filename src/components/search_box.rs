//! Search Box Component

use leptos::prelude::*;

/// Text input bound to a search signal, with a clear button
#[component]
pub fn SearchBox(value: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-icon">"⌕"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-clear" title="Clear" on:click=move |_| value.set(String::new())>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
