//! Error Message Component
//!
//! The one place any failed operation is shown: auth, list fetch, or a
//! list mutation.

use leptos::prelude::*;

/// Inline red error text, hidden while `message` is `None`
///
/// # Arguments
/// * `message` - Text to show, if any
/// * `on_dismiss` - When given, a close button that runs this callback
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-message" role="alert" style="color: red; margin-top: 8px;">
                    <span>{text}</span>
                    {on_dismiss.map(|dismiss| view! {
                        <button
                            type="button"
                            class="dismiss-btn"
                            style="margin-left: 8px;"
                            on:click=move |_| dismiss.run(())
                        >
                            "×"
                        </button>
                    })}
                </div>
            }
        })
    }
}
