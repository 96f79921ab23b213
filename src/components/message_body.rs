//! Message Body Component
//!
//! Markdown content of one message plus its attachment chips.

use leptos::prelude::*;

use crate::format;
use crate::markdown;
use crate::models::Attachment;

#[component]
pub fn MessageBody(content: String, attachments: Vec<Attachment>) -> impl IntoView {
    let html = markdown::render_inline(&content);

    view! {
        <div class="message-body" inner_html=html></div>
        {(!attachments.is_empty()).then(|| {
            view! {
                <div class="attachments">
                    {attachments
                        .into_iter()
                        .map(|a| {
                            view! {
                                <span class="attachment-chip">
                                    "📎 " {a.name} " · " {format::file_size(a.size_bytes)}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })}
    }
}
