//! Filter Select Component
//!
//! Dropdown bound to a string signal. The empty value means "all"; pages turn
//! the selected value back into their enum with [`selected`].

use leptos::prelude::*;

#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// `(value, label)` pairs
    options: Vec<(String, String)>,
    value: RwSignal<String>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "All".to_string());
    let options = options
        .into_iter()
        .map(|(option_value, option_label)| {
            let current = option_value.clone();
            view! {
                <option value=option_value prop:selected=move || value.get() == current>
                    {option_label}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="filter-select">
            <span class="filter-label">{label}</span>
            <select on:change=move |ev| value.set(event_target_value(&ev))>
                <option value="" prop:selected=move || value.get().is_empty()>{all_label}</option>
                {options}
            </select>
        </label>
    }
}

/// `(value, label)` pairs for an enum's variants
pub fn options_of<T>(all: &[T], value: fn(&T) -> &'static str, label: fn(&T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|item| (value(item).to_string(), label(item).to_string()))
        .collect()
}

/// Variant whose value matches the selection; `None` for "all" or unknown values
pub fn selected<T: Copy>(all: &[T], value: &str, key: fn(&T) -> &'static str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    all.iter().copied().find(|item| key(item) == value)
}

/// Numeric id selection, e.g. a project or client filter
pub fn selected_id(value: &str) -> Option<u32> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceStatus;

    #[test]
    fn test_selected_variant() {
        assert_eq!(
            selected(&InvoiceStatus::ALL, "overdue", InvoiceStatus::as_str),
            Some(InvoiceStatus::Overdue)
        );
        assert_eq!(selected(&InvoiceStatus::ALL, "", InvoiceStatus::as_str), None);
        assert_eq!(selected(&InvoiceStatus::ALL, "bogus", InvoiceStatus::as_str), None);
    }

    #[test]
    fn test_options_follow_variant_order() {
        let options = options_of(&InvoiceStatus::ALL, InvoiceStatus::as_str, InvoiceStatus::label);
        assert_eq!(options.len(), InvoiceStatus::ALL.len());
        assert_eq!(options[0].0, InvoiceStatus::ALL[0].as_str());
    }

    #[test]
    fn test_selected_id() {
        assert_eq!(selected_id("12"), Some(12));
        assert_eq!(selected_id(""), None);
    }
}
