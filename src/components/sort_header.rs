//! Sortable Table Header Component

use leptos::prelude::*;

use crate::pipeline::Direction;

/// Clicking the active column flips the direction; another column starts ascending
pub fn next_direction<K: PartialEq>(active: K, direction: Direction, clicked: K) -> Direction {
    if active == clicked {
        direction.toggle()
    } else {
        Direction::Ascending
    }
}

#[component]
pub fn SortHeader<K>(
    #[prop(into)] label: String,
    key: K,
    sort: RwSignal<K>,
    direction: RwSignal<Direction>,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let on_click = move |_| {
        let next = next_direction(sort.get_untracked(), direction.get_untracked(), key);
        sort.set(key);
        direction.set(next);
    };
    let is_active = move || sort.get() == key;
    let arrow = move || if is_active() { direction.get().arrow() } else { "" };

    view! {
        <th class="sortable" class:active=is_active on:click=on_click>
            {label}
            <span class="sort-arrow">{arrow}</span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_column_toggles() {
        assert_eq!(next_direction(1, Direction::Ascending, 1), Direction::Descending);
        assert_eq!(next_direction(1, Direction::Descending, 1), Direction::Ascending);
    }

    #[test]
    fn test_new_column_starts_ascending() {
        assert_eq!(next_direction(1, Direction::Descending, 2), Direction::Ascending);
    }
}
