//! Group Stage
//!
//! Partitions already filtered and sorted rows by a key. Member order inside
//! each group is the input order.

use std::collections::HashMap;
use std::hash::Hash;

use super::sort::locale_cmp;

#[derive(Debug, Clone, PartialEq)]
pub struct Group<'s, K, T> {
    pub key: K,
    pub label: String,
    pub rows: Vec<&'s T>,
}

/// Groups in first-seen order of their key
pub fn group_by<'s, K, T>(rows: &[&'s T], key: impl Fn(&T) -> K) -> Vec<(K, Vec<&'s T>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'s T>)> = Vec::new();
    for row in rows {
        let k = key(*row);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(*row),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![*row]));
            }
        }
    }
    groups
}

/// Groups ordered alphabetically by their resolved label
pub fn group_by_label<'s, K, T>(
    rows: &[&'s T],
    key: impl Fn(&T) -> K,
    label: impl Fn(&K) -> String,
) -> Vec<Group<'s, K, T>>
where
    K: Eq + Hash + Clone,
{
    let mut groups: Vec<Group<'s, K, T>> = group_by(rows, key)
        .into_iter()
        .map(|(key, rows)| Group { label: label(&key), key, rows })
        .collect();
    groups.sort_by(|a, b| locale_cmp(&a.label, &b.label));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, PartialEq)]
    struct Doc {
        name: &'static str,
        project_id: u32,
    }

    fn project_name(id: &u32) -> String {
        match id {
            1 => "Website Redesign".to_string(),
            2 => "Brand Refresh".to_string(),
            3 => "app launch".to_string(),
            _ => "Unknown Project".to_string(),
        }
    }

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let docs = [
            Doc { name: "a", project_id: 2 },
            Doc { name: "b", project_id: 1 },
            Doc { name: "c", project_id: 2 },
        ];
        let rows: Vec<&Doc> = docs.iter().collect();
        let groups = group_by(&rows, |d| d.project_id);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 2);
        assert_eq!(groups[0].1.iter().map(|d| d.name).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(groups[1].0, 1);
    }

    #[test]
    fn test_group_by_label_alphabetizes() {
        let docs = [
            Doc { name: "wireframes", project_id: 1 },
            Doc { name: "logo", project_id: 2 },
            Doc { name: "mockups", project_id: 3 },
            Doc { name: "orphan", project_id: 99 },
        ];
        let rows: Vec<&Doc> = docs.iter().collect();
        let groups = group_by_label(&rows, |d| d.project_id, project_name);
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["app launch", "Brand Refresh", "Unknown Project", "Website Redesign"]);
    }

    proptest! {
        #[test]
        fn prop_groups_keep_every_row_once(ids in prop::collection::vec(0u32..6, 0..50)) {
            let docs: Vec<Doc> = ids.iter().map(|&project_id| Doc { name: "d", project_id }).collect();
            let rows: Vec<&Doc> = docs.iter().collect();
            let groups = group_by_label(&rows, |d| d.project_id, project_name);
            let flat: Vec<&Doc> = groups.iter().flat_map(|g| g.rows.iter().copied()).collect();
            prop_assert_eq!(flat.len(), rows.len());
            for row in &rows {
                let copies = flat.iter().filter(|f| std::ptr::eq(**f, *row)).count();
                prop_assert_eq!(copies, 1);
            }
        }
    }
}
