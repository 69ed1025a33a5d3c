//! # Profiles
//!
//! A profile is a named set of capabilities for one inventory session: which
//! record fields are collected, how many records fit, whether the linked list
//! is available, and which sorts and searches the menu offers. All profiles
//! run on the same stores and commands.
//!
//! | profile      | records            | storage                 | extras                                   |
//! |--------------|--------------------|-------------------------|------------------------------------------|
//! | `novice`     | items              | fixed, 10               | linear search                            |
//! | `master`     | items + priority   | fixed, 20               | insertion sort (3 keys), binary search   |
//! | `comparison` | items              | growable array + list   | selection sort, binary search, counters  |
//! | `tower`      | components         | fixed, 20               | bubble/insertion/selection, key check    |

use crate::algorithms::SortAlgorithm;
use crate::model::{PriorityRule, RecordShape, SortKey, SortOrder};
use crate::store::Capacity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Novice,
    Master,
    Comparison,
    Tower,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 4] = [
        ProfileKind::Novice,
        ProfileKind::Master,
        ProfileKind::Comparison,
        ProfileKind::Tower,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Novice => "novice",
            ProfileKind::Master => "master",
            ProfileKind::Comparison => "comparison",
            ProfileKind::Tower => "tower",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown profile '{}' (expected one of: novice, master, comparison, tower)",
                    s
                )
            })
    }
}

/// Which container an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Array,
    List,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Array => f.write_str("array"),
            Target::List => f.write_str("list"),
        }
    }
}

/// One sort the profile offers: the algorithm is bound to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub algorithm: SortAlgorithm,
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortOption {
    pub const fn new(algorithm: SortAlgorithm, key: SortKey, order: SortOrder) -> Self {
        Self {
            algorithm,
            key,
            order,
        }
    }

    pub fn is_name_ascending(&self) -> bool {
        self.key == SortKey::Name && self.order == SortOrder::Ascending
    }
}

/// A menu entry, in the order the profile presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(Target),
    Remove(Target),
    List(Target),
    LinearSearch(Target),
    Sort(SortOption),
    BinarySearch,
    ConfirmKey,
    ShowCounters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub title: &'static str,
    pub shape: RecordShape,
    pub priority: Option<PriorityRule>,
    pub capacity: Capacity,
    pub linked_list: bool,
    /// Records can be taken out again.
    pub removal: bool,
    pub sort_options: Vec<SortOption>,
    pub binary_search: bool,
    pub counters: bool,
    pub key_check: bool,
    /// Show the listing again after commands that change it.
    pub echo_listing: bool,
}

impl Profile {
    pub fn for_kind(kind: ProfileKind) -> Self {
        use SortAlgorithm::*;
        use SortKey::*;
        use SortOrder::*;

        match kind {
            ProfileKind::Novice => Self {
                title: "Survival pack",
                shape: RecordShape::Item,
                priority: None,
                capacity: Capacity::Fixed(10),
                linked_list: false,
                removal: true,
                sort_options: vec![],
                binary_search: false,
                counters: false,
                key_check: false,
                echo_listing: true,
            },
            ProfileKind::Master => Self {
                title: "Master pack",
                shape: RecordShape::PrioritizedItem,
                priority: Some(PriorityRule::Accept { min: 1, max: 5 }),
                capacity: Capacity::Fixed(20),
                linked_list: false,
                removal: true,
                sort_options: vec![
                    SortOption::new(Insertion, Name, Ascending),
                    SortOption::new(Insertion, Category, Ascending),
                    SortOption::new(Insertion, Priority, Ascending),
                ],
                binary_search: true,
                counters: false,
                key_check: false,
                echo_listing: false,
            },
            ProfileKind::Comparison => Self {
                title: "Array vs linked list",
                shape: RecordShape::Item,
                priority: None,
                capacity: Capacity::Growable { initial: 8 },
                linked_list: true,
                removal: true,
                sort_options: vec![SortOption::new(Selection, Name, Ascending)],
                binary_search: true,
                counters: true,
                key_check: false,
                echo_listing: false,
            },
            ProfileKind::Tower => Self {
                title: "Escape tower",
                shape: RecordShape::Component,
                priority: Some(PriorityRule::Clamp { min: 1, max: 10 }),
                capacity: Capacity::Fixed(20),
                linked_list: false,
                removal: false,
                sort_options: vec![
                    SortOption::new(Bubble, Name, Ascending),
                    SortOption::new(Insertion, Category, Ascending),
                    SortOption::new(Selection, Priority, Descending),
                ],
                binary_search: true,
                counters: false,
                key_check: true,
                echo_listing: true,
            },
        }
    }

    /// Replaces the fixed limit, or the initial size of a growable array.
    pub fn with_capacity(mut self, size: usize) -> Self {
        self.capacity = match self.capacity {
            Capacity::Fixed(_) => Capacity::Fixed(size),
            Capacity::Growable { .. } => Capacity::Growable { initial: size },
        };
        self
    }

    /// The sort used to prepare a binary search.
    pub fn name_sort(&self) -> Option<SortOption> {
        self.sort_options
            .iter()
            .copied()
            .find(SortOption::is_name_ascending)
    }

    pub fn offers_sort(&self, option: &SortOption) -> bool {
        self.sort_options.contains(option)
    }

    pub fn supports(&self, target: Target) -> bool {
        match target {
            Target::Array => true,
            Target::List => self.linked_list,
        }
    }

    /// Menu entries in presentation order.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = self.crud_actions(Target::Array);
        actions.extend(self.sort_options.iter().copied().map(Action::Sort));
        if self.binary_search {
            actions.push(Action::BinarySearch);
        }
        if self.linked_list {
            actions.extend(self.crud_actions(Target::List));
        }
        if self.key_check {
            actions.push(Action::ConfirmKey);
        }
        if self.counters {
            actions.push(Action::ShowCounters);
        }
        actions
    }

    fn crud_actions(&self, target: Target) -> Vec<Action> {
        let mut actions = vec![Action::Add(target)];
        if self.removal {
            actions.push(Action::Remove(target));
        }
        actions.push(Action::List(target));
        // the key check is this profile's linear search
        if !self.key_check {
            actions.push(Action::LinearSearch(target));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Tower".parse::<ProfileKind>(), Ok(ProfileKind::Tower));
        assert_eq!(" novice ".parse::<ProfileKind>(), Ok(ProfileKind::Novice));
        assert!("wizard".parse::<ProfileKind>().is_err());
    }

    #[test]
    fn novice_menu_is_plain_crud() {
        let profile = Profile::for_kind(ProfileKind::Novice);
        assert_eq!(
            profile.actions(),
            vec![
                Action::Add(Target::Array),
                Action::Remove(Target::Array),
                Action::List(Target::Array),
                Action::LinearSearch(Target::Array),
            ]
        );
        assert_eq!(profile.name_sort(), None);
    }

    #[test]
    fn comparison_menu_covers_both_containers() {
        let profile = Profile::for_kind(ProfileKind::Comparison);
        let actions = profile.actions();
        assert_eq!(actions.len(), 11);
        assert_eq!(actions[4], Action::Sort(profile.sort_options[0]));
        assert_eq!(actions[5], Action::BinarySearch);
        assert_eq!(actions[6], Action::Add(Target::List));
        assert_eq!(actions[10], Action::ShowCounters);
        assert!(profile.supports(Target::List));
    }

    #[test]
    fn tower_binds_algorithms_to_keys() {
        let profile = Profile::for_kind(ProfileKind::Tower);
        let name_sort = profile.name_sort().unwrap();
        assert_eq!(name_sort.algorithm, SortAlgorithm::Bubble);
        assert!(profile.offers_sort(&SortOption::new(
            SortAlgorithm::Selection,
            SortKey::Priority,
            SortOrder::Descending
        )));
        assert!(!profile.offers_sort(&SortOption::new(
            SortAlgorithm::Insertion,
            SortKey::Name,
            SortOrder::Ascending
        )));
        assert!(profile.actions().contains(&Action::ConfirmKey));
        assert!(!profile.actions().contains(&Action::LinearSearch(Target::Array)));
        assert!(!profile.actions().contains(&Action::Remove(Target::Array)));
        assert_eq!(profile.actions()[..2], [Action::Add(Target::Array), Action::List(Target::Array)]);
        assert!(!profile.supports(Target::List));
    }

    #[test]
    fn capacity_override_keeps_the_storage_kind() {
        let fixed = Profile::for_kind(ProfileKind::Novice).with_capacity(3);
        assert_eq!(fixed.capacity, Capacity::Fixed(3));
        let growable = Profile::for_kind(ProfileKind::Comparison).with_capacity(2);
        assert_eq!(growable.capacity, Capacity::Growable { initial: 2 });
    }
}
