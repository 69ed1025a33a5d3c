use std::cmp::Ordering;
use std::fmt;

/// Longest name a record keeps, in characters.
pub const NAME_MAX_CHARS: usize = 29;
/// Longest category a record keeps, in characters.
pub const CATEGORY_MAX_CHARS: usize = 19;

/// A single inventory entry.
///
/// Records are plain values: the stores never validate them. Trimming,
/// truncation and priority policy are applied by whoever builds the record
/// (see [`Record::bounded_text`] and [`PriorityRule`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub priority: Option<i32>,
}

impl Record {
    pub fn item(name: impl Into<String>, category: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            priority: None,
        }
    }

    pub fn prioritized(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
        priority: i32,
    ) -> Self {
        Self {
            priority: Some(priority),
            ..Self::item(name, category, quantity)
        }
    }

    pub fn component(name: impl Into<String>, category: impl Into<String>, priority: i32) -> Self {
        Self::prioritized(name, category, 0, priority)
    }

    /// Trims `input` and keeps at most `max_chars` characters of it.
    pub fn bounded_text(input: &str, max_chars: usize) -> String {
        input.trim().chars().take(max_chars).collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Which fields a profile collects for its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// name, category, quantity
    Item,
    /// name, category, quantity, priority
    PrioritizedItem,
    /// name, category, priority
    Component,
}

impl RecordShape {
    pub fn has_quantity(self) -> bool {
        !matches!(self, RecordShape::Component)
    }

    pub fn has_priority(self) -> bool {
        !matches!(self, RecordShape::Item)
    }
}

/// How a profile treats priority values typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityRule {
    /// Advertise `min..=max` but store whatever was entered.
    Accept { min: i32, max: i32 },
    /// Force the value into `min..=max`.
    Clamp { min: i32, max: i32 },
}

impl PriorityRule {
    pub fn apply(self, value: i32) -> i32 {
        match self {
            PriorityRule::Accept { .. } => value,
            PriorityRule::Clamp { min, max } => value.clamp(min, max),
        }
    }

    pub fn range(self) -> (i32, i32) {
        match self {
            PriorityRule::Accept { min, max } | PriorityRule::Clamp { min, max } => (min, max),
        }
    }
}

/// Field a sort or search orders records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Category,
    Priority,
}

impl SortKey {
    /// Orders two records by this key. Text compares byte-wise, missing
    /// priorities sort before present ones.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Name => a.name.as_bytes().cmp(b.name.as_bytes()),
            SortKey::Category => a.category.as_bytes().cmp(b.category.as_bytes()),
            SortKey::Priority => a.priority.cmp(&b.priority),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Priority => "priority",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}
