//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for inventory operations, whatever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the session's stores (array, and list when the profile has one)
//! - **Enforces** the profile: targets, sorts and searches it does not offer
//!   fail with [`PackratError::Unsupported`]
//! - **Normalizes records** (text bounds, priority rule, unused fields)
//! - **Tracks counters**: the comparison count of the latest call of each kind
//!
//! ## What the API Does NOT Do
//!
//! - **Algorithms**: those live in `algorithms/` and the stores
//! - **I/O**: no stdout, stderr or prompts
//! - **Policy on errors**: an `Unsorted` binary search is returned as is; the
//!   caller decides whether to sort and retry

use crate::commands::{self, CmdResult, Counters};
use crate::error::{PackratError, Result};
use crate::model::{Record, CATEGORY_MAX_CHARS, NAME_MAX_CHARS};
use crate::profile::{Profile, SortOption, Target};
use crate::store::{BoundedStore, LinkedStore, RecordStore};

pub struct InventoryApi {
    profile: Profile,
    array: BoundedStore,
    list: LinkedStore,
    counters: Counters,
}

impl InventoryApi {
    pub fn new(profile: Profile) -> Self {
        let array = BoundedStore::new(profile.capacity);
        Self {
            profile,
            array,
            list: LinkedStore::new(),
            counters: Counters::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn array(&self) -> &BoundedStore {
        &self.array
    }

    pub fn len(&self, target: Target) -> usize {
        match target {
            Target::Array => self.array.len(),
            Target::List => self.list.len(),
        }
    }

    pub fn is_empty(&self, target: Target) -> bool {
        self.len(target) == 0
    }

    pub fn add(&mut self, target: Target, record: Record) -> Result<CmdResult> {
        self.check_target(target)?;
        let record = self.normalize(record)?;
        match target {
            Target::Array => commands::add::run(&mut self.array, record),
            Target::List => commands::add::run(&mut self.list, record),
        }
    }

    pub fn remove(&mut self, target: Target, name: &str) -> Result<CmdResult> {
        self.check_target(target)?;
        if !self.profile.removal {
            return Err(PackratError::Unsupported("removing records".to_string()));
        }
        let name = lookup_key(name);
        let result = match target {
            Target::Array => commands::remove::run(&mut self.array, &name)?,
            Target::List => commands::remove::run(&mut self.list, &name)?,
        };
        self.record_linear(target, &result);
        Ok(result)
    }

    pub fn list(&self, target: Target) -> Result<CmdResult> {
        self.check_target(target)?;
        match target {
            Target::Array => commands::list::run(&self.array),
            Target::List => commands::list::run(&self.list),
        }
    }

    pub fn linear_search(&mut self, target: Target, name: &str) -> Result<CmdResult> {
        self.check_target(target)?;
        let name = lookup_key(name);
        let result = match target {
            Target::Array => commands::search::linear(&self.array, &name)?,
            Target::List => commands::search::linear(&self.list, &name)?,
        };
        self.record_linear(target, &result);
        Ok(result)
    }

    /// Presence check for a key component; a linear scan of the array.
    pub fn confirm_key(&mut self, name: &str) -> Result<CmdResult> {
        if !self.profile.key_check {
            return Err(PackratError::Unsupported("key check".to_string()));
        }
        self.linear_search(Target::Array, name)
    }

    pub fn sort(&mut self, option: SortOption) -> Result<CmdResult> {
        if !self.profile.offers_sort(&option) {
            return Err(PackratError::Unsupported(format!(
                "{} sort by {}",
                option.algorithm, option.key
            )));
        }
        commands::sort::run(&mut self.array, option)
    }

    /// The profile's name sort, used to prepare a binary search.
    pub fn sort_by_name(&mut self) -> Result<CmdResult> {
        let option = self
            .profile
            .name_sort()
            .ok_or_else(|| PackratError::Unsupported("sorting by name".to_string()))?;
        self.sort(option)
    }

    pub fn binary_search(&mut self, name: &str) -> Result<CmdResult> {
        if !self.profile.binary_search {
            return Err(PackratError::Unsupported("binary search".to_string()));
        }
        let result = commands::search::binary(&self.array, &lookup_key(name))?;
        if let Some(comparisons) = result.comparisons() {
            self.counters.array_binary = comparisons;
        }
        Ok(result)
    }

    pub fn counters(&self) -> Result<CmdResult> {
        if !self.profile.counters {
            return Err(PackratError::Unsupported("comparison counters".to_string()));
        }
        Ok(CmdResult::default().with_counters(self.counters))
    }

    fn check_target(&self, target: Target) -> Result<()> {
        if self.profile.supports(target) {
            Ok(())
        } else {
            Err(PackratError::Unsupported(format!("the {} store", target)))
        }
    }

    fn record_linear(&mut self, target: Target, result: &CmdResult) {
        let Some(comparisons) = result.comparisons() else {
            return;
        };
        match target {
            Target::Array => self.counters.array_linear = comparisons,
            Target::List => self.counters.list_linear = comparisons,
        }
    }

    /// Applies the profile's field rules to a record built by the caller.
    fn normalize(&self, record: Record) -> Result<Record> {
        let name = Record::bounded_text(&record.name, NAME_MAX_CHARS);
        if name.is_empty() {
            return Err(PackratError::InvalidRecord("name cannot be empty".to_string()));
        }
        let category = Record::bounded_text(&record.category, CATEGORY_MAX_CHARS);

        let shape = self.profile.shape;
        let quantity = if shape.has_quantity() {
            record.quantity
        } else {
            0
        };
        let priority = match (shape.has_priority(), self.profile.priority) {
            (true, Some(rule)) => record.priority.map(|p| rule.apply(p)),
            (true, None) => record.priority,
            (false, _) => None,
        };

        Ok(Record {
            name,
            category,
            quantity,
            priority,
        })
    }
}

/// Names are stored bounded, so keys are bounded the same way before lookup.
fn lookup_key(name: &str) -> String {
    Record::bounded_text(name, NAME_MAX_CHARS)
}

pub use crate::commands::{CmdMessage, Found, MessageLevel, Metrics};
pub use crate::profile::{Action, ProfileKind};
