//! # Menu Session
//!
//! The interactive loop: a profile picker, then the numbered menu generated
//! from the profile's actions. The session reads from any `BufRead` and
//! writes to any `Write`, so tests drive it with byte slices.
//!
//! End of input ends the session from any prompt.

use super::render;
use packrat::api::{Action, CmdMessage, InventoryApi, ProfileKind};
use packrat::commands::CmdResult;
use packrat::error::{PackratError, Result};
use packrat::model::Record;
use packrat::profile::{Profile, SortOption, Target};
use packrat::store::RecordStore;
use std::io::{BufRead, Write};

/// Whether the session goes on after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Eof,
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Profile picker. Each choice opens a fresh inventory.
    pub fn run_picker(&mut self, capacity: Option<usize>) -> Result<()> {
        loop {
            writeln!(self.output, "\n==== Packrat ====")?;
            for (i, kind) in ProfileKind::ALL.iter().enumerate() {
                let profile = Profile::for_kind(*kind);
                writeln!(self.output, "{}. {} ({})", i + 1, profile.title, kind)?;
            }
            writeln!(self.output, "0. Quit")?;

            let Some(choice) = self.prompt("Choose a profile: ")? else {
                return Ok(());
            };
            match choice.parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(n) if n <= ProfileKind::ALL.len() => {
                    let profile = build_profile(ProfileKind::ALL[n - 1], capacity);
                    if self.run_profile(profile)? == Step::Eof {
                        return Ok(());
                    }
                }
                _ => self.warn("Invalid option.")?,
            }
        }
    }

    /// Menu for a single profile, until `0` or end of input.
    pub fn run_menu(&mut self, profile: Profile) -> Result<()> {
        self.run_profile(profile)?;
        Ok(())
    }

    fn run_profile(&mut self, profile: Profile) -> Result<Step> {
        let actions = profile.actions();
        let mut api = InventoryApi::new(profile);

        loop {
            writeln!(self.output, "\n==== {} ====", api.profile().title)?;
            for (i, action) in actions.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, label(api.profile(), *action))?;
            }
            writeln!(self.output, "0. Back")?;

            let Some(choice) = self.prompt("Option: ")? else {
                return Ok(Step::Eof);
            };
            let step = match choice.parse::<usize>() {
                Ok(0) => return Ok(Step::Continue),
                Ok(n) if n <= actions.len() => self.dispatch(&mut api, actions[n - 1])?,
                _ => {
                    self.warn("Invalid option.")?;
                    Step::Continue
                }
            };
            if step == Step::Eof {
                return Ok(Step::Eof);
            }
        }
    }

    fn dispatch(&mut self, api: &mut InventoryApi, action: Action) -> Result<Step> {
        match action {
            Action::Add(target) => self.add(api, target),
            Action::Remove(target) => {
                if self.guard_empty(api, target)? {
                    return Ok(Step::Continue);
                }
                let Some(name) = self.read_text("Name to remove: ")? else {
                    return Ok(Step::Eof);
                };
                let outcome = api.remove(target, &name);
                self.show(api, outcome)?;
                self.echo(api, target)?;
                Ok(Step::Continue)
            }
            Action::List(target) => {
                self.list(api, target)?;
                Ok(Step::Continue)
            }
            Action::LinearSearch(target) => {
                if self.guard_empty(api, target)? {
                    return Ok(Step::Continue);
                }
                let Some(name) = self.read_text("Name to search: ")? else {
                    return Ok(Step::Eof);
                };
                let outcome = api.linear_search(target, &name);
                self.show(api, outcome)?;
                Ok(Step::Continue)
            }
            Action::Sort(option) => {
                if !self.guard_empty(api, Target::Array)? {
                    self.sort(api, option)?;
                }
                Ok(Step::Continue)
            }
            Action::BinarySearch => self.binary_search(api),
            Action::ConfirmKey => {
                if self.guard_empty(api, Target::Array)? {
                    return Ok(Step::Continue);
                }
                let Some(name) = self.read_text("Key component name: ")? else {
                    return Ok(Step::Eof);
                };
                match api.confirm_key(&name) {
                    Ok(result) => {
                        let mut text = if result.found.is_some() {
                            render::render_messages(&[CmdMessage::success(
                                format!("Key component '{}' is present.", name),
                            )])
                        } else {
                            render::render_messages(&[CmdMessage::warning(
                                format!("Key component '{}' is missing.", name),
                            )])
                        };
                        if let Some(metrics) = &result.metrics {
                            text.push_str(&render::render_metrics(metrics));
                        }
                        write!(self.output, "{}", text)?;
                    }
                    Err(e) => write!(self.output, "{}", render::render_error(&e))?,
                }
                Ok(Step::Continue)
            }
            Action::ShowCounters => {
                let outcome = api.counters();
                self.show(api, outcome)?;
                Ok(Step::Continue)
            }
        }
    }

    fn add(&mut self, api: &mut InventoryApi, target: Target) -> Result<Step> {
        if target == Target::Array && api.array().is_full() {
            let capacity = api.array().capacity().limit().unwrap_or(api.array().len());
            let err = PackratError::Full { capacity };
            write!(self.output, "{}", render::render_error(&err))?;
            return Ok(Step::Continue);
        }
        let Some(record) = self.read_record(api.profile())? else {
            return Ok(Step::Eof);
        };
        let outcome = api.add(target, record);
        self.show(api, outcome)?;
        self.echo(api, target)?;
        Ok(Step::Continue)
    }

    fn list(&mut self, api: &InventoryApi, target: Target) -> Result<()> {
        match api.list(target) {
            Ok(result) => {
                let shape = api.profile().shape;
                let heading = heading(api.profile(), target);
                write!(self.output, "{}", render::render_table(&heading, shape, &result.listed))?;
                write!(self.output, "{}", render::render_result(shape, &result))?;
            }
            Err(e) => write!(self.output, "{}", render::render_error(&e))?,
        }
        Ok(())
    }

    fn sort(&mut self, api: &mut InventoryApi, option: SortOption) -> Result<()> {
        let outcome = api.sort(option);
        self.show(api, outcome)
    }

    /// Offers the name sort first when the array is not ordered by name,
    /// then asks for the key.
    fn binary_search(&mut self, api: &mut InventoryApi) -> Result<Step> {
        if self.guard_empty(api, Target::Array)? {
            return Ok(Step::Continue);
        }
        if !api.array().is_sorted_by_name() {
            self.warn("Records are not sorted by name.")?;
            let Some(answer) = self.prompt("Sort by name now? (y/n): ")? else {
                return Ok(Step::Eof);
            };
            if !is_yes(&answer) {
                self.warn("Binary search cancelled.")?;
                return Ok(Step::Continue);
            }
            let sorted = api.sort_by_name();
            self.show(api, sorted)?;
        }
        let Some(name) = self.read_text("Name to search: ")? else {
            return Ok(Step::Eof);
        };
        let outcome = api.binary_search(&name);
        self.show(api, outcome)?;
        Ok(Step::Continue)
    }

    /// Writes a command outcome; sorted listings follow their messages.
    /// Failing to grow the array ends the session.
    fn show(&mut self, api: &InventoryApi, outcome: Result<CmdResult>) -> Result<()> {
        let shape = api.profile().shape;
        match outcome {
            Err(e @ PackratError::Allocation(_)) => return Err(e),
            Ok(result) => {
                write!(self.output, "{}", render::render_result(shape, &result))?;
                if result.sort.is_some() {
                    let heading = heading(api.profile(), Target::Array);
                    write!(self.output, "{}", render::render_table(&heading, shape, &result.listed))?;
                }
            }
            Err(e) => write!(self.output, "{}", render::render_error(&e))?,
        }
        Ok(())
    }

    fn echo(&mut self, api: &InventoryApi, target: Target) -> Result<()> {
        if api.profile().echo_listing {
            self.list(api, target)?;
        }
        Ok(())
    }

    fn guard_empty(&mut self, api: &InventoryApi, target: Target) -> Result<bool> {
        if api.is_empty(target) {
            self.info("Inventory is empty.")?;
            return Ok(true);
        }
        Ok(false)
    }

    fn read_record(&mut self, profile: &Profile) -> Result<Option<Record>> {
        let Some(name) = self.read_text("Name: ")? else {
            return Ok(None);
        };
        let Some(category) = self.read_text("Type: ")? else {
            return Ok(None);
        };

        let mut record = Record::item(name, category, 0);
        if profile.shape.has_quantity() {
            let Some(quantity) = self.read_number("Quantity: ")? else {
                return Ok(None);
            };
            record.quantity = quantity;
        }
        if profile.shape.has_priority() {
            let question = match profile.priority {
                Some(rule) => {
                    let (min, max) = rule.range();
                    format!("Priority ({}-{}): ", min, max)
                }
                None => "Priority: ".to_string(),
            };
            let Some(priority) = self.read_number(&question)? else {
                return Ok(None);
            };
            record.priority = Some(priority);
        }
        Ok(Some(record))
    }

    /// Re-prompts until the answer is non-blank.
    fn read_text(&mut self, question: &str) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            if !answer.is_empty() {
                return Ok(Some(answer));
            }
            self.warn("Please enter a value.")?;
        }
    }

    /// Re-prompts until the answer parses as an integer.
    fn read_number(&mut self, question: &str) -> Result<Option<i32>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.parse::<i32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.warn("Please enter a whole number.")?,
            }
        }
    }

    /// Trimmed answer, or `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn info(&mut self, text: &str) -> Result<()> {
        let text = render::render_messages(&[CmdMessage::info(text)]);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        let text = render::render_messages(&[CmdMessage::warning(text)]);
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

pub fn build_profile(kind: ProfileKind, capacity: Option<usize>) -> Profile {
    let profile = Profile::for_kind(kind);
    match capacity {
        Some(size) => profile.with_capacity(size),
        None => profile,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes" | "s")
}

fn heading(profile: &Profile, target: Target) -> String {
    match (profile.linked_list, target) {
        (false, _) => profile.title.to_string(),
        (true, Target::Array) => "Array".to_string(),
        (true, Target::List) => "Linked list".to_string(),
    }
}

fn label(profile: &Profile, action: Action) -> String {
    let suffix = |target: Target| {
        if profile.linked_list {
            format!(" ({})", target)
        } else {
            String::new()
        }
    };
    match action {
        Action::Add(target) => format!("Add record{}", suffix(target)),
        Action::Remove(target) => format!("Remove record{}", suffix(target)),
        Action::List(target) => format!("List records{}", suffix(target)),
        Action::LinearSearch(target) => format!("Linear search by name{}", suffix(target)),
        Action::Sort(option) => format!(
            "Sort by {} ({}, {})",
            option.key, option.algorithm, option.order
        ),
        Action::BinarySearch => "Binary search by name".to_string(),
        Action::ConfirmKey => "Check key component".to_string(),
        Action::ShowCounters => "Show comparison counters".to_string(),
    }
}
