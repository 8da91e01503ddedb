use std::collections::HashMap;

use crate::models::value::ValueCell;

/// A section's options together with the ordering state they need: the
/// section's creation identifier and the position counter handed to each
/// inserted value.
#[derive(Debug)]
pub(crate) struct SectionData {
    pub(crate) id: u64,
    next_position: u64,
    options: HashMap<String, ValueCell>,
}

impl SectionData {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            next_position: 0,
            options: HashMap::new(),
        }
    }

    /// Inserts or overwrites an option. Either way the value takes the next
    /// position, so an overwrite moves the option to the end of the emission
    /// order. Returns true if the option was new.
    pub(crate) fn insert(&mut self, option: &str, value: String) -> bool {
        let existed = self.options.contains_key(option);

        self.options.insert(
            option.to_owned(),
            ValueCell {
                position: self.next_position,
                value,
            },
        );
        self.next_position += 1;

        !existed
    }

    pub(crate) fn remove(&mut self, option: &str) -> bool {
        self.options.remove(option).is_some()
    }

    pub(crate) fn get(&self, option: &str) -> Option<&ValueCell> {
        self.options.get(option)
    }

    pub(crate) fn contains(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option names in ascending position order. Positions are sparse after
    /// removals and overwrites, so this sorts instead of scanning the counter
    /// range.
    pub(crate) fn names_by_position(&self) -> Vec<String> {
        let mut ordered: Vec<(u64, &str)> = self
            .options
            .iter()
            .map(|(name, cell)| (cell.position, name.as_str()))
            .collect();

        ordered.sort_unstable_by_key(|(position, _)| *position);

        ordered.into_iter().map(|(_, name)| name.to_owned()).collect()
    }
}
