use std::collections::HashMap;

use crate::models::section::SectionData;
use crate::models::syntax::Syntax;
use crate::{ConfigError, DEFAULT_SECTION};

/// In-memory configuration store: named sections holding ordered
/// option/value pairs. The `DEFAULT` section always exists and its options
/// are visible from every other section as fallback values.
#[derive(Debug)]
pub struct Config {
    pub(crate) syntax: Syntax,
    last_section_id: u64,
    pub(crate) sections: HashMap<String, SectionData>,
}

impl Config {
    pub fn new(syntax: Syntax) -> Self {
        let mut config = Self {
            syntax,
            last_section_id: 0,
            sections: HashMap::new(),
        };

        config.add_section(DEFAULT_SECTION);

        config
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Adds an empty section. Returns false without touching the store if the
    /// section already exists or the name is empty (the empty name stands for
    /// the default section).
    pub fn add_section(&mut self, section: &str) -> bool {
        if section.is_empty() || self.sections.contains_key(section) {
            return false;
        }

        self.sections
            .insert(section.to_owned(), SectionData::new(self.last_section_id));
        self.last_section_id += 1;

        true
    }

    /// Removes a section and all of its options. The default section cannot
    /// be removed. The section's identifier is not reused afterwards.
    pub fn remove_section(&mut self, section: &str) -> bool {
        if section == DEFAULT_SECTION {
            return false;
        }

        self.sections.remove(section).is_some()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Section names in creation order. Identifiers are handed out
    /// monotonically and never reused, so the order survives removals.
    pub fn sections(&self) -> Vec<String> {
        let mut ordered: Vec<(u64, &str)> = self
            .sections
            .iter()
            .map(|(name, data)| (data.id, name.as_str()))
            .collect();

        ordered.sort_unstable_by_key(|(id, _)| *id);

        ordered.into_iter().map(|(_, name)| name.to_owned()).collect()
    }

    /// Adds an option to a section, creating the section first if needed. An
    /// empty section name targets the default section. Overwriting advances
    /// the option to the end of the section's emission order. Returns true if
    /// the option was new, false if an existing value was overwritten.
    pub fn add_option(&mut self, section: &str, option: &str, value: &str) -> bool {
        self.add_section(section);

        let section = if section.is_empty() { DEFAULT_SECTION } else { section };

        let Some(data) = self.sections.get_mut(section) else {
            return false;
        };

        data.insert(option, value.to_owned())
    }

    /// Removes an option. Returns false if either the section or the option
    /// did not exist.
    pub fn remove_option(&mut self, section: &str, option: &str) -> bool {
        match self.sections.get_mut(section) {
            Some(data) => data.remove(option),
            None => false,
        }
    }

    /// Checks whether the option is visible from the section, directly or
    /// through the default section. Returns false if the section itself does
    /// not exist.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        if !self.sections.contains_key(section) {
            return false;
        }

        let in_default = self
            .sections
            .get(DEFAULT_SECTION)
            .is_some_and(|data| data.contains(option));
        let in_section = self
            .sections
            .get(section)
            .is_some_and(|data| data.contains(option));

        in_default || in_section
    }

    /// Option names visible from the section: the default section's options
    /// in insertion order, then the section's own additions in insertion
    /// order. Names shadowing a default entry are listed once.
    pub fn options(&self, section: &str) -> Result<Vec<String>, ConfigError> {
        let Some(data) = self.sections.get(section) else {
            return Err(ConfigError::SectionNotFound(section.to_owned()));
        };

        let mut names = match self.sections.get(DEFAULT_SECTION) {
            Some(default) => default.names_by_position(),
            None => Vec::new(),
        };

        for name in data.names_by_position() {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        Ok(names)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Syntax::default())
    }
}
