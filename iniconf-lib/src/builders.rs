use crate::models::{Comment, Config, Separator, Syntax};

#[derive(Debug)]
enum Seed {
    Section(String),
    Option {
        section: String,
        option: String,
        value: String,
    },
}

/// Assembles a [`Config`] from syntax settings and seed data. Sections and
/// options are replayed in the order they were added, so the builder order
/// becomes the serialization order.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    syntax: Syntax,
    seeds: Vec<Seed>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.syntax.comment = comment;
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.syntax.separator = separator;
        self
    }

    pub fn pre_space(mut self, pre_space: bool) -> Self {
        self.syntax.pre_space = pre_space;
        self
    }

    pub fn post_space(mut self, post_space: bool) -> Self {
        self.syntax.post_space = post_space;
        self
    }

    pub fn add_section(mut self, section: &str) -> Self {
        self.seeds.push(Seed::Section(section.to_owned()));
        self
    }

    pub fn add_option(mut self, section: &str, option: &str, value: &str) -> Self {
        self.seeds.push(Seed::Option {
            section: section.to_owned(),
            option: option.to_owned(),
            value: value.to_owned(),
        });
        self
    }

    pub fn build(self) -> Config {
        let mut config = Config::new(self.syntax);

        for seed in self.seeds {
            match seed {
                Seed::Section(section) => {
                    config.add_section(&section);
                }
                Seed::Option {
                    section,
                    option,
                    value,
                } => {
                    config.add_option(&section, &option, &value);
                }
            }
        }

        config
    }
}
