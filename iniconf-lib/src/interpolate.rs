use regex::Regex;

use crate::models::Config;
use crate::{ConfigError, DEFAULT_SECTION, DEPTH_VALUES, VAR_NAME_GROUP_NAME};

impl Config {
    /// Gets the stored string for the option without unfolding `%(name)s`
    /// references.
    pub fn raw_string(&self, section: &str, option: &str) -> Result<String, ConfigError> {
        let Some(data) = self.sections.get(section) else {
            return Err(ConfigError::SectionNotFound(section.to_owned()));
        };

        match data.get(option) {
            Some(cell) => Ok(cell.value.clone()),
            None => Err(ConfigError::OptionNotFound(option.to_owned())),
        }
    }

    /// Gets the string for the option, unfolding `%(name)s` references
    /// against the default section and the owning section, for at most
    /// [`DEPTH_VALUES`] substitution rounds.
    ///
    /// Each round resolves the first remaining reference and replaces every
    /// occurrence of that exact placeholder. A reference that resolves to a
    /// missing or empty option fails the whole lookup. Running out of rounds
    /// reports a cycle; legitimately deep chains hit the same bound.
    pub fn string(&self, section: &str, option: &str) -> Result<String, ConfigError> {
        let var_regex = Regex::new(&format!(
            r"%\((?P<{VAR_NAME_GROUP_NAME}>[a-zA-Z0-9_.\-]+)\)s"
        ))?;

        let mut value = self.raw_string(section, option)?;

        for _ in 0..DEPTH_VALUES {
            let Some(captures) = var_regex.captures(&value) else {
                return Ok(value);
            };

            let reference = captures
                .name(VAR_NAME_GROUP_NAME)
                .ok_or(ConfigError::RegexCaptureGroupNotFound(VAR_NAME_GROUP_NAME))?
                .as_str()
                .to_owned();
            let placeholder = captures[0].to_owned();

            // The owning section overrides the default section.
            let resolved = self
                .sections
                .get(section)
                .and_then(|data| data.get(&reference))
                .or_else(|| {
                    self.sections
                        .get(DEFAULT_SECTION)
                        .and_then(|data| data.get(&reference))
                })
                .map(|cell| cell.value.as_str())
                .unwrap_or("");

            if resolved.is_empty() {
                return Err(ConfigError::OptionNotFound(reference));
            }

            value = value.replace(&placeholder, resolved);
        }

        Err(ConfigError::MaxDepthExceeded)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, ConfigError};

    #[test]
    fn raw_string_does_not_unfold_references() {
        let mut config = Config::default();

        config.add_option("", "host", "x");
        config.add_option("web", "url", "http://%(host)s/");

        assert_eq!(config.raw_string("web", "url").unwrap(), "http://%(host)s/");
    }

    #[test]
    fn raw_string_reports_missing_sections_and_options() {
        let mut config = Config::default();

        config.add_section("web");

        assert!(matches!(
            config.raw_string("missing", "url"),
            Err(ConfigError::SectionNotFound(section)) if section == "missing"
        ));
        assert!(matches!(
            config.raw_string("web", "url"),
            Err(ConfigError::OptionNotFound(option)) if option == "url"
        ));
    }

    #[test]
    fn string_unfolds_references_against_the_default_section() {
        let mut config = Config::default();

        config.add_option("", "host", "x");
        config.add_option("web", "url", "http://%(host)s/");

        assert_eq!(config.string("web", "url").unwrap(), "http://x/");
    }

    #[test]
    fn string_prefers_the_owning_section_over_the_default() {
        let mut config = Config::default();

        config.add_option("", "host", "fallback");
        config.add_option("web", "host", "local");
        config.add_option("web", "url", "http://%(host)s/");

        assert_eq!(config.string("web", "url").unwrap(), "http://local/");
    }

    #[test]
    fn string_replaces_every_occurrence_of_a_placeholder() {
        let mut config = Config::default();

        config.add_option("", "host", "x");
        config.add_option("web", "pair", "%(host)s and %(host)s");

        assert_eq!(config.string("web", "pair").unwrap(), "x and x");
    }

    #[test]
    fn string_follows_chained_references() {
        let mut config = Config::default();

        config.add_option("", "host", "x");
        config.add_option("", "base", "http://%(host)s");
        config.add_option("web", "url", "%(base)s/index.html");

        assert_eq!(config.string("web", "url").unwrap(), "http://x/index.html");
    }

    #[test]
    fn unresolvable_references_fail_with_the_reference_name() {
        let mut config = Config::default();

        config.add_option("web", "url", "http://%(host)s/");

        assert!(matches!(
            config.string("web", "url"),
            Err(ConfigError::OptionNotFound(option)) if option == "host"
        ));
    }

    #[test]
    fn references_resolving_to_empty_values_fail() {
        let mut config = Config::default();

        config.add_option("", "host", "");
        config.add_option("web", "url", "http://%(host)s/");

        assert!(matches!(
            config.string("web", "url"),
            Err(ConfigError::OptionNotFound(option)) if option == "host"
        ));
    }

    #[test]
    fn cyclic_references_exhaust_the_depth_bound() {
        let mut config = Config::default();

        config.add_option("web", "a", "%(b)s");
        config.add_option("web", "b", "%(a)s");

        assert!(matches!(
            config.string("web", "a"),
            Err(ConfigError::MaxDepthExceeded)
        ));
    }

    #[test]
    fn values_without_references_pass_through() {
        let mut config = Config::default();

        config.add_option("web", "greeting", "100% sure (really)s");

        assert_eq!(config.string("web", "greeting").unwrap(), "100% sure (really)s");
    }

    #[test]
    fn reference_names_may_contain_dots_and_dashes() {
        let mut config = Config::default();

        config.add_option("", "db.host-name", "x");
        config.add_option("web", "url", "http://%(db.host-name)s/");

        assert_eq!(config.string("web", "url").unwrap(), "http://x/");
    }
}
