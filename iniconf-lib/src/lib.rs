mod builders;
mod coerce;
mod interpolate;
pub mod models;
mod writer;

use regex::Regex;
use thiserror::Error;

pub use crate::builders::ConfigBuilder;
pub use crate::models::{Comment, Config, Separator, Syntax};

/// Name of the always-present section whose options are visible from every
/// other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Maximum number of substitution rounds when unfolding `%(name)s`
/// references.
pub const DEPTH_VALUES: usize = 200;

pub const OPTION_KEY_GROUP_NAME: &str = "key";
pub const OPTION_VALUE_GROUP_NAME: &str = "value";
pub const SECTION_NAME_GROUP_NAME: &str = "section_name";
pub const VAR_NAME_GROUP_NAME: &str = "var_name";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("section not found: {0}")]
    SectionNotFound(String),
    #[error("option not found: {0}")]
    OptionNotFound(String),
    #[error("possible cycle while unfolding variables: max depth of 200 reached")]
    MaxDepthExceeded,
    #[error("could not parse bool value: {0}")]
    InvalidBool(String),
    #[error("could not parse int value: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
    #[error("could not parse float value: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
    #[error("comment marker not valid: {0:?}")]
    InvalidComment(String),
    #[error("separator not valid: {0:?}")]
    InvalidSeparator(String),
    #[error("Regex compilation error: {0}")]
    RegexCompilationError(#[from] regex::Error),
    #[error("The group {0} was not found in the provided regex")]
    RegexCaptureGroupNotFound(&'static str),
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Parses INI text into a [`Config`] with the default output syntax.
pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    parse_with(contents, Syntax::default())
}

/// Parses INI text into a [`Config`] carrying the given output syntax.
///
/// Both `:` and `=` are accepted between option names and values regardless
/// of the syntax's separator, which only governs serialization. Options seen
/// before the first section header land in the default section. Unparsable
/// non-empty lines are skipped with a warning.
pub fn parse_with(contents: &str, syntax: Syntax) -> Result<Config, ConfigError> {
    let option_regex = Regex::new(&format!(
        r"^(?P<{OPTION_KEY_GROUP_NAME}>[^:=\s][^:=]*?)\s*[:=]\s*(?P<{OPTION_VALUE_GROUP_NAME}>.*)$"
    ))?;
    let section_header_regex = Regex::new(&format!(
        r"^\[(?P<{SECTION_NAME_GROUP_NAME}>.+)\]$"
    ))?;

    let mut config = Config::new(syntax);
    // Empty means no section header seen yet, which targets DEFAULT.
    let mut current_section = String::new();

    for line in contents.lines().map(str::trim) {
        log::debug!("Parsing line: {line}");

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(captures) = section_header_regex.captures(line) {
            log::debug!("Line matched section header regex");

            let name = captures
                .name(SECTION_NAME_GROUP_NAME)
                .ok_or(ConfigError::RegexCaptureGroupNotFound(SECTION_NAME_GROUP_NAME))?
                .as_str();

            config.add_section(name);
            current_section = name.to_owned();

            continue;
        }

        if let Some(captures) = option_regex.captures(strip_inline_comment(line)) {
            log::debug!("Line matched option regex.");

            let key = captures
                .name(OPTION_KEY_GROUP_NAME)
                .ok_or(ConfigError::RegexCaptureGroupNotFound(OPTION_KEY_GROUP_NAME))?
                .as_str();

            let value = captures
                .name(OPTION_VALUE_GROUP_NAME)
                .ok_or(ConfigError::RegexCaptureGroupNotFound(OPTION_VALUE_GROUP_NAME))?
                .as_str();

            config.add_option(&current_section, key, value);

            continue;
        }

        log::warn!("Skipping unparsable non-empty line: {line}");
    }

    Ok(config)
}

/// Cuts off an inline comment. Comments are preceded by a space or a tab.
fn strip_inline_comment(line: &str) -> &str {
    let mut stripped = line;

    for marker in [" ;", "\t;", " #", "\t#"] {
        if let Some(index) = stripped.find(marker) {
            stripped = &stripped[..index];
        }
    }

    stripped.trim_end()
}

#[cfg(test)]
mod tests {
    use crate::models::{Comment, Separator};
    use crate::{ConfigBuilder, DEFAULT_SECTION, parse};

    #[test]
    fn parse_happy_flow_named_sections() {
        let written = ConfigBuilder::new()
            .add_option("db", "host", "localhost")
            .add_option("db", "port", "5432")
            .add_option("web", "root", "/srv/www")
            .build();

        let mut sink = Vec::new();
        written.write_to(&mut sink, "generated").unwrap();

        let parsed = parse(&String::from_utf8(sink).unwrap()).unwrap();

        assert_eq!(parsed.sections(), vec![DEFAULT_SECTION, "db", "web"]);
        assert_eq!(parsed.raw_string("db", "host").unwrap(), "localhost");
        assert_eq!(parsed.raw_string("db", "port").unwrap(), "5432");
        assert_eq!(parsed.raw_string("web", "root").unwrap(), "/srv/www");
    }

    #[test]
    fn parse_happy_flow_with_default_section() {
        let written = ConfigBuilder::new()
            .comment(Comment::Semicolon)
            .separator(Separator::Equals)
            .add_option("", "host", "localhost")
            .add_option("db", "port", "5432")
            .build();

        let mut sink = Vec::new();
        written.write_to(&mut sink, "").unwrap();

        let parsed = parse(&String::from_utf8(sink).unwrap()).unwrap();

        assert!(parsed.has_option(DEFAULT_SECTION, "host"));
        assert_eq!(parsed.raw_string(DEFAULT_SECTION, "host").unwrap(), "localhost");
        assert_eq!(parsed.raw_string("db", "port").unwrap(), "5432");
    }

    #[test]
    fn parse_accepts_both_separators() {
        let parsed = parse("[db]\nhost: localhost\nport = 5432\n").unwrap();

        assert_eq!(parsed.raw_string("db", "host").unwrap(), "localhost");
        assert_eq!(parsed.raw_string("db", "port").unwrap(), "5432");
    }

    #[test]
    fn parse_skips_comments_and_junk_lines() {
        let contents = "\
# leading comment
; another comment
[db]
host: localhost ; inline comment
port: 5432\t# inline comment
this line is junk
";

        let parsed = parse(contents).unwrap();

        assert_eq!(parsed.raw_string("db", "host").unwrap(), "localhost");
        assert_eq!(parsed.raw_string("db", "port").unwrap(), "5432");
        assert_eq!(parsed.options("db").unwrap(), vec!["host", "port"]);
    }

    #[test]
    fn options_before_the_first_header_land_in_the_default_section() {
        let parsed = parse("host: localhost\n\n[db]\nport: 5432\n").unwrap();

        assert!(parsed.has_option(DEFAULT_SECTION, "host"));
        assert!(parsed.has_option("db", "host"));
    }

    #[test]
    fn parse_keeps_references_for_later_unfolding() {
        let parsed = parse("host: x\n\n[web]\nurl: http://%(host)s/\n").unwrap();

        assert_eq!(parsed.raw_string("web", "url").unwrap(), "http://%(host)s/");
        assert_eq!(parsed.string("web", "url").unwrap(), "http://x/");
    }

    #[test]
    fn parse_keeps_values_containing_the_other_separator() {
        let parsed = parse("[web]\nurl = http://localhost:8080/\n").unwrap();

        assert_eq!(parsed.raw_string("web", "url").unwrap(), "http://localhost:8080/");
    }
}
