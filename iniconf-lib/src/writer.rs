use std::io::Write;

use crate::models::Config;
use crate::{ConfigError, DEFAULT_SECTION};

impl Config {
    /// Renders the configuration to the sink without modifying the store:
    /// comment-prefixed header lines, then each section in creation order
    /// with its options in insertion order.
    ///
    /// The default section's `[DEFAULT]` block is suppressed when it holds no
    /// options; every other section emits its header even when empty.
    pub fn write_to<W: Write>(&self, sink: &mut W, header: &str) -> Result<(), ConfigError> {
        self.write_header(sink, header)?;

        let separator = self.syntax.rendered_separator();

        for section in self.sections() {
            let Some(data) = self.sections.get(&section) else {
                continue;
            };

            if section == DEFAULT_SECTION && data.is_empty() {
                continue;
            }

            writeln!(sink, "\n[{section}]")?;

            for option in data.names_by_position() {
                if let Some(cell) = data.get(&option) {
                    writeln!(sink, "{option}{separator}{}", cell.value)?;
                }
            }
        }

        writeln!(sink)?;

        Ok(())
    }

    /// Renders the configuration like [`Config::write_to`], removing each
    /// option from the store immediately after writing it. Draining an
    /// unmodified store a second time therefore emits only the header and the
    /// now-empty section blocks. A sink error aborts mid-way and leaves the
    /// store partially drained.
    pub fn drain_to<W: Write>(&mut self, sink: &mut W, header: &str) -> Result<(), ConfigError> {
        self.write_header(sink, header)?;

        let separator = self.syntax.rendered_separator();

        for section in self.sections() {
            let Some(data) = self.sections.get(&section) else {
                continue;
            };

            if section == DEFAULT_SECTION && data.is_empty() {
                continue;
            }

            let names = data.names_by_position();

            writeln!(sink, "\n[{section}]")?;

            for option in names {
                let Some(value) = self
                    .sections
                    .get(&section)
                    .and_then(|data| data.get(&option))
                    .map(|cell| cell.value.clone())
                else {
                    continue;
                };

                writeln!(sink, "{option}{separator}{value}")?;

                log::debug!("Drained option {option} from section [{section}]");
                self.remove_option(&section, &option);
            }
        }

        writeln!(sink)?;

        Ok(())
    }

    fn write_header<W: Write>(&self, sink: &mut W, header: &str) -> Result<(), ConfigError> {
        if header.is_empty() {
            return Ok(());
        }

        let comment = self.syntax.comment.as_str();
        let commented = header.replace('\n', &format!("\n{comment}"));

        writeln!(sink, "{comment}{commented}")?;

        Ok(())
    }
}
