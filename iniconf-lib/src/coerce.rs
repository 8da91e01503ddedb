use crate::models::Config;
use crate::ConfigError;

impl Config {
    /// Resolves the option like [`Config::string`] and converts it to a bool.
    /// Accepted spellings, case-insensitive: `t true y yes on 1` and
    /// `f false n no off 0`.
    pub fn bool_value(&self, section: &str, option: &str) -> Result<bool, ConfigError> {
        let resolved = self.string(section, option)?;

        match resolved.to_lowercase().as_str() {
            "t" | "true" | "y" | "yes" | "on" | "1" => Ok(true),
            "f" | "false" | "n" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidBool(resolved)),
        }
    }

    /// Resolves the option like [`Config::string`] and parses it as a base-10
    /// integer.
    pub fn int_value(&self, section: &str, option: &str) -> Result<i64, ConfigError> {
        Ok(self.string(section, option)?.parse::<i64>()?)
    }

    /// Resolves the option like [`Config::string`] and parses it as a float.
    pub fn float_value(&self, section: &str, option: &str) -> Result<f64, ConfigError> {
        Ok(self.string(section, option)?.parse::<f64>()?)
    }
}
