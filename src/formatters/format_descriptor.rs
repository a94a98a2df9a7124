use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatters::format_currency::{render_with_format, template_has_amount};
use crate::formatters::to_fixed::MAX_DECIMALS;

/// How to render an amount for one currency.
///
/// `template` is an example amount such as `"$1,000.00"`; the `1,000.00` part
/// is replaced by the rendered value and everything around it is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub num_decimals: usize,
    pub template: String,
}

impl FormatDescriptor {
    pub fn new(
        thousands_separator: char,
        decimal_separator: char,
        num_decimals: usize,
        template: impl Into<String>,
    ) -> Result<Self> {
        let descriptor = Self {
            thousands_separator,
            decimal_separator,
            num_decimals,
            template: template.into(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn us() -> Self {
        Self {
            thousands_separator: ',',
            decimal_separator: '.',
            num_decimals: 2,
            template: "$1,000.00".to_string(),
        }
    }

    /// Checks that the template carries an amount to substitute and that the
    /// decimal count can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.num_decimals > MAX_DECIMALS {
            return Err(Error::TooManyDecimals(self.num_decimals));
        }
        if template_has_amount(&self.template) {
            Ok(())
        } else {
            Err(Error::InvalidTemplate(self.template.clone()))
        }
    }

    pub fn render(&self, value: &str) -> String {
        render_with_format(
            self.thousands_separator,
            self.decimal_separator,
            self.num_decimals,
            &self.template,
            value,
        )
    }

    pub fn format(&self, value: impl ToString) -> String {
        self.render(&value.to_string())
    }
}

impl Default for FormatDescriptor {
    fn default() -> Self {
        Self::us()
    }
}
