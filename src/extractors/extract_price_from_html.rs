use scraper::{Html, Selector};

use crate::config::currency_profile::CurrencyProfile;
use crate::error::{Error, Result};
use crate::utilities::collect_text::get_stripped_text;

/// Extracts the price shown in the first element matching `css_selector`.
///
/// Returns `Ok(None)` when no element matches or its text holds no price.
pub fn extract_price_from_html(
    html_content: &str,
    css_selector: &str,
    profile: &CurrencyProfile,
) -> Result<Option<String>> {
    let document = Html::parse_document(html_content);
    let selector =
        Selector::parse(css_selector).map_err(|_| Error::InvalidSelector(css_selector.to_string()))?;

    let text = get_stripped_text(document.select(&selector).next().map(|element| *element));
    Ok(profile.extract(&text))
}
