pub mod extract_price;
pub mod extract_price_from_html;
pub mod price_pattern;
