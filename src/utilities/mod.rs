pub mod collect_text;
pub mod set_text;
pub mod strip_whitespace;
