pub mod format_currency;
pub mod format_descriptor;
pub mod insert_commas;
pub mod to_fixed;
