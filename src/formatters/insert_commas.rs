/// Inserts `,` after every group of three characters counted from the right.
pub fn insert_commas(input: &str) -> String {
    insert_thousands_separator(input, ',')
}

/// Inserts `separator` after every group of three characters counted from the
/// right, so `"1234567"` becomes `"1,234,567"`. Works on any characters, not
/// only digits.
pub fn insert_thousands_separator(input: &str, separator: char) -> String {
    let len = input.chars().count();
    let mut grouped = String::with_capacity(input.len() + len / 3 * separator.len_utf8());

    for (index, c) in input.chars().enumerate() {
        grouped.push(c);
        let remaining = len - index - 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
    }
    grouped
}
