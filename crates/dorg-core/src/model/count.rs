//! Count wording for the run summary.

/// `"1 file"`, `"3 files"`, `"2,500 errors"`.
pub fn plural(count: u64, noun: &str) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let suffix = if count == 1 { "" } else { "s" };
    format!("{grouped} {noun}{suffix}")
}
