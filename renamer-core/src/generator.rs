use crate::options::RenameOptions;

/// Compute the new name for the item at `index` (0-based position in the batch).
///
/// Order is fixed: find/replace, then case transform, then numbering, then
/// `prefix + base + numbering + suffix`. Never fails.
pub fn generate_name(old_name: &str, options: &RenameOptions, index: usize) -> String {
    let replaced = if options.find.is_empty() {
        old_name.to_string()
    } else {
        old_name.replace(&options.find, &options.replace)
    };

    let base = options.case_op.apply(&replaced);
    let number_part = numbering_segment(options, index);

    let mut new_name = String::with_capacity(
        options.prefix.len() + base.len() + number_part.len() + options.suffix.len(),
    );
    new_name.push_str(&options.prefix);
    new_name.push_str(&base);
    new_name.push_str(&number_part);
    new_name.push_str(&options.suffix);
    new_name
}

/// The `_<number>` segment, or an empty string when numbering is off
pub fn numbering_segment(options: &RenameOptions, index: usize) -> String {
    if !options.use_numbering {
        return String::new();
    }

    let number = i64::from(options.start_number) + index as i64;
    let digits = number.unsigned_abs().to_string();
    let sign = if number < 0 { "-" } else { "" };

    // Runtime format widths are capped at u16, so pad by hand
    let fill = options
        .effective_padding()
        .saturating_sub(sign.len() + digits.len());

    let mut segment = String::with_capacity(1 + sign.len() + fill + digits.len());
    segment.push('_');
    segment.push_str(sign);
    segment.extend(std::iter::repeat('0').take(fill));
    segment.push_str(&digits);
    segment
}
