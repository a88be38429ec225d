//! Input name convention: `"{prefix}-{field}"`
//!
//! This is the only coupling between a generic controller and a screen's markup,
//! so it must stay bit-for-bit stable.

/// Derive the input name prefix from an item name.
///
/// Whitespace runs become single dashes and the result is lower-cased:
/// `"Budget"` → `"budget"`, `"Cash Flow"` → `"cash-flow"`.
pub fn item_name_prefix(item_name: &str) -> String {
    item_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Strip exactly one leading `"{prefix}-"` from an input name.
///
/// Names that do not carry the prefix are returned unchanged.
pub fn strip_field_key<'a>(input_name: &'a str, prefix: &str) -> &'a str {
    input_name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(input_name)
}

/// Build the input name for a bare field key.
pub fn input_name(prefix: &str, key: &str) -> String {
    format!("{prefix}-{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_from_item_name() {
        assert_eq!(item_name_prefix("Budget"), "budget");
        assert_eq!(item_name_prefix("Cash Flow"), "cash-flow");
        assert_eq!(item_name_prefix("  Cash   Flow Entry "), "cash-flow-entry");
    }

    #[test]
    fn strips_single_prefix() {
        assert_eq!(strip_field_key("budget-amount", "budget"), "amount");
        assert_eq!(strip_field_key("cash-flow-categoryId", "cash-flow"), "categoryId");
        assert_eq!(strip_field_key("budget-budget-amount", "budget"), "budget-amount");
    }

    #[test]
    fn unprefixed_name_is_returned_as_is() {
        assert_eq!(strip_field_key("amount", "budget"), "amount");
        assert_eq!(strip_field_key("budgetamount", "budget"), "budgetamount");
        assert_eq!(strip_field_key("holding-name", "budget"), "holding-name");
    }

    #[test]
    fn prefixed_key_reads_back() {
        for name in ["Budget", "Cash Flow", "Holding", "Snapshot", "Category"] {
            let prefix = item_name_prefix(name);
            assert_eq!(strip_field_key(&input_name(&prefix, "foo"), &prefix), "foo");
        }
    }
}
