//! Example inputs offered to users

/// A named example input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub label: &'static str,
    pub value: &'static str,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        label: "Simple",
        value: "id + id",
    },
    Example {
        label: "With Multiply",
        value: "id + id * id",
    },
    Example {
        label: "Nested",
        value: "( id + id ) * id",
    },
    Example {
        label: "Complex",
        value: "id * ( id + id )",
    },
];

/// Look up an example by label, ignoring case
pub fn find(label: &str) -> Option<&'static Example> {
    EXAMPLES
        .iter()
        .find(|example| example.label.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_all_examples_are_accepted() {
        for example in EXAMPLES {
            assert!(parse(example.value).is_success(), "{}", example.label);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("nested").map(|e| e.value), Some("( id + id ) * id"));
        assert!(find("missing").is_none());
    }
}
