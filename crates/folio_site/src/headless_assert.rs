//! Assertion helpers for headless scenario checks.

use crate::view::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }

    fn missing(id: &str) -> Self {
        Self::failed("missing_element", format!("{id}: element not found"))
    }
}

pub fn evaluate_assert_exists(id: &str, tree: &Node) -> AssertionResult {
    if tree.find_by_id(id).is_some() {
        AssertionResult::Passed
    } else {
        AssertionResult::missing(id)
    }
}

pub fn evaluate_assert_text_contains(id: &str, expected: &str, tree: &Node) -> AssertionResult {
    let Some(element) = tree.find_by_id(id) else {
        return AssertionResult::missing(id);
    };
    let text = element.text_content();
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_class(id: &str, class: &str, tree: &Node) -> AssertionResult {
    let Some(element) = tree.find_by_id(id) else {
        return AssertionResult::missing(id);
    };
    if element.has_class(class) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "class_missing",
            format!(
                "{id}: expected class '{class}', got '{}'",
                element.class_list().join(" ")
            ),
        )
    }
}

/// Compare an observed page value with the expected one
pub fn evaluate_value<T>(name: &str, expected: &T, actual: &T) -> AssertionResult
where
    T: PartialEq + std::fmt::Debug,
{
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "value_mismatch",
            format!("{name}: expected {expected:?}, got {actual:?}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{div, span};

    fn tree() -> Node {
        div()
            .child(span().id("badge").class("font-mono text-xs").text("Wed, Jan 14 2026"))
            .into_node()
    }

    #[test]
    fn exists_and_text() {
        assert_eq!(evaluate_assert_exists("badge", &tree()), AssertionResult::Passed);
        assert_eq!(
            evaluate_assert_text_contains("badge", "Jan 14", &tree()),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_text_contains("badge", "Feb", &tree()),
            AssertionResult::Failed { ref code, .. } if code == "text_mismatch"
        ));
        assert!(matches!(
            evaluate_assert_exists("nope", &tree()),
            AssertionResult::Failed { ref code, .. } if code == "missing_element"
        ));
    }

    #[test]
    fn class_check_reports_actual_classes() {
        assert_eq!(evaluate_assert_class("badge", "font-mono", &tree()), AssertionResult::Passed);
        let AssertionResult::Failed { message, .. } =
            evaluate_assert_class("badge", "bg-black", &tree())
        else {
            panic!("expected failure");
        };
        assert!(message.contains("font-mono text-xs"));
    }

    #[test]
    fn value_comparison() {
        assert_eq!(evaluate_value("dark", &true, &true), AssertionResult::Passed);
        assert!(matches!(
            evaluate_value("dark", &true, &false),
            AssertionResult::Failed { .. }
        ));
    }
}
