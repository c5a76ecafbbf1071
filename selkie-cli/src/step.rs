//! Command-line fragment arguments and how they fold into a selector.

use selkie_common::warning::warn_once;
use selkie_css::{Combinator, FragmentKind, Selector};
use thiserror::Error;

/// One `kind=value` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Append a fragment to the selector being built.
    Fragment(FragmentKind, String),
    /// Close the current chain and join it to the next one with this symbol.
    Combine(String),
}

/// A `kind=value` argument that could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    /// No `=` separating the kind from the value.
    #[error("expected `kind=value`, got `{0}`")]
    MissingSeparator(String),

    /// The part before `=` is not a known kind.
    #[error(
        "unknown fragment kind `{0}` (expected element, id, class, attr, pseudo-class, pseudo-element or combine)"
    )]
    UnknownKind(String),
}

/// Parse a single argument. Only the first `=` separates kind from value,
/// so `attr=href$=".png"` keeps its operator.
///
/// # Errors
///
/// Returns [`StepParseError`] if the argument has no `=` or names an unknown kind.
pub fn parse_step(arg: &str) -> Result<Step, StepParseError> {
    let Some((kind, value)) = arg.split_once('=') else {
        return Err(StepParseError::MissingSeparator(arg.to_string()));
    };

    if kind == "combine" {
        return Ok(Step::Combine(value.to_string()));
    }

    kind.parse::<FragmentKind>()
        .map(|kind| Step::Fragment(kind, value.to_string()))
        .map_err(|_| StepParseError::UnknownKind(kind.to_string()))
}

/// Apply `steps` left to right. Each `combine` joins everything built so far
/// with the chain that follows it.
#[must_use]
pub fn build_selector(steps: &[Step], warn: bool) -> Selector {
    let mut joined: Option<(Selector, &str)> = None;
    let mut current = Selector::new();

    for step in steps {
        match step {
            Step::Fragment(kind, value) => {
                if warn && value.is_empty() {
                    warn_once("CLI", &format!("empty {kind} name"));
                }
                current = current.fragment(*kind, value);
            }
            Step::Combine(symbol) => {
                if warn && Combinator::from_symbol(symbol).is_none() {
                    warn_once("CLI", &format!("unrecognized combinator '{symbol}'"));
                }
                let left = match joined.take() {
                    Some((left, previous)) => left.combine(previous, &current),
                    None => current,
                };
                joined = Some((left, symbol.as_str()));
                current = Selector::new();
            }
        }
    }

    match joined {
        Some((left, symbol)) => left.combine(symbol, &current),
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(args: &[&str]) -> Vec<Step> {
        args.iter().map(|arg| parse_step(arg).unwrap()).collect()
    }

    #[test]
    fn test_parse_fragment_kinds() {
        assert_eq!(
            parse_step("element=div"),
            Ok(Step::Fragment(FragmentKind::Element, "div".to_string()))
        );
        assert_eq!(
            parse_step("pseudo-element=before"),
            Ok(Step::Fragment(FragmentKind::PseudoElement, "before".to_string()))
        );
        assert_eq!(parse_step("combine=>"), Ok(Step::Combine(">".to_string())));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        assert_eq!(
            parse_step(r#"attr=href$=".png""#),
            Ok(Step::Fragment(FragmentKind::Attribute, r#"href$=".png""#.to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_step("div"),
            Err(StepParseError::MissingSeparator("div".to_string()))
        );
        assert_eq!(
            parse_step("tag=div"),
            Err(StepParseError::UnknownKind("tag".to_string()))
        );
    }

    #[test]
    fn test_build_compound() {
        let selector = build_selector(&steps(&["element=a", "class=x", "pseudo-class=hover"]), false);
        assert_eq!(selector.stringify().unwrap(), "a.x:hover");
    }

    #[test]
    fn test_build_matches_nested_combine() {
        let selector = build_selector(
            &steps(&[
                "element=div",
                "id=main",
                "combine=+",
                "element=table",
                "combine=~",
                "element=tr",
                "combine= ",
                "element=td",
            ]),
            false,
        );
        assert_eq!(selector.stringify().unwrap(), "div#main + table ~ tr   td");
    }

    #[test]
    fn test_build_reports_validation_failure() {
        let selector = build_selector(&steps(&["id=a", "id=b"]), false);
        assert!(selector.stringify().is_err());
    }

    #[test]
    fn test_build_nothing() {
        assert_eq!(build_selector(&[], false), Selector::new());
    }
}
