//! CSS selector building and stringification
//!
//! A [`Selector`] is an immutable value. Every builder method returns a new
//! value with one more fragment appended, so a partially built selector can
//! be reused as the start of several different chains. Structural checks are
//! deferred to [`Selector::stringify`], which lets callers assemble complex
//! selectors out of pieces that would not be valid on their own.
//!
//! ```
//! use selkie_css::selector::{combine, element, id};
//!
//! let list = element("ul").id("nav");
//! let item = element("li").class("active").pseudo_class("first-child");
//! let text = combine(&list, ">", &item).stringify().unwrap();
//! assert_eq!(text, "ul#nav > li.active:first-child");
//! ```

mod fragment;

use std::fmt;

pub use fragment::{Combinator, FragmentKind};

use crate::error::ValidationError;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// One run of fragments between combine boundaries. Repetition is checked
/// per compound, since a complex selector legitimately names one element
/// and one id on each side of every combinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    /// Text contributed by the fragments of this compound.
    text: String,
    /// Number of element fragments appended to this compound.
    element_tags: usize,
}

impl Compound {
    fn repeats_element(&self) -> bool {
        self.element_tags > 1
    }

    fn repeats_id(&self) -> bool {
        self.text.matches('#').count() > 1
    }

    fn repeats_pseudo_element(&self) -> bool {
        self.text.matches("::").count() > 1
    }
}

/// An immutable, partially or fully built CSS selector.
///
/// The three `has_*` flags are monotonic: once a fragment of that kind has
/// been appended anywhere in a value's derivation, every value derived from
/// it carries the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    text: String,
    has_element_tag: bool,
    has_id_tag: bool,
    has_pseudo_element_tag: bool,
    /// Never empty; the last entry receives newly appended fragments.
    compounds: Vec<Compound>,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            text: String::new(),
            has_element_tag: false,
            has_id_tag: false,
            has_pseudo_element_tag: false,
            compounds: vec![Compound::default()],
        }
    }
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment of the given kind, returning the extended selector.
    ///
    /// `name` is written verbatim between the kind's prefix and suffix; no
    /// escaping or syntax checking is performed.
    #[must_use]
    pub fn fragment(&self, kind: FragmentKind, name: &str) -> Self {
        let mut next = self.clone();
        let piece = format!("{}{name}{}", kind.prefix(), kind.suffix());
        next.text.push_str(&piece);

        match kind {
            FragmentKind::Element => next.has_element_tag = true,
            FragmentKind::Id => next.has_id_tag = true,
            FragmentKind::PseudoElement => next.has_pseudo_element_tag = true,
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {}
        }

        if let Some(compound) = next.compounds.last_mut() {
            compound.text.push_str(&piece);
            if kind == FragmentKind::Element {
                compound.element_tags += 1;
            }
        }

        next
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append an element name with no separator, e.g. `div`.
    #[must_use]
    pub fn element(&self, name: &str) -> Self {
        self.fragment(FragmentKind::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#name`.
    #[must_use]
    pub fn id(&self, name: &str) -> Self {
        self.fragment(FragmentKind::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.name`.
    #[must_use]
    pub fn class(&self, name: &str) -> Self {
        self.fragment(FragmentKind::Class, name)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[content]`. The caller supplies the full attribute expression,
    /// e.g. `href$=".png"`.
    #[must_use]
    pub fn attr(&self, content: &str) -> Self {
        self.fragment(FragmentKind::Attribute, content)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:name`. Functional pseudo-classes carry their argument in
    /// `name`, e.g. `nth-of-type(even)`.
    #[must_use]
    pub fn pseudo_class(&self, name: &str) -> Self {
        self.fragment(FragmentKind::PseudoClass, name)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::name`.
    #[must_use]
    pub fn pseudo_element(&self, name: &str) -> Self {
        self.fragment(FragmentKind::PseudoElement, name)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join `self` and `other` as `"{self} {combinator} {other}"`. The
    /// combinator is written verbatim, so a descendant combinator (`" "`)
    /// ends up as three spaces. Flags are the union of both operands.
    #[must_use]
    pub fn combine(&self, combinator: &str, other: &Self) -> Self {
        let mut compounds = self.compounds.clone();
        compounds.extend(other.compounds.iter().cloned());

        Self {
            text: format!("{} {combinator} {}", self.text, other.text),
            has_element_tag: self.has_element_tag || other.has_element_tag,
            has_id_tag: self.has_id_tag || other.has_id_tag,
            has_pseudo_element_tag: self.has_pseudo_element_tag || other.has_pseudo_element_tag,
            compounds,
        }
    }

    /// [`combine`](Self::combine) using a named combinator's symbol.
    #[must_use]
    pub fn combine_with(&self, combinator: Combinator, other: &Self) -> Self {
        self.combine(combinator.symbol(), other)
    }

    /// Validate and return the selector text.
    ///
    /// Validation only runs here. Within any single compound selector:
    /// - at most one element fragment, when an element was ever appended;
    /// - at most one `#`, when an id was ever appended;
    /// - at most one `::`, when a pseudo-element was ever appended.
    ///
    /// Fragment order inside a compound is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any of the repetition rules is broken.
    pub fn stringify(&self) -> Result<String, ValidationError> {
        let repeated = self.compounds.iter().any(|compound| {
            (self.has_element_tag && compound.repeats_element())
                || (self.has_id_tag && compound.repeats_id())
                || (self.has_pseudo_element_tag && compound.repeats_pseudo_element())
        });

        if repeated {
            return Err(ValidationError);
        }
        Ok(self.text.clone())
    }

    /// The accumulated text, without validation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether an element fragment was appended anywhere in this value.
    #[must_use]
    pub const fn has_element_tag(&self) -> bool {
        self.has_element_tag
    }

    /// Whether an id fragment was appended anywhere in this value.
    #[must_use]
    pub const fn has_id_tag(&self) -> bool {
        self.has_id_tag
    }

    /// Whether a pseudo-element fragment was appended anywhere in this value.
    #[must_use]
    pub const fn has_pseudo_element_tag(&self) -> bool {
        self.has_pseudo_element_tag
    }
}

/// Writes the raw accumulated text. Use [`Selector::stringify`] for the
/// validated form.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Start a chain with an element name.
#[must_use]
pub fn element(name: &str) -> Selector {
    Selector::new().element(name)
}

/// Start a chain with an id.
#[must_use]
pub fn id(name: &str) -> Selector {
    Selector::new().id(name)
}

/// Start a chain with a class.
#[must_use]
pub fn class(name: &str) -> Selector {
    Selector::new().class(name)
}

/// Start a chain with an attribute expression.
#[must_use]
pub fn attr(content: &str) -> Selector {
    Selector::new().attr(content)
}

/// Start a chain with a pseudo-class.
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    Selector::new().pseudo_class(name)
}

/// Start a chain with a pseudo-element.
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    Selector::new().pseudo_element(name)
}

/// Same as `left.combine(combinator, right)`.
#[must_use]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    left.combine(combinator, right)
}
