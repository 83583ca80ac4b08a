use std::{borrow::Cow, error::Error, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Misuse of the builder, such as closing an element that was never opened.
pub struct BuildError {
    pub kind: BuildErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// An attribute was set while no element was open. Holds the attribute name.
    AttributeWithoutElement(String),
    /// The attribute name is empty or contains characters not allowed in attribute names.
    InvalidAttributeName(String),
    /// A class was set while no element was open.
    ClassWithoutElement,
    NothingToClose,
    /// The output was built while elements were still open, outermost first.
    UnclosedElements(Vec<String>),
}

impl BuildError {
    pub(crate) fn new(kind: BuildErrorKind) -> Self {
        Self { kind }
    }
}

impl From<BuildErrorKind> for BuildError {
    fn from(kind: BuildErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason: Cow<_> = match &self.kind {
            BuildErrorKind::AttributeWithoutElement(name) => {
                format!("attributes can be set for elements only, tried to set '{name}'").into()
            }
            BuildErrorKind::InvalidAttributeName(name) => {
                format!("'{name}' is not a valid attribute name").into()
            }
            BuildErrorKind::ClassWithoutElement => {
                "attributes can be set for elements only, tried to set 'class'".into()
            }
            BuildErrorKind::NothingToClose => "there is no open element to end".into(),
            BuildErrorKind::UnclosedElements(tags) => format!(
                "{} element(s) still open: {}",
                tags.len(),
                tags.iter()
                    .map(|tag| format!("<{tag}>"))
                    .collect::<Vec<_>>()
                    .join(" ")
            )
            .into(),
        };

        write!(f, "build error: {reason}")
    }
}

impl Error for BuildError {}
