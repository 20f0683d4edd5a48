use quill_core::QualifiedName;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TypeModelError>;

/// Failures of the type model.
///
/// All of these are synchronous caller errors: the type graph is
/// deterministic and offline, so nothing here is transient or retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeModelError {
    /// A qualified name was registered twice with conflicting bodies.
    #[error("duplicate declaration of `{name}`")]
    DuplicateDeclaration { name: QualifiedName },

    /// The proposed declaration would make a type its own ancestor.
    #[error("cyclic inheritance involving `{name}`")]
    CyclicInheritance { name: QualifiedName },

    /// Narrowing with the wrong number of type arguments.
    #[error("`{name}` takes {expected} type argument(s), got {found}")]
    ArityMismatch {
        name: QualifiedName,
        expected: usize,
        found: usize,
    },

    /// A type argument was requested from a type that has none.
    #[error("type is not parameterized")]
    NotParameterized,
}
