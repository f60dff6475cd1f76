//! Lowering failures
//!
//! Lowering is total or it aborts: every error here is fatal for the crate
//! being compiled and is returned unchanged to the driver.

use ks_hir::{NameCollision, SimplePath};
use ks_span::FileSpan;
use miette::Diagnostic;
use thiserror::Error;

/// Result alias for lowering entry points
pub type LowerResult<T> = Result<T, LowerError>;

/// Broad classes of lowering failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A construct that earlier passes should have removed reached lowering
    InvariantViolation,
    /// Lowering for a valid construct has not been written yet
    NotImplemented,
    /// A valid construct that the HIR cannot represent
    Unsupported,
    /// Two macros share a name under the `reject` policy
    MacroConflict,
}

/// Lowering error
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum LowerError {
    /// Malformed input from an earlier pass
    #[error("internal: invariant violated at {span}: {message}")]
    #[diagnostic(
        code(lower::invariant),
        help("this is a bug in the parser or an earlier pass, not in the program")
    )]
    Invariant {
        /// What was found
        message: String,
        /// Source location
        span: FileSpan,
    },

    /// Missing lowering support
    #[error("internal: unimplemented lowering of {what} at {span}")]
    #[diagnostic(code(lower::unimplemented))]
    NotImplemented {
        /// Construct that could not be lowered
        what: String,
        /// Source location
        span: FileSpan,
    },

    /// Construct with no HIR form
    #[error("{what} are not supported (at {span})")]
    #[diagnostic(code(lower::unsupported))]
    Unsupported {
        /// Construct description
        what: String,
        /// Source location
        span: FileSpan,
    },

    /// Same-namespace collision inside one module
    #[error("internal: duplicate item in module `{module}`")]
    #[diagnostic(
        code(lower::duplicate_item),
        help("duplicate definitions should have been rejected by name resolution")
    )]
    DuplicateItem {
        /// Module being built
        module: SimplePath,
        /// Colliding name and namespace
        #[source]
        source: NameCollision,
        /// Location of the second definition
        span: FileSpan,
    },

    /// Macro table collision
    #[error("macro `{name}` is defined more than once")]
    #[diagnostic(
        code(lower::macro_conflict),
        help("rename one definition, or set `macro-conflicts` to `keep-first` or `keep-last`")
    )]
    MacroConflict {
        /// Macro name
        name: String,
        /// Location of the later definition
        span: FileSpan,
    },
}

impl LowerError {
    /// Malformed input that earlier passes should have rejected
    pub fn invariant(message: impl Into<String>, span: FileSpan) -> Self {
        Self::Invariant {
            message: message.into(),
            span,
        }
    }

    /// Construct with no lowering yet
    pub fn not_implemented(what: impl Into<String>, span: FileSpan) -> Self {
        Self::NotImplemented {
            what: what.into(),
            span,
        }
    }

    /// Construct the HIR cannot represent
    pub fn unsupported(what: impl Into<String>, span: FileSpan) -> Self {
        Self::Unsupported {
            what: what.into(),
            span,
        }
    }

    /// Name clash while filling `module`
    pub fn duplicate(module: &SimplePath, source: NameCollision, span: FileSpan) -> Self {
        Self::DuplicateItem {
            module: module.clone(),
            source,
            span,
        }
    }

    /// Classify for the driver
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invariant { .. } | Self::DuplicateItem { .. } => ErrorKind::InvariantViolation,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::MacroConflict { .. } => ErrorKind::MacroConflict,
        }
    }

    /// Originating source location
    pub fn span(&self) -> FileSpan {
        match self {
            Self::Invariant { span, .. }
            | Self::NotImplemented { span, .. }
            | Self::Unsupported { span, .. }
            | Self::DuplicateItem { span, .. }
            | Self::MacroConflict { span, .. } => *span,
        }
    }
}
