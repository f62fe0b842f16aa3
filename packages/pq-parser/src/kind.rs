//! The closed enumeration of grammar productions a context or ast-node can name.
//!
//! This is illustrative rather than exhaustive: the full M production set is
//! an external collaborator (the concrete grammar is out of scope here). The
//! variants below are enough to exercise every collapse and closure path a
//! driver can hit.

/// Names a grammar production. Leaf kinds never have children; non-leaf kinds
/// have one or more ordered attributes (child contexts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// `{1, 2, 3}` and similar (a non-leaf production with `Csv` attributes).
    ListExpression,
    /// One comma-separated item inside a list, record, or parameter list.
    Csv,
    /// A single fixed lexeme, such as a punctuation mark or reserved word.
    Constant,
    /// `[a = 1, b = 2]` (a non-leaf production with field-pair attributes).
    RecordLiteral,
    /// A bare name reference.
    Identifier,
    /// A literal scalar (number, text, logical, null).
    LiteralExpression,
    /// `f(a, b)`, function application.
    InvokeExpression,
    /// `(expr)`, a wrapper production that may collapse away if the grammar
    /// ultimately decides there was no meaningful wrapping.
    ParenthesizedExpression,
    /// `record[field]` or `record[[field]]`.
    FieldSelector,
    /// The top-level production for a `section` document.
    SectionDocument,
    /// `try expr otherwise expr`.
    ErrorHandlingExpression,
}

impl NodeKind {
    /// Whether this kind is a leaf production: it never has children, and
    /// closing it always appends its id to `leafIds`.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Constant | NodeKind::Identifier | NodeKind::LiteralExpression
        )
    }
}
