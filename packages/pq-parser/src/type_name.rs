//! The Type-Name Renderer: a total, pure function from a structured M type
//! descriptor to its canonical surface-syntax string.
//!
//! This is one of the stable public contracts the core exposes to downstream
//! consumers (formatters, type analyzers) even though type inference itself
//! is out of scope. Rendering never allocates more than the output string and
//! never performs I/O.

use indexmap::IndexMap;

/// One of the fixed primitive type names of the M language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Any,
    AnyNonNull,
    Binary,
    Date,
    DateTime,
    DateTimeZone,
    Duration,
    Function,
    List,
    Logical,
    None,
    Null,
    Number,
    Record,
    Table,
    Type,
    Action,
    Time,
    NotApplicable,
    Unknown,
    Text,
}

impl PrimitiveKind {
    fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Any => "any",
            PrimitiveKind::AnyNonNull => "anynonnull",
            PrimitiveKind::Binary => "binary",
            PrimitiveKind::Date => "date",
            PrimitiveKind::DateTime => "datetime",
            PrimitiveKind::DateTimeZone => "datetimezone",
            PrimitiveKind::Duration => "duration",
            PrimitiveKind::Function => "function",
            PrimitiveKind::List => "list",
            PrimitiveKind::Logical => "logical",
            PrimitiveKind::None => "none",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Record => "record",
            PrimitiveKind::Table => "table",
            PrimitiveKind::Type => "type",
            PrimitiveKind::Action => "action",
            PrimitiveKind::Time => "time",
            PrimitiveKind::NotApplicable => "not applicable",
            PrimitiveKind::Unknown => "unknown",
            PrimitiveKind::Text => "text",
        }
    }
}

/// A named, possibly-optional function parameter, as it appears in both
/// `DefinedFunction` and `FunctionType` descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionParameter {
    pub name: String,
    pub optional: bool,
    pub param_type: TypeDescriptor,
}

impl FunctionParameter {
    pub fn new(name: impl Into<String>, optional: bool, param_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            optional,
            param_type,
        }
    }
}

/// A record or table's field set: an insertion-ordered map of field names to
/// their types, plus whether the field set is open (`...`) or closed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSet {
    pub fields: IndexMap<String, TypeDescriptor>,
    pub open: bool,
}

impl FieldSet {
    pub fn new(fields: IndexMap<String, TypeDescriptor>, open: bool) -> Self {
        Self { fields, open }
    }

    pub fn closed(fields: IndexMap<String, TypeDescriptor>) -> Self {
        Self::new(fields, false)
    }
}

/// A structured M type descriptor. See module docs and the rendering
/// contracts on each variant for the exact surface form [`render`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// Wraps any other descriptor to mark it nullable. Wrapping
    /// `Primitive(AnyNonNull)` has no effect on rendering: that primitive can
    /// never be nullable, so the wrapper is silently ignored rather than
    /// rejected, keeping rendering total.
    Nullable(Box<TypeDescriptor>),
    AnyUnion(Vec<TypeDescriptor>),
    DefinedList(Vec<TypeDescriptor>),
    DefinedListType(Vec<TypeDescriptor>),
    ListType(Box<TypeDescriptor>),
    DefinedRecord(FieldSet),
    RecordType(FieldSet),
    DefinedTable(FieldSet),
    TableType(FieldSet),
    TableTypePrimaryExpression(Box<TypeDescriptor>),
    PrimaryPrimitiveType(PrimitiveKind),
    DefinedFunction {
        parameters: Vec<FunctionParameter>,
        return_type: Box<TypeDescriptor>,
    },
    FunctionType {
        parameters: Vec<FunctionParameter>,
        return_type: Box<TypeDescriptor>,
    },
}

/// Renders a type descriptor to its canonical M surface form.
///
/// Deterministic, allocation-bounded (one string, grown as it goes, no
/// intermediate collections beyond what field/parameter iteration needs), and
/// performs no I/O.
pub fn render(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Primitive(kind) => kind.as_str().to_string(),
        TypeDescriptor::Nullable(inner) => {
            if matches!(inner.as_ref(), TypeDescriptor::Primitive(PrimitiveKind::AnyNonNull)) {
                render(inner)
            } else {
                format!("nullable {}", render(inner))
            }
        }
        TypeDescriptor::AnyUnion(members) => members
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(" | "),
        TypeDescriptor::DefinedList(members) => render_list_braces(members),
        TypeDescriptor::DefinedListType(members) => format!("type {}", render_list_braces(members)),
        TypeDescriptor::ListType(element) => format!("type {{{}}}", render(element)),
        TypeDescriptor::DefinedRecord(fields) => render_record_brackets(fields),
        TypeDescriptor::RecordType(fields) => format!("type {}", render_record_brackets(fields)),
        TypeDescriptor::DefinedTable(fields) => {
            format!("table {}", render_record_brackets(fields))
        }
        TypeDescriptor::TableType(fields) => {
            format!("type table {}", render_record_brackets(fields))
        }
        TypeDescriptor::TableTypePrimaryExpression(primary) => {
            format!("type table {}", render(primary))
        }
        TypeDescriptor::PrimaryPrimitiveType(kind) => format!("type {}", kind.as_str()),
        TypeDescriptor::DefinedFunction {
            parameters,
            return_type,
        } => format!(
            "({}) => {}",
            render_parameters(parameters),
            render(return_type)
        ),
        TypeDescriptor::FunctionType {
            parameters,
            return_type,
        } => format!(
            "type function ({}) {}",
            render_parameters(parameters),
            render(return_type)
        ),
    }
}

fn render_list_braces(members: &[TypeDescriptor]) -> String {
    format!(
        "{{{}}}",
        members.iter().map(render).collect::<Vec<_>>().join(", ")
    )
}

fn render_record_brackets(fields: &FieldSet) -> String {
    if fields.fields.is_empty() {
        return if fields.open { "[...]".to_string() } else { "[]".to_string() };
    }
    let rendered_fields = fields
        .fields
        .iter()
        .map(|(name, field_type)| format!("{name}: {}", render(field_type)))
        .collect::<Vec<_>>()
        .join(", ");
    if fields.open {
        format!("[{rendered_fields}, ...]")
    } else {
        format!("[{rendered_fields}]")
    }
}

fn render_parameter(parameter: &FunctionParameter) -> String {
    let optional_prefix = if parameter.optional { "optional " } else { "" };
    format!(
        "{}: {optional_prefix}{}",
        parameter.name,
        render(&parameter.param_type)
    )
}

fn render_parameters(parameters: &[FunctionParameter]) -> String {
    parameters
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primitive(kind: PrimitiveKind) -> TypeDescriptor {
        TypeDescriptor::Primitive(kind)
    }

    fn nullable(inner: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::Nullable(Box::new(inner))
    }

    #[test]
    fn renders_bare_primitives() {
        assert_eq!(render(&primitive(PrimitiveKind::Number)), "number");
        assert_eq!(render(&primitive(PrimitiveKind::NotApplicable)), "not applicable");
    }

    #[test]
    fn renders_nullable_prefix() {
        assert_eq!(render(&nullable(primitive(PrimitiveKind::Number))), "nullable number");
    }

    #[test]
    fn anynonnull_cannot_be_nullable() {
        assert_eq!(
            render(&nullable(primitive(PrimitiveKind::AnyNonNull))),
            "anynonnull"
        );
    }

    #[test]
    fn renders_empty_and_populated_lists() {
        assert_eq!(render(&TypeDescriptor::DefinedList(vec![])), "{}");
        assert_eq!(
            render(&TypeDescriptor::DefinedList(vec![
                primitive(PrimitiveKind::Number),
                primitive(PrimitiveKind::Text)
            ])),
            "{number, text}"
        );
    }

    #[test]
    fn renders_list_type_of_element() {
        assert_eq!(
            render(&TypeDescriptor::ListType(Box::new(primitive(PrimitiveKind::Text)))),
            "type {text}"
        );
    }

    #[test]
    fn renders_records_empty_closed_and_open() {
        assert_eq!(
            render(&TypeDescriptor::DefinedRecord(FieldSet::closed(IndexMap::new()))),
            "[]"
        );
        assert_eq!(
            render(&TypeDescriptor::DefinedRecord(FieldSet::new(IndexMap::new(), true))),
            "[...]"
        );
    }

    #[test]
    fn renders_record_fields_in_insertion_order() {
        let mut fields = IndexMap::new();
        fields.insert("b".to_string(), primitive(PrimitiveKind::Text));
        fields.insert("a".to_string(), primitive(PrimitiveKind::Number));
        assert_eq!(
            render(&TypeDescriptor::DefinedRecord(FieldSet::closed(fields))),
            "[b: text, a: number]"
        );
    }

    #[test]
    fn renders_defined_table_with_table_prefix() {
        let mut fields = IndexMap::new();
        fields.insert("bar".to_string(), primitive(PrimitiveKind::Text));
        assert_eq!(
            render(&TypeDescriptor::DefinedTable(FieldSet::new(fields, true))),
            "table [bar: text, ...]"
        );
    }

    /// S5 from the seed scenarios: a three-member union of a record, a list,
    /// and an open table.
    #[test]
    fn renders_complex_union() {
        let mut record_fields = IndexMap::new();
        record_fields.insert("foo".to_string(), primitive(PrimitiveKind::Number));

        let mut table_fields = IndexMap::new();
        table_fields.insert("bar".to_string(), primitive(PrimitiveKind::Text));

        let descriptor = TypeDescriptor::AnyUnion(vec![
            TypeDescriptor::DefinedRecord(FieldSet::closed(record_fields)),
            TypeDescriptor::DefinedList(vec![primitive(PrimitiveKind::Text)]),
            TypeDescriptor::DefinedTable(FieldSet::new(table_fields, true)),
        ]);

        assert_eq!(
            render(&descriptor),
            "[foo: number] | {text} | table [bar: text, ...]"
        );
    }

    /// S6 from the seed scenarios: every parameter-flavor combination.
    #[test]
    fn renders_function_with_all_parameter_flavors() {
        let descriptor = TypeDescriptor::DefinedFunction {
            parameters: vec![
                FunctionParameter::new("param1", false, primitive(PrimitiveKind::Number)),
                FunctionParameter::new("param2", false, nullable(primitive(PrimitiveKind::Number))),
                FunctionParameter::new("param3", true, primitive(PrimitiveKind::Number)),
                FunctionParameter::new("param4", true, nullable(primitive(PrimitiveKind::Number))),
            ],
            return_type: Box::new(primitive(PrimitiveKind::Any)),
        };

        assert_eq!(
            render(&descriptor),
            "(param1: number, param2: nullable number, param3: optional number, param4: optional nullable number) => any"
        );
    }

    #[test]
    fn renders_function_type_without_arrow() {
        let descriptor = TypeDescriptor::FunctionType {
            parameters: vec![FunctionParameter::new(
                "x",
                false,
                primitive(PrimitiveKind::Number),
            )],
            return_type: Box::new(primitive(PrimitiveKind::Logical)),
        };
        assert_eq!(render(&descriptor), "type function (x: number) logical");
    }

    #[test]
    fn render_is_idempotent_on_repeated_calls() {
        let descriptor = nullable(primitive(PrimitiveKind::Date));
        assert_eq!(render(&descriptor), render(&descriptor));
    }
}
