/// Static description of one record shape: its name (used in error
/// reporting) and its field table.
#[derive(Debug)]
pub struct Schema {
    /// Record name, e.g. `"Song"`.
    pub name: &'static str,
    /// Field table consulted during materialization.
    pub fields: &'static [Field],
}

/// One entry of a [`Schema`] field table.
#[derive(Debug)]
pub struct Field {
    /// Field name in the internal (snake_case) convention.
    pub name: &'static str,
    /// How the field's value is materialized.
    pub kind: Kind,
    /// Whether construction fails when the field never arrives. A
    /// non-required field falls back to the struct's `#[serde(default)]`.
    pub required: bool,
}

/// Closed set of field kinds; materialization dispatches on this tag.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// Value copied as-is, no coercion.
    Scalar,
    /// Single embedded record.
    Nested(&'static Schema),
    /// Ordered list of embedded records.
    NestedList(&'static Schema),
}

/// Required scalar field.
pub const fn scalar(name: &'static str) -> Field {
    Field {
        name,
        kind: Kind::Scalar,
        required: true,
    }
}

/// Required embedded-record field.
pub const fn nested(name: &'static str, schema: &'static Schema) -> Field {
    Field {
        name,
        kind: Kind::Nested(schema),
        required: true,
    }
}

/// Required list-of-records field.
pub const fn nested_list(name: &'static str, schema: &'static Schema) -> Field {
    Field {
        name,
        kind: Kind::NestedList(schema),
        required: true,
    }
}
