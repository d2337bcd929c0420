//! Struct field flattening across single-parent inheritance chains

use crate::error::{SchemaError, SchemaResult};
use crate::registry::TypeRegistry;
use crate::schema::{ROOT_STRUCT, StructFieldDef, Type};

/// Collect the complete field list of a struct, ancestor fields first.
///
/// For a chain `Root <- P1 <- S` the result is `flattened_fields(P1) ++ S.fields`, each in
/// declaration order. A struct whose parent is the root `Struct` yields exactly its own
/// fields. Any non-struct type yields an empty list.
///
/// # Errors
///
/// - [`SchemaError::UnknownType`] when a parent reference does not resolve
/// - [`SchemaError::CircularReference`] when the parent chain revisits a struct
pub fn flattened_fields<'a, R>(registry: &'a R, ty: &'a Type) -> SchemaResult<Vec<&'a StructFieldDef>>
where
    R: TypeRegistry + ?Sized,
{
    let mut fields = Vec::new();
    let mut chain = Vec::new();
    add_fields(registry, ty, &mut fields, &mut chain)?;
    tracing::trace!(ty = ty.name(), count = fields.len(), "flattened struct fields");
    Ok(fields)
}

fn add_fields<'a, R>(
    registry: &'a R,
    ty: &'a Type,
    dst: &mut Vec<&'a StructFieldDef>,
    chain: &mut Vec<&'a str>,
) -> SchemaResult<()>
where
    R: TypeRegistry + ?Sized,
{
    let st = match ty {
        Type::Struct(st) => st,
        Type::BaseType(_)
        | Type::Map(_)
        | Type::Array(_)
        | Type::Enum(_)
        | Type::Union(_)
        | Type::String(_)
        | Type::Bytes(_)
        | Type::Number(_) => return Ok(()),
    };

    if chain.contains(&st.name.as_str()) {
        chain.push(&st.name);
        return Err(SchemaError::circular(chain));
    }
    chain.push(&st.name);

    if st.parent != ROOT_STRUCT {
        let parent = registry.resolve(&st.parent)?;
        add_fields(registry, parent, dst, chain)?;
    }
    dst.extend(st.fields.iter());

    Ok(())
}
