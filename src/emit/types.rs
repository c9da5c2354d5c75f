//! Native C++ type names for static types.

use cpptrans_core::lang::conventions::{enum_to_type, types_to_class};

use super::ownership::OwnershipPolicy;
use crate::ir::{FloatWidth, StaticType};

/// Native type used in generated code for `ty`.
///
/// Records and arrays are handles whose shape depends on the ownership policy.
pub(super) fn native_type(policy: &dyn OwnershipPolicy, ty: &StaticType) -> String {
    match ty {
        StaticType::Int(it) => it.cpp_name(),
        StaticType::Float(FloatWidth::F32) => "float".to_string(),
        StaticType::Float(FloatWidth::F64) => "double".to_string(),
        StaticType::Bool => "bool".to_string(),
        StaticType::Str | StaticType::Bytes => "std::string".to_string(),
        StaticType::Array(elem) => policy.array_handle(&vector_type(policy, elem)),
        StaticType::Record(r) => policy.record_handle(&types_to_class(&r.path)),
        StaticType::Enum(e) => enum_to_type(&e.owner, &e.name),
    }
}

/// `std::vector<T>` for element type `elem`.
pub(super) fn vector_type(policy: &dyn OwnershipPolicy, elem: &StaticType) -> String {
    format!("std::vector<{}>", native_type(policy, elem))
}
