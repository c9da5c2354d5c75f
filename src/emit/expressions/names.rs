//! Rename identifiers to generated C++ accessors.

use cpptrans_core::lang::conventions::accessor_call;
use cpptrans_core::lang::identifiers;

use super::super::{CppEmitter, Fragment};

impl<'a> CppEmitter<'a> {
    /// Sentinels map to fixed locals; every other identifier is an accessor call.
    pub(super) fn emit_name(name: &str) -> Fragment {
        match identifiers::from_str(name) {
            Some(id) => Fragment::primary(identifiers::cpp_token(id)),
            None => Fragment::postfix(accessor_call(name)),
        }
    }
}
