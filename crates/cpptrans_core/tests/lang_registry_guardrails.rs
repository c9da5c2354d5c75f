use std::collections::HashMap;

use cpptrans_core::lang::identifiers;
use cpptrans_core::lang::methods;
use cpptrans_core::lang::operators::{self, Fixity};

#[test]
fn operators_spellings_unique_per_fixity_and_resolvable() {
    let mut seen: HashMap<(&'static str, Fixity), operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling, info.fixity),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(operators::info_for(info.id).cpp, info.cpp, "cpp spelling mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert((info.spelling, info.fixity), info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn prefix_operators_bind_tighter_than_infix() {
    for info in operators::OPERATORS {
        match info.fixity {
            Fixity::Prefix => assert_eq!(info.precedence, operators::prec::UNARY, "{:?}", info.id),
            Fixity::Infix => assert!(
                info.precedence > operators::prec::CONDITIONAL && info.precedence < operators::prec::UNARY,
                "infix precedence out of range for {:?}",
                info.id
            ),
        }
    }
}

#[test]
fn methods_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, methods::MethodId> = HashMap::new();

    for info in methods::METHODS {
        assert_eq!(
            methods::from_str(info.canonical),
            Some(info.id),
            "method spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(methods::as_str(info.id), info.canonical);
        assert!(info.min_args <= info.max_args, "arity range inverted for {:?}", info.id);
        assert!(!info.summary.is_empty(), "missing summary for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate method spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn sentinels_resolve_to_their_own_entries() {
    for info in identifiers::SENTINELS {
        assert_eq!(identifiers::from_str(info.name), Some(info.id));
        assert_eq!(identifiers::info_for(info.id).name, info.name);
    }
    assert_eq!(identifiers::from_str("foo"), None);
}

#[test]
fn every_operator_and_method_id_has_a_registry_entry() {
    use methods::MethodId as M;
    use operators::OperatorId as O;

    let operator_ids = [
        O::Add, O::Sub, O::Mul, O::Div, O::Mod, O::Shl, O::Shr, O::BitAnd, O::BitOr, O::BitXor, O::Eq, O::NotEq,
        O::Lt, O::LtEq, O::Gt, O::GtEq, O::And, O::Or, O::Neg, O::Not, O::Invert,
    ];
    for id in operator_ids {
        assert_eq!(operators::info_for(id).id, id);
    }
    assert_eq!(operators::OPERATORS.len(), operator_ids.len());

    let method_ids = [
        M::Length, M::Size, M::Substring, M::Reverse, M::Min, M::Max, M::First, M::Last, M::ToS, M::ToI,
    ];
    for id in method_ids {
        assert_eq!(methods::info_for(id).id, id);
    }
    assert_eq!(methods::METHODS.len(), method_ids.len());
}
