use ieom_algebra::{make_annihilator, make_creator};
use ieom_core::IeomError;
use ieom_hubbard::{Basis, Basis1Operator, Basis3Operator, BasisKind};
use ieom_lattice::LinearDiscretization;
use proptest::prelude::*;

fn chain(n: usize) -> LinearDiscretization {
    LinearDiscretization::new(n, 1.0).unwrap()
}

#[test]
fn one_operator_basis_lists_up_creators() {
    let basis = Basis1Operator::new(&chain(5));
    assert_eq!(basis.n(), 5);
    assert_eq!(basis.size(), 5);
    for (i, term) in basis.terms().iter().enumerate() {
        assert_eq!(term.prefactor, 1.0);
        assert_eq!(term.operators, vec![make_creator(i, true)]);
        assert_eq!(basis.get_1op_index(i), i);
        assert_eq!(basis.index_of(&term.operators), Some(i));
    }
    assert_eq!(basis.index_of(&[make_creator(1usize, false)]), None);
    assert_eq!(basis.index_of(&[make_annihilator(1usize, true)]), None);
    assert_eq!(basis.index_of(&[make_creator(5usize, true)]), None);
    assert_eq!(basis.index_of(&[]), None);
}

#[test]
fn three_operator_index_is_a_bijection() {
    let n = 4;
    let basis = Basis3Operator::new(&chain(n));
    assert_eq!(basis.size(), n * (n * n + 1));
    for (idx, term) in basis.terms().iter().enumerate() {
        assert_eq!(basis.index_of(&term.operators), Some(idx));
    }
    for i1 in 0..n {
        for i2 in 0..n {
            for i3 in 0..n {
                let idx = basis.get_3op_index(i1, i2, i3);
                assert_eq!(idx, n + n * n * i1 + n * i2 + i3);
                assert_eq!(basis.try_3op_index(i1, i2, i3).unwrap(), idx);
                assert_eq!(
                    basis.terms()[idx].operators,
                    vec![
                        make_creator(i1, true),
                        make_creator(i2, false),
                        make_annihilator(i3, false),
                    ]
                );
            }
        }
    }
}

#[test]
fn checked_three_operator_index_rejects_large_sites() {
    let basis = Basis3Operator::new(&chain(3));
    let err = basis.try_3op_index(0, 3, 1).unwrap_err();
    assert!(matches!(err, IeomError::Basis(_)));
    assert_eq!(err.info().code, "site-out-of-range");
    assert_eq!(
        basis.index_of(&[
            make_creator(0usize, true),
            make_creator(3usize, false),
            make_annihilator(1usize, false),
        ]),
        None
    );
}

#[test]
fn unknown_patterns_have_no_index() {
    let basis = Basis3Operator::new(&chain(3));
    assert_eq!(
        basis.index_of(&[
            make_creator(0usize, false),
            make_creator(1usize, true),
            make_annihilator(2usize, false),
        ]),
        None
    );
    assert_eq!(
        basis.index_of(&[make_creator(0usize, true), make_annihilator(0usize, true)]),
        None
    );
}

#[test]
fn conjugate_basis_is_independent() {
    let basis = Basis3Operator::new(&chain(3));
    let conjugate = basis.get_conjugate();
    assert!(conjugate.is_conjugated());
    assert!(!basis.is_conjugated());
    assert_eq!(conjugate.size(), basis.size());
    for (original, conj) in basis.terms().iter().zip(conjugate.terms()) {
        assert_eq!(&original.conjugate(), conj);
    }
    for (idx, term) in conjugate.terms().iter().enumerate() {
        assert_eq!(conjugate.index_of(&term.operators), Some(idx));
    }
    assert_eq!(conjugate.get_conjugate(), basis);
}

#[test]
fn basis_enum_dispatches_to_the_variant() {
    let lattice = chain(3);
    let one = Basis::new(BasisKind::OneOperator, &lattice);
    let three = Basis::new(BasisKind::ThreeOperator, &lattice);
    assert_eq!(one.kind(), BasisKind::OneOperator);
    assert_eq!(three.kind(), BasisKind::ThreeOperator);
    assert_eq!(one.size(), 3);
    assert_eq!(three.size(), 30);
    assert_eq!(one.n(), three.n());
    let entry = three.terms()[17].operators.clone();
    assert_eq!(three.index_of(&entry), Some(17));
    assert_eq!(one.index_of(&entry), None);

    let conj = one.get_conjugate();
    assert_eq!(conj.index_of(&[make_annihilator(2usize, true)]), Some(2));
    assert_eq!(conj.index_of(&[make_creator(2usize, true)]), None);
}

#[test]
fn basis_kind_uses_kebab_case() {
    assert_eq!(
        serde_json::to_string(&BasisKind::ThreeOperator).unwrap(),
        "\"three-operator\""
    );
    let kind: BasisKind = serde_json::from_str("\"one-operator\"").unwrap();
    assert_eq!(kind, BasisKind::OneOperator);
}

proptest! {
    #[test]
    fn three_operator_index_round_trips_on_any_chain(
        n in 1usize..8,
        sites in (any::<u8>(), any::<u8>(), any::<u8>()),
    ) {
        let (i1, i2, i3) = (
            usize::from(sites.0) % n,
            usize::from(sites.1) % n,
            usize::from(sites.2) % n,
        );
        let basis = Basis3Operator::new(&chain(n));
        prop_assert_eq!(basis.size(), n * (n * n + 1));

        let idx = basis.get_3op_index(i1, i2, i3);
        prop_assert!(idx >= n && idx < basis.size());
        let expected = vec![
            make_creator(i1, true),
            make_creator(i2, false),
            make_annihilator(i3, false),
        ];
        prop_assert_eq!(&basis.terms()[idx].operators, &expected);
        prop_assert_eq!(basis.index_of(&expected), Some(idx));
        prop_assert_eq!(basis.try_3op_index(i1, i2, i3).ok(), Some(idx));
        prop_assert!(basis.try_3op_index(i1, n, i3).is_err());
    }
}
