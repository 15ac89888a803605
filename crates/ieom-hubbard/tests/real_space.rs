use ieom_algebra::{
    deduplicate, make_annihilator, make_creator, make_prefactor, make_term, remove_zero_terms,
    HubbardOperator, Prefactor, Term,
};
use ieom_core::IeomError;
use ieom_hubbard::{Hamiltonian, HubbardTerm};
use ieom_lattice::{LinearDiscretization, SquareDiscretization};

fn reduced(terms: &[HubbardTerm]) -> Vec<HubbardTerm> {
    let mut unique = deduplicate(terms);
    remove_zero_terms(&mut unique);
    unique
}

#[test]
fn hopping_on_ten_site_chain_reaches_both_neighbours() {
    let lattice = LinearDiscretization::new(10, 1.0).unwrap();
    let hopping = 1.25;
    let hamiltonian = Hamiltonian::hopping_only(hopping);
    let term = make_term(1.0, [make_creator(0usize, true)]);

    let result = reduced(&hamiltonian.commutate(&term, &lattice).unwrap());
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].operators, vec![make_creator(1usize, true)]);
    assert_eq!(result[1].operators, vec![make_creator(9usize, true)]);
    for term in &result {
        assert_eq!(term.prefactor.abs(), hopping);
        assert_eq!(term.prefactor, -hopping);
    }
}

#[test]
fn full_hamiltonian_adds_the_density_term() {
    let lattice = LinearDiscretization::new(10, 1.0).unwrap();
    let hamiltonian = Hamiltonian::new(1.0, 4.0);
    let term = make_term(1.0, [make_creator(3usize, true)]);

    let result = reduced(&hamiltonian.commutate(&term, &lattice).unwrap());
    assert_eq!(result.len(), 3);
    assert_eq!(
        result[2],
        make_term(
            4.0,
            [
                make_creator(3usize, true),
                make_creator(3usize, false),
                make_annihilator(3usize, false),
            ]
        )
    );
}

#[test]
fn annihilators_hop_with_opposite_sign() {
    let lattice = LinearDiscretization::new(5, 1.0).unwrap();
    let hamiltonian = Hamiltonian::hopping_only(1.0);
    let term = make_term(1.0, [make_annihilator(2usize, false)]);

    let result = reduced(&hamiltonian.commutate(&term, &lattice).unwrap());
    assert_eq!(
        result,
        vec![
            make_term(1.0, [make_annihilator(1usize, false)]),
            make_term(1.0, [make_annihilator(3usize, false)]),
        ]
    );
}

#[test]
fn three_operator_terms_keep_their_pattern_under_hopping() {
    let lattice = LinearDiscretization::new(6, 1.0).unwrap();
    let hamiltonian = Hamiltonian::hopping_only(1.0);
    let term = make_term(
        1.0,
        [
            make_creator(0usize, true),
            make_creator(2usize, false),
            make_annihilator(4usize, false),
        ],
    );
    let result = reduced(&hamiltonian.commutate(&term, &lattice).unwrap());
    assert_eq!(result.len(), 6);
    for term in &result {
        let ops = &term.operators;
        assert_eq!(ops.len(), 3);
        assert!(ops[0].creator && ops[0].spin);
        assert!(ops[1].creator && !ops[1].spin);
        assert!(!ops[2].creator && !ops[2].spin);
        // creators move with −J, the annihilator with +J
        let expected = if ops[2].index == 4 { -1.0 } else { 1.0 };
        assert_eq!(term.prefactor, expected, "{term}");
    }
}

#[test]
fn scalar_term_commutes_with_the_hamiltonian() {
    let lattice = LinearDiscretization::new(4, 1.0).unwrap();
    let term: HubbardTerm = make_term(3.0, []);
    assert!(Hamiltonian::default()
        .commutate(&term, &lattice)
        .unwrap()
        .is_empty());
}

#[test]
fn indices_outside_the_lattice_are_rejected() {
    let lattice = LinearDiscretization::new(4, 1.0).unwrap();
    let term = make_term(1.0, [make_creator(4usize, true)]);
    let hamiltonian = Hamiltonian::default();

    let err = hamiltonian.commutate(&term, &lattice).unwrap_err();
    assert!(matches!(err, IeomError::Algebra(_)));
    assert_eq!(err.info().code, "index-out-of-lattice");
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("4"));

    let mut sink = Vec::new();
    assert!(hamiltonian
        .commutate_hopping(&term, &lattice, &mut sink)
        .is_err());
    assert!(hamiltonian
        .commutate_interaction(&term, &lattice, &mut sink)
        .is_err());
    assert!(sink.is_empty());
}

#[test]
fn enable_flags_select_the_parts() {
    let lattice = LinearDiscretization::new(8, 1.0).unwrap();
    let term = make_term(1.0, [make_creator(5usize, true)]);

    let mut hamiltonian = Hamiltonian::new(1.0, 2.0);
    hamiltonian.enable_hopping = false;
    let interaction = reduced(&hamiltonian.commutate(&term, &lattice).unwrap());
    assert_eq!(interaction.len(), 1);
    assert_eq!(interaction[0].len(), 3);

    hamiltonian.enable_interaction = false;
    assert!(hamiltonian.commutate(&term, &lattice).unwrap().is_empty());

    let mut parts = Vec::new();
    hamiltonian
        .commutate_hopping(&term, &lattice, &mut parts)
        .unwrap();
    hamiltonian
        .commutate_interaction(&term, &lattice, &mut parts)
        .unwrap();
    let full = Hamiltonian::new(1.0, 2.0).commutate(&term, &lattice).unwrap();
    assert_eq!(reduced(&parts), reduced(&full));
}

#[test]
fn accumulating_form_appends() {
    let lattice = LinearDiscretization::new(4, 1.0).unwrap();
    let hamiltonian = Hamiltonian::hopping_only(1.0);
    let mut result = vec![make_term(7.0, [make_annihilator(0usize, true)])];
    hamiltonian
        .commutate_into(&make_term(1.0, [make_creator(0usize, true)]), &lattice, &mut result)
        .unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result[0].prefactor, 7.0);
}

#[test]
fn square_lattice_hops_to_four_neighbours() {
    let lattice = SquareDiscretization::new(3, 1.0).unwrap();
    let hamiltonian = Hamiltonian::hopping_only(1.0);
    let result = reduced(
        &hamiltonian
            .commutate(&make_term(1.0, [make_creator(4usize, true)]), &lattice)
            .unwrap(),
    );
    let sites: Vec<usize> = result.iter().map(|term| term.operators[0].index).collect();
    assert_eq!(sites, vec![1, 3, 5, 7]);
}

#[test]
fn symbolic_prefactors_match_numeric_in_real_space() {
    let lattice = LinearDiscretization::new(5, 1.0).unwrap();
    let hamiltonian = Hamiltonian::new(1.0, 3.0);
    let ops: [HubbardOperator; 3] = [
        make_creator(1, true),
        make_creator(1, false),
        make_annihilator(2, false),
    ];
    let numeric = reduced(&hamiltonian.commutate(&make_term(1.0, ops), &lattice).unwrap());

    let symbolic: Term<Prefactor<f64, usize>, HubbardOperator> =
        make_term(make_prefactor(1.0, []), ops);
    let evaluated: Vec<HubbardTerm> = hamiltonian
        .commutate(&symbolic, &lattice)
        .unwrap()
        .iter()
        .map(|term| make_term(term.prefactor.evaluate(), term.operators.iter().copied()))
        .collect();
    assert_eq!(reduced(&evaluated), numeric);
}
