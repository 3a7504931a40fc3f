use orgchart_core::{ChartService, ChartServiceError, FieldAliases, ImportRow};

fn row(cells: &[(&str, &str)]) -> ImportRow {
    cells
        .iter()
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect()
}

fn import(service: &mut ChartService, rows: Vec<ImportRow>) -> Result<(), ChartServiceError> {
    service.import_rows(&rows, &FieldAliases::default()).map(|_| ())
}

#[test]
fn mixed_native_and_english_headers_resolve() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[
            ("이름", "박대표"),
            ("직책", "대표이사"),
            ("부서", ""),
        ]),
        row(&[
            ("Name", "John"),
            ("Position", "Engineer"),
            ("Department", "개발팀"),
            ("Manager", "박대표"),
            ("Task", "server work"),
        ]),
        row(&[
            ("성명", "이과장"),
            ("직급", "과장"),
            ("팀", "개발팀"),
            ("상사", "John"),
        ]),
    ];

    import(&mut service, rows).unwrap();

    let john = service
        .people()
        .iter()
        .find(|person| person.name == "John")
        .unwrap();
    assert_eq!(john.manager, "박대표");
    assert_eq!(john.department, "개발팀");
    assert_eq!(john.task, "server work");

    let lee = service
        .people()
        .iter()
        .find(|person| person.name == "이과장")
        .unwrap();
    assert_eq!(lee.position, "과장");
    assert_eq!(lee.manager, "John");
}

#[test]
fn first_candidate_becomes_authoritative_top() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[("이름", "박대표"), ("직책", "대표이사"), ("상위자", "없어야함")]),
        row(&[("이름", "이부장"), ("직책", "부장")]),
        row(&[("이름", "최과장"), ("직책", "과장"), ("상위자", "이부장")]),
    ];

    import(&mut service, rows).unwrap();

    let top = service
        .people()
        .iter()
        .find(|person| person.name == "박대표")
        .unwrap();
    assert!(top.is_top_level(), "candidate manager must be cleared");
    assert_eq!(top.department, "경영진", "blank candidate department defaults");

    let second = service
        .people()
        .iter()
        .find(|person| person.name == "이부장")
        .unwrap();
    assert_eq!(second.manager, "박대표", "stray top-level rows re-parent");

    let third = service
        .people()
        .iter()
        .find(|person| person.name == "최과장")
        .unwrap();
    assert_eq!(third.manager, "이부장", "managed rows keep their manager");
}

#[test]
fn candidate_matching_root_name_is_reset_to_canonical_fields() {
    let mut service = ChartService::default();
    let policy = service.policy().clone();
    let rows = vec![
        row(&[("이름", "강필구"), ("직책", "고문"), ("부서", "자문")]),
        row(&[("이름", "이부장"), ("직책", "부장")]),
    ];

    import(&mut service, rows).unwrap();

    let matching: Vec<_> = service
        .people()
        .iter()
        .filter(|person| policy.is_root(person))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].position, policy.position);
    assert_eq!(matching[0].department, policy.department);
}

#[test]
fn zero_candidates_leave_a_forest_beside_the_injected_root() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[("이름", "이부장"), ("직책", "부장")]),
        row(&[("이름", "김부장"), ("직책", "부장")]),
        row(&[("이름", "최과장"), ("직책", "과장"), ("상위자", "이부장")]),
    ];

    import(&mut service, rows).unwrap();

    // The canonical root is injected alongside the manager-less rows, not
    // above them.
    assert_eq!(service.people().len(), 4);
    assert!(service.is_root(&service.people()[0]));
    let top_level = service
        .people()
        .iter()
        .filter(|person| person.is_top_level())
        .count();
    assert_eq!(top_level, 3);
}

#[test]
fn nameless_rows_are_skipped() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[("직책", "과장"), ("부서", "개발팀")]),
        row(&[("이름", "  "), ("직책", "대리")]),
        row(&[("이름", "이과장"), ("직책", "과장")]),
    ];

    import(&mut service, rows).unwrap();
    assert!(service.people().iter().any(|person| person.name == "이과장"));
    // Skipped rows + injected root only.
    assert_eq!(service.people().len(), 2);
}

#[test]
fn duplicate_names_reject_the_whole_batch() {
    let mut service = ChartService::default();
    service.load_sample();
    let before = service.snapshot();

    let rows = vec![
        row(&[("이름", "김철수"), ("직책", "부장")]),
        row(&[("이름", "김철수"), ("직책", "과장")]),
    ];
    let err = import(&mut service, rows).unwrap_err();
    assert!(matches!(err, ChartServiceError::DuplicateName(name) if name == "김철수"));
    assert_eq!(service.snapshot(), before, "rejected import must not commit");
}

#[test]
fn unknown_manager_rejects_the_whole_batch() {
    let mut service = ChartService::default();
    let before = service.snapshot();

    let rows = vec![row(&[("이름", "김철수"), ("상위자", "유령")])];
    let err = import(&mut service, rows).unwrap_err();
    assert!(matches!(err, ChartServiceError::UnknownManager(manager) if manager == "유령"));
    assert_eq!(service.snapshot(), before);
}

#[test]
fn managerial_cycles_reject_the_whole_batch() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[("이름", "A"), ("상위자", "B")]),
        row(&[("이름", "B"), ("상위자", "A")]),
    ];
    let err = import(&mut service, rows).unwrap_err();
    assert!(matches!(err, ChartServiceError::CycleDetected { .. }));
    assert_eq!(service.people().len(), 1);
}
