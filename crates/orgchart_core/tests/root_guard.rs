use orgchart_core::{
    ChartService, ChartServiceError, FieldAliases, ImportRow, Person, PersonDraft, RootPolicy,
};

fn draft(name: &str, position: &str, department: &str, manager: &str) -> PersonDraft {
    PersonDraft::new(name, position, "", department, manager)
}

fn row(cells: &[(&str, &str)]) -> ImportRow {
    cells
        .iter()
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect()
}

fn root_of<'a>(service: &'a ChartService) -> &'a Person {
    service
        .people()
        .iter()
        .find(|person| service.is_root(person))
        .expect("root should always exist")
}

#[test]
fn new_service_seeds_the_canonical_root() {
    let service = ChartService::default();
    assert_eq!(service.people().len(), 1);

    let policy = service.policy().clone();
    let root = root_of(&service);
    assert_eq!(root.name, policy.name);
    assert_eq!(root.position, policy.position);
    assert_eq!(root.task, policy.task);
    assert_eq!(root.department, policy.department);
    assert!(root.is_top_level());
}

#[test]
fn guard_is_idempotent() {
    let mut service = ChartService::default();
    service
        .add_person(draft("김부장", "부장", "개발팀", "강필구"))
        .unwrap();

    service.ensure_root_exists();
    service.enforce_root_defaults();
    let once = service.snapshot();

    service.ensure_root_exists();
    service.enforce_root_defaults();
    assert_eq!(service.snapshot(), once);
}

#[test]
fn root_stays_unique_and_canonical_across_operations() {
    let mut service = ChartService::default();
    let policy = service.policy().clone();

    service
        .add_person(draft("김부장", "부장", "개발팀", "강필구"))
        .unwrap();
    service
        .add_person(draft("이과장", "과장", "개발팀", "김부장"))
        .unwrap();
    let kim_id = service
        .people()
        .iter()
        .find(|person| person.name == "김부장")
        .unwrap()
        .id;
    service.delete_person(kim_id).unwrap();

    let roots: Vec<&Person> = service
        .people()
        .iter()
        .filter(|person| policy.is_root(person))
        .collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].position, policy.position);
    assert!(roots[0].is_top_level());
}

#[test]
fn edit_and_delete_of_root_are_rejected() {
    let mut service = ChartService::default();
    let root_id = root_of(&service).id;

    let err = service
        .edit_person(root_id, draft("다른이름", "사원", "개발팀", ""))
        .unwrap_err();
    assert!(matches!(err, ChartServiceError::ProtectedRecord(id) if id == root_id));

    let err = service.delete_person(root_id).unwrap_err();
    assert!(matches!(err, ChartServiceError::ProtectedRecord(id) if id == root_id));
    assert_eq!(service.people().len(), 1);
}

#[test]
fn restore_repairs_a_tampered_root() {
    let mut service = ChartService::default();
    service
        .add_person(draft("김부장", "부장", "개발팀", "강필구"))
        .unwrap();

    let mut snapshot = service.snapshot();
    let policy = service.policy().clone();
    let tampered = snapshot
        .iter_mut()
        .find(|person| policy.is_root(person))
        .unwrap();
    tampered.position = "인턴".to_string();
    tampered.department = "외부".to_string();
    tampered.manager = "김부장".to_string();

    service.restore(snapshot);

    let root = root_of(&service);
    assert_eq!(root.position, policy.position);
    assert_eq!(root.department, policy.department);
    assert!(root.is_top_level());
}

#[test]
fn restore_of_empty_snapshot_reinjects_the_root() {
    let mut service = ChartService::default();
    service.restore(Vec::new());
    assert_eq!(service.people().len(), 1);
    assert!(service.is_root(&service.people()[0]));
}

#[test]
fn clear_all_keeps_only_the_root() {
    let mut service = ChartService::default();
    service.load_sample();
    assert!(service.people().len() > 1);

    service.clear_all();
    assert_eq!(service.people().len(), 1);
    assert!(service.is_root(&service.people()[0]));
}

#[test]
fn import_naming_a_foreign_ceo_keeps_the_canonical_root() {
    let mut service = ChartService::default();
    let rows = vec![
        row(&[("Name", "John"), ("Position", "CEO"), ("Department", "HQ")]),
        row(&[("Name", "Mary"), ("Position", "Engineer"), ("Manager", "John")]),
    ];

    service.import_rows(&rows, &FieldAliases::default()).unwrap();

    let policy = service.policy().clone();
    let roots: Vec<&Person> = service
        .people()
        .iter()
        .filter(|person| policy.is_root(person))
        .collect();
    assert_eq!(roots.len(), 1, "exactly one canonical root");
    assert_eq!(roots[0].position, policy.position);

    // The foreign chief keeps the title but stays an ordinary record
    // alongside the injected root.
    let john = service
        .people()
        .iter()
        .find(|person| person.name == "John")
        .unwrap();
    assert!(john.is_top_level());
    assert_eq!(john.position, "CEO");
}

#[test]
fn root_is_sorted_first_in_list_output() {
    let mut service = ChartService::default();
    service.restore(vec![
        Person::new("김부장", "부장", "", "개발팀", ""),
        RootPolicy::default().canonical_root(),
    ]);

    let listed = service.people_root_first();
    assert!(service.is_root(listed[0]));
    assert_eq!(listed[1].name, "김부장");
}
