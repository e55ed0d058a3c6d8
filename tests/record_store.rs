// tests/record_store.rs
use etf_view::{
    data::RecordStore,
    error::Error,
    record::{Field, Record},
};

fn rec(code: &str, name: &str) -> Record {
    Record { code: code.into(), name: name.into(), ..Record::default() }
}

fn codes(store: &RecordStore) -> Vec<&str> {
    store.records().iter().map(|r| r.code.as_str()).collect()
}

fn abc() -> RecordStore {
    RecordStore::from_records(vec![rec("A", "a"), rec("B", "b"), rec("C", "c")])
}

#[test]
fn delete_positions_in_any_order() {
    let mut fwd = abc();
    assert_eq!(fwd.delete(&[0, 2]), 2);
    assert_eq!(codes(&fwd), ["B"]);

    let mut rev = abc();
    assert_eq!(rev.delete(&[2, 0]), 2);
    assert_eq!(codes(&rev), ["B"]);
}

#[test]
fn delete_nothing_is_a_no_op() {
    let mut store = abc();
    assert_eq!(store.delete(&[]), 0);
    assert_eq!(codes(&store), ["A", "B", "C"]);
}

#[test]
fn append_allows_duplicates_and_returns_position() {
    let mut store = RecordStore::new();
    assert_eq!(store.append(rec("069500", "x")), 0);
    assert_eq!(store.append(rec("069500", "x")), 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.schema(), Some(&Field::ALL[..]));
}

#[test]
fn columns_before_first_record_are_the_field_order() {
    let store = RecordStore::new();
    assert!(store.schema().is_none());
    assert_eq!(store.columns(), &Field::ALL[..]);
}

#[test]
fn refetch_replaces_each_row_by_code_and_commits_each() {
    let mut store = abc();
    let mut commits = Vec::new();

    let n = store
        .replace_all_by_refetch(
            |_, code| Ok(rec(code, &format!("{code} today"))),
            |s| {
                commits.push(s.records().iter().filter(|r| r.name.ends_with("today")).count());
                Ok(())
            },
        )
        .unwrap();

    assert_eq!(n, 3);
    assert_eq!(codes(&store), ["A", "B", "C"]);
    assert!(store.records().iter().all(|r| r.name.ends_with("today")));
    assert_eq!(commits, [1, 2, 3]);
}

#[test]
fn refetch_stops_at_first_failure_keeping_earlier_rows() {
    let mut store = abc();
    let err = store
        .replace_all_by_refetch(
            |pos, code| {
                if pos == 1 {
                    Err(Error::Extraction { url: code.into(), source: etf_view::error::ExtractError::EmptyCode })
                } else {
                    Ok(rec(code, "new"))
                }
            },
            |_| Ok(()),
        )
        .unwrap_err();

    match err {
        Error::PartialUpdate { position, updated, .. } => {
            assert_eq!(position, 1);
            assert_eq!(updated, 1);
        }
        other => panic!("expected PartialUpdate, got {other:?}"),
    }
    let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["new", "b", "c"]);
}

#[test]
fn refetch_on_empty_table_does_nothing() {
    let mut store = RecordStore::new();
    let n = store.replace_all_by_refetch(|_, _| unreachable!(), |_| unreachable!()).unwrap();
    assert_eq!(n, 0);
}

#[test]
fn clear_input_only_leaves_records() {
    let store = abc();
    let mut input = String::from("https://finance.naver.com/item/main.naver?code=069500");
    store.clear_input_only(&mut input);
    assert!(input.is_empty());
    assert_eq!(codes(&store), ["A", "B", "C"]);
}

#[test]
fn set_field_changes_one_cell() {
    let mut store = abc();
    assert!(store.set_field(1, Field::Fee, "0.05%"));
    assert_eq!(store.get(1).unwrap().fee, "0.05%");
    assert_eq!(store.get(0).unwrap().fee, "");
}
