// Editor and report driven end to end over SQLite

mod common;

use common::{seeded_store, store_with};
use realtydb_core::render::render_report;
use realtydb_core::{CellValue, Confirmed, Editor, MatchMode, SortOrder, TabularStore};

#[test]
fn test_editor_opens_seeded_tabs() {
    let editor = Editor::open(seeded_store(), MatchMode::WholeRow).unwrap();

    let names: Vec<&str> = editor.tabs().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Client", "Realtor", "Contract", "Property", "Viewing"]);
    assert!(editor.tabs().iter().all(|t| t.rows().len() == 2));
}

#[test]
fn test_add_edit_delete_round() {
    let mut editor = Editor::open(seeded_store(), MatchMode::WholeRow).unwrap();
    editor.select_table("Realtor").unwrap();

    editor.begin_add().unwrap();
    {
        let form = editor.form_mut().unwrap();
        form.set_value(0, "3");
        form.set_value(1, "Олег Орлов");
    }
    assert_eq!(editor.confirm().unwrap(), Confirmed::Inserted(1));

    editor.select_row(2);
    assert!(editor.begin_edit().unwrap().is_none());
    editor.form_mut().unwrap().set_value(1, "Олег Орлов-младший");
    assert_eq!(editor.confirm().unwrap(), Confirmed::Updated(1));
    assert_eq!(
        editor.active_tab().unwrap().rows()[2].values[1],
        CellValue::from("Олег Орлов-младший")
    );

    editor.select_row(0);
    assert!(editor.request_delete().unwrap().is_none());
    assert_eq!(editor.confirm().unwrap(), Confirmed::Deleted(1));

    let store = editor.into_store();
    let ids: Vec<CellValue> = store
        .list_rows("Realtor", None)
        .unwrap()
        .into_iter()
        .map(|r| r.values[0].clone())
        .collect();
    assert_eq!(ids, vec![CellValue::Integer(2), CellValue::Integer(3)]);
}

#[test]
fn test_primary_key_mode_edit() {
    let mut editor = Editor::open(seeded_store(), MatchMode::PrimaryKey).unwrap();
    editor.select_table("Property").unwrap();

    editor.select_row(0);
    editor.begin_edit().unwrap();
    editor.form_mut().unwrap().set_value(1, "Дом с садом");
    assert_eq!(editor.confirm().unwrap(), Confirmed::Updated(1));
    assert_eq!(
        editor.active_tab().unwrap().rows()[0].values[1],
        CellValue::from("Дом с садом")
    );
}

#[test]
fn test_sort_then_refresh_restores_natural_order() {
    let mut editor = Editor::open(seeded_store(), MatchMode::WholeRow).unwrap();
    editor.select_table("Property").unwrap();

    assert_eq!(editor.sort_by_column(2).unwrap(), SortOrder::Ascending);
    assert_eq!(
        editor.active_tab().unwrap().rows()[0].values[0],
        CellValue::Integer(2)
    );

    editor.refresh().unwrap();
    assert!(editor.active_tab().unwrap().sort().is_none());
    assert_eq!(
        editor.active_tab().unwrap().rows()[0].values[0],
        CellValue::Integer(1)
    );
}

#[test]
fn test_search_matches_integer_cells_as_text() {
    let mut editor = Editor::open(seeded_store(), MatchMode::WholeRow).unwrap();
    editor.select_table("Client").unwrap();

    assert_eq!(editor.search("987"), 1);
    assert_eq!(editor.active_tab().unwrap().selected_indices(), vec![1]);
    assert_eq!(editor.search("ИВАН"), 1);
}

#[test]
fn test_report_over_seeded_store() {
    let (text, summary) = render_report(&seeded_store()).unwrap();

    assert!(text.starts_with(
        "Table: Client\n\tColumns: ClientID, FullName, PhoneNumber, Address\n\tData:\n\t\t1, Иван Иванов, 1234567890, ул. Главная, д. 1\n"
    ));
    assert!(text.ends_with("\t\t2, 2, 2, 2022-04-20\n\nRow count: 2\n\n"));
    assert_eq!(summary.tables, 5);
    assert_eq!(summary.rows, 10);
}

#[test]
fn test_edit_leaves_untouched_null_cells_null() {
    let mut store = seeded_store();
    store
        .connection()
        .execute("INSERT INTO Client VALUES (3, 'Олег', NULL, NULL)", [])
        .unwrap();
    let mut editor = Editor::open(store, MatchMode::WholeRow).unwrap();

    editor.select_row(2);
    assert!(editor.begin_edit().unwrap().is_none());
    editor.form_mut().unwrap().set_value(1, "Олег Орлов");
    assert_eq!(editor.confirm().unwrap(), Confirmed::Updated(1));

    let row = editor.store().list_rows("Client", None).unwrap()[2].clone();
    assert_eq!(
        row.values,
        vec![
            CellValue::Integer(3),
            CellValue::from("Олег Орлов"),
            CellValue::Null,
            CellValue::Null,
        ]
    );
}

#[test]
fn test_unchanged_edit_keeps_blob_cell() {
    let store = store_with(
        "CREATE TABLE Attachment (Id INT PRIMARY KEY, Data BLOB);
         INSERT INTO Attachment VALUES (1, x'0aff');",
    );
    let mut editor = Editor::open(store, MatchMode::PrimaryKey).unwrap();

    editor.select_row(0);
    editor.begin_edit().unwrap();
    assert_eq!(editor.confirm().unwrap(), Confirmed::Updated(1));

    let row = editor.store().list_rows("Attachment", None).unwrap()[0].clone();
    assert_eq!(row.values[1], CellValue::Blob(vec![0x0a, 0xff]));
}
