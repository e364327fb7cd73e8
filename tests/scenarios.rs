//! End-to-end checks of pagination, layout, project loading and rendering.
//!
//! Run with: RUST_LOG=spinelab=trace cargo test --features tracing --test scenarios -- --nocapture

use chrono::{TimeZone, Utc};
use spinelab::geometry::available_area;
use spinelab::layout::{SheetGeometry, layout_document, layout_page, pages};
use spinelab::model::{IconEdit, IconKind, MAX_IMAGE_BYTES};
use spinelab::types::Mm;
use spinelab::{
    Applied, Command, Editor, EditorError, IconError, Label, LabelEdit, MemoryStore, PrintMargins,
    Project, ProjectStore, RenderMode,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn labels(n: usize) -> Vec<Label> {
    (0..n).map(|_| Label::new()).collect()
}

fn close(a: Mm, b: f64) -> bool {
    (a.raw() - b).abs() < 1e-9
}

// ==================== layout ====================

#[test]
fn empty_project_has_one_empty_page() {
    init_tracing();
    let none = labels(0);
    let doc = layout_document(&none, &PrintMargins::default());
    assert_eq!(doc.len(), 1);
    assert!(doc[0].placements.is_empty());
    assert_eq!(pages(&none).len(), 1);
}

#[test]
fn five_labels_fill_one_page_with_even_gaps() {
    init_tracing();
    let five = labels(5);
    let placements = layout_page(&five, &PrintMargins::default());
    let g = (297.0 - 20.0 - 270.0) / 4.0;
    assert_eq!(g, 1.75);
    for (k, p) in placements.iter().enumerate() {
        assert!(close(p.rect.origin.y, 10.0 + k as f64 * (54.0 + g)), "slot {k}");
        assert!(close(p.rect.origin.x, 10.0));
        assert!(close(p.rect.size.w, 190.0));
        assert!(close(p.rect.size.h, 54.0));
    }
}

#[test]
fn seven_labels_split_five_and_two() {
    let seven = labels(7);
    let doc = layout_document(&seven, &PrintMargins::default());
    assert_eq!(doc.len(), 2);
    assert_eq!(doc[0].placements.len(), 5);
    assert_eq!(doc[1].placements.len(), 2);

    let flat: Vec<_> = doc.iter().flat_map(|p| p.placements.iter().map(|pl| pl.label.id.clone())).collect();
    let original: Vec<_> = seven.iter().map(|l| l.id.clone()).collect();
    assert_eq!(flat, original);
}

#[test]
fn gap_depends_only_on_margins() {
    let margins = PrintMargins { top: Mm(3.0), right: Mm(0.0), bottom: Mm(7.0), left: Mm(25.0) };
    let geometry = SheetGeometry::compute(&margins);
    let area = available_area(&margins);
    assert!(close(geometry.gap, (area.h.raw() - 5.0 * 54.0) / 4.0));
    assert!(close(geometry.x, 25.0));

    for k in 1..=5 {
        let page = labels(k);
        let placements = layout_page(&page, &margins);
        assert!(close(placements[k - 1].rect.origin.y, geometry.slot_y(k - 1).raw()));
    }
}

// ==================== projects ====================

#[test]
fn legacy_project_without_rotation_loads_with_zero() {
    init_tracing();
    let src = r##"{
      "version": "1.0.0",
      "name": "Altbestand",
      "createdAt": "2024-01-02T08:00:00Z",
      "updatedAt": "2024-01-02T08:00:00Z",
      "labels": [{
        "id": "legacy-1",
        "header": {"text": "Steuer", "fontFamily": "Inter", "fontSize": 16, "fontWeight": "bold",
                   "fontStyle": "normal", "color": "#000000", "textAlign": "center", "orientation": "vertical"},
        "divider": {"visible": true, "color": "#000000", "thickness": 1, "height": 100,
                    "verticalPosition": 50, "horizontalPosition": 40, "style": "solid",
                    "marginTop": 3, "marginBottom": 3},
        "body": {"text": "2019", "fontFamily": "Inter", "fontSize": 12, "fontWeight": "normal",
                 "fontStyle": "normal", "color": "#000000", "textAlign": "center", "orientation": "vertical"},
        "backgroundColor": "#ffffff"
      }],
      "printMargins": {"top": 8, "right": 10, "bottom": 10, "left": 10}
    }"##;
    let project = Project::from_json(src).unwrap();
    assert_eq!(project.labels[0].header.rotation, spinelab::types::Rotation::Deg0);
    assert_eq!(project.print_margins.map(|m| m.top), Some(Mm(8.0)));

    let mut editor = Editor::new();
    editor.apply(Command::LoadProject(Box::new(project))).unwrap();
    assert_eq!(editor.labels().len(), 1);
    assert_eq!(editor.labels().labels()[0].body.text, "2019");
}

#[test]
fn editor_state_survives_an_autosave_round_trip() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let mut editor = Editor::new();
    for template in ["classic", "business", "archive"] {
        editor.apply(Command::AddFromTemplate(template.into())).unwrap();
    }
    editor.apply(Command::SetMargins(PrintMargins::uniform(Mm(6.5)))).unwrap();

    let mut store = MemoryStore::new();
    store.save(&editor.autosave(now)).unwrap();

    let mut restored = Editor::new();
    let project = store.load().unwrap().unwrap();
    restored.apply(Command::LoadProject(Box::new(project))).unwrap();
    assert_eq!(restored.labels(), editor.labels());
    assert_eq!(restored.margins(), editor.margins());
}

// ==================== icons ====================

#[test]
fn oversized_image_is_rejected_and_icon_kept() {
    init_tracing();
    let mut editor = Editor::new();
    editor.apply(Command::AddLabel).unwrap();
    let id = editor.labels().labels()[0].id.clone();
    editor
        .apply(Command::Edit { id: id.clone(), edit: LabelEdit::Icon(IconEdit::Symbol("📁".into())) })
        .unwrap();
    let before = editor.clone();

    let err = editor
        .apply(Command::AttachImage { id: id.clone(), bytes: vec![0; 600 * 1024], media_type: "image/png".into() })
        .unwrap_err();
    assert!(matches!(
        err,
        EditorError::Icon(IconError::ImageTooLarge { size: 614_400, limit }) if limit == MAX_IMAGE_BYTES
    ));
    assert_eq!(editor, before);

    let applied = editor
        .apply(Command::AttachImage { id, bytes: b"\x89PNG\r\n".to_vec(), media_type: "image/png".into() })
        .unwrap();
    assert_eq!(applied, Applied::Changed);
    let icon = editor.labels().labels()[0].icon.as_ref().unwrap();
    assert_eq!(icon.kind, IconKind::Image);
    assert!(icon.value.starts_with("data:image/png;base64,"));
}

// ==================== rendering ====================

#[test]
fn print_and_preview_place_labels_identically() {
    let mut editor = Editor::new();
    editor.apply(Command::AddFromTemplate("colorful".into())).unwrap();
    let margins = *editor.margins();

    let print = spinelab::sheet_svg(editor.page_labels(), &margins, RenderMode::Print).unwrap();
    let preview = spinelab::sheet_svg(editor.page_labels(), &margins, RenderMode::Preview { zoom: 1.0 }).unwrap();

    assert!(print.contains(r#"<rect x="10" y="10" width="190" height="54""#));
    // 10 mm at 3.78 px/mm
    assert!(preview.contains(r#"<rect x="37.8" y="37.8" width="718.2" height="204.12""#));
}

#[test]
fn whole_document_renders_one_sheet_per_page() {
    let sheets = spinelab::document_svgs(&labels(11), &PrintMargins::default()).unwrap();
    assert_eq!(sheets.len(), 3);
    for sheet in &sheets {
        assert!(sheet.contains(r#"width="210mm" height="297mm""#));
    }
}

#[test]
fn calibration_sheet_reports_current_margins() {
    let margins = PrintMargins { top: Mm(12.0), right: Mm(8.0), bottom: Mm(15.0), left: Mm(9.5) };
    let svg = spinelab::calibration_svg(&margins).unwrap();
    assert!(svg.contains("Ränder: Oben 12mm, Rechts 8mm, Unten 15mm, Links 9.5mm"));
    assert!(svg.contains("Druckbereich: 192.5mm × 270mm"));
}
