// File: crates/dashboard-render-skia/tests/document.rs
// Purpose: SkiaDocument writes decodable PNGs per widget and cleans them up on removal.

use dashboard_core::{ChartSpec, Document, DrawOptions, WidgetDescription, WidgetId};
use dashboard_render_skia::{RenderError, RenderOptions, SkiaDocument};
use serde_json::json;

fn widget(n: u64, title: &str, spec: ChartSpec) -> WidgetDescription {
    WidgetDescription { id: WidgetId::from_seq(n), title: title.into(), spec }
}

fn deterministic() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn draws_bar_and_pie_widgets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut doc = SkiaDocument::new(dir.path().join("charts"), deterministic());

    let bar = widget(
        1,
        "Sales by Region",
        ChartSpec::new(json!([{"type": "bar", "x": ["N", "S", "E"], "y": [3, 5, 2]}]), json!({})),
    );
    let pie = widget(
        2,
        "Distribution of Category",
        ChartSpec::new(json!([{"type": "pie", "labels": ["a", "b"], "values": [1, 3]}]), json!({})),
    );
    for w in [&bar, &pie] {
        doc.mount_widget(w).expect("mount");
        doc.draw_chart(&w.id, &w.spec, DrawOptions::default()).expect("draw");
    }

    let path = doc.widget_path(&bar.id);
    assert!(path.ends_with("chart-1.png"));
    let img = image::open(&path).expect("decode bar").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 480));
    // corner is background (white, opaque)
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);

    let pie_img = image::open(doc.widget_path(&pie.id)).expect("decode pie").to_rgba8();
    // centre of the plot area is covered by a slice
    let (cx, cy) = ((72 + 800 - 24) / 2, (48 + 480 - 56) / 2);
    assert_ne!(pie_img.get_pixel(cx, cy).0, [255, 255, 255, 255]);

    doc.remove_widget(&bar.id);
    assert!(!path.exists());
    // second removal is a no-op
    doc.remove_widget(&bar.id);
}

#[test]
fn fixed_size_draw_uses_layout_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut doc = SkiaDocument::new(dir.path(), deterministic());
    let w = widget(
        1,
        "Revenue over Date",
        ChartSpec::new(
            json!([{"type": "scatter", "mode": "lines", "x": [1, 2, 3], "y": [2, 1, 3]}]),
            json!({"width": 320, "height": 200}),
        ),
    );
    doc.mount_widget(&w).unwrap();
    doc.draw_chart(&w.id, &w.spec, DrawOptions { responsive: false }).unwrap();
    let img = image::open(doc.widget_path(&w.id)).unwrap();
    assert_eq!((img.width(), img.height()), (320, 200));
}

#[test]
fn drawing_unmounted_widget_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut doc = SkiaDocument::new(dir.path(), deterministic());
    let err = doc
        .draw_chart(&WidgetId::from("chart-9"), &ChartSpec::default(), DrawOptions::default())
        .unwrap_err();
    assert!(matches!(err, RenderError::NotMounted(id) if id == "chart-9"));
}
