//! Text rendering of layout snapshots for the terminal.

use orbit_types::error::Result;
use orbit_ui::{ActiveFace, LayoutSnapshot};

/// One-line summary: `[b@0,28] [F@80,18] ...` (`left,top`), hidden items as `[ ]`.
pub fn describe(snapshot: &LayoutSnapshot) -> String {
    let cells: Vec<String> = snapshot
        .items
        .iter()
        .map(|p| match p.face {
            Some(ActiveFace::Front) => format!("[F@{},{}]", p.left, p.top),
            Some(ActiveFace::Back) => format!("[b@{},{}]", p.left, p.top),
            None => "[ ]".to_string(),
        })
        .collect();
    let selection = snapshot
        .selection
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    format!(
        "sel={selection} spacing={} anchor={} {}",
        snapshot.spacing,
        snapshot.scroll_anchor,
        cells.join(" ")
    )
}

/// One JSON line per snapshot.
pub fn to_json(snapshot: &LayoutSnapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_ui::ItemPlacement;

    fn placement(index: usize, face: Option<ActiveFace>, left: i32, top: i32) -> ItemPlacement {
        ItemPlacement {
            index,
            face,
            left,
            top,
            width: 0,
            height: 0,
        }
    }

    #[test]
    fn describes_faces_and_hidden_items() {
        let snap = LayoutSnapshot {
            selection: Some(1),
            spacing: 0,
            scroll_anchor: 0,
            width: 300,
            height: 96,
            items: vec![
                placement(0, Some(ActiveFace::Back), 0, 28),
                placement(1, Some(ActiveFace::Front), 80, 18),
                placement(2, None, 0, 0),
            ],
        };
        assert_eq!(
            describe(&snap),
            "sel=1 spacing=0 anchor=0 [b@0,28] [F@80,18] [ ]"
        );
    }

    #[test]
    fn json_line_has_faces_and_selection() {
        let snap = LayoutSnapshot {
            selection: Some(0),
            spacing: 10,
            scroll_anchor: 0,
            width: 300,
            height: 96,
            items: vec![placement(0, Some(ActiveFace::Front), 0, 18)],
        };
        let json = to_json(&snap).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"selection\":0"));
        assert!(json.contains("\"face\":\"front\""));
    }

    #[test]
    fn describes_empty() {
        let snap = LayoutSnapshot {
            selection: None,
            spacing: 10,
            scroll_anchor: 0,
            width: 300,
            height: 96,
            items: Vec::new(),
        };
        assert_eq!(describe(&snap), "sel=- spacing=10 anchor=0 ");
    }
}
