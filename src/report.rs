//! Per-frame check results and their text/JSON rendering.

use std::path::PathBuf;

use serde::Serialize;

use crate::checks::{check_all, FrameClass, FrameProperties, FrameProperty};
use crate::model::LoadedFrame;
use crate::{FrameError, Result};

/// Check results for one loaded frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub name: String,
    pub path: PathBuf,
    /// Slot count, holes included.
    pub size: usize,
    pub present: usize,
    pub edges: usize,
    pub properties: FrameProperties,
    pub class: FrameClass,
}

impl FrameReport {
    pub fn evaluate(loaded: &LoadedFrame) -> Result<Self> {
        let properties = check_all(&loaded.frame)?;
        Ok(Self {
            name: loaded.name.clone(),
            path: loaded.path.clone(),
            size: loaded.frame.len(),
            present: loaded.frame.present_count(),
            edges: loaded.frame.edge_count(),
            properties,
            class: properties.class(),
        })
    }

    /// Properties from `required` this frame lacks, in the given order.
    pub fn missing(&self, required: &[FrameProperty]) -> Vec<FrameProperty> {
        required
            .iter()
            .copied()
            .filter(|property| !self.properties.has(*property))
            .collect()
    }

    pub fn satisfies(&self, required: &[FrameProperty]) -> bool {
        self.missing(required).is_empty()
    }

    /// Whether this frame is a frame for `class` (e.g. S4 needs reflexive
    /// and transitive).
    pub fn admitted_by(&self, class: FrameClass) -> bool {
        class.admits(self.properties)
    }
}

/// Run succeeded.
pub const EXIT_OK: u8 = 0;
/// A frame missed a required property or class.
pub const EXIT_REQUIREMENT_FAILED: u8 = 1;
/// A path or frame file could not be checked in strict mode.
pub const EXIT_UNCHECKED: u8 = 2;

/// Exit status of a `framecheck` run.
///
/// Unchecked paths only matter under `strict`, and then take precedence
/// over failed requirements.
pub fn exit_status(
    reports: &[FrameReport],
    required: &[FrameProperty],
    class: Option<FrameClass>,
    skipped: usize,
    strict: bool,
) -> u8 {
    if strict && skipped > 0 {
        return EXIT_UNCHECKED;
    }

    let failed = reports.iter().any(|report| {
        !report.satisfies(required) || class.is_some_and(|class| !report.admitted_by(class))
    });

    if failed {
        EXIT_REQUIREMENT_FAILED
    } else {
        EXIT_OK
    }
}

fn mark(holds: bool) -> &'static str {
    if holds {
        "yes"
    } else {
        "no"
    }
}

/// Fixed-width table, one row per frame.
pub fn render_text(reports: &[FrameReport], show_class: bool) -> String {
    let mut out = String::new();
    let rule = format!("{:-<72}\n", "");

    out.push_str(&rule);
    out.push_str(&format!(
        "{:<28} {:>6} {:>6} {:>10} {:>10} {:>10}",
        "Frame", "Worlds", "Edges", "Reflexive", "Symmetric", "Transitive"
    ));
    if show_class {
        out.push_str(&format!(" {:>6}", "Class"));
    }
    out.push('\n');
    out.push_str(&rule);

    for report in reports {
        out.push_str(&format!(
            "{:<28} {:>6} {:>6} {:>10} {:>10} {:>10}",
            report.name,
            report.present,
            report.edges,
            mark(report.properties.reflexive),
            mark(report.properties.symmetric),
            mark(report.properties.transitive)
        ));
        if show_class {
            out.push_str(&format!(" {:>6}", report.class));
        }
        out.push('\n');
    }
    out.push_str(&rule);

    out
}

pub fn render_json(reports: &[FrameReport]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| FrameError::Parse(format!("failed to encode report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frame;

    fn loaded(name: &str, size: usize, edges: &[(usize, usize)]) -> LoadedFrame {
        LoadedFrame {
            name: name.to_string(),
            path: PathBuf::from(format!("{}.toml", name)),
            frame: Frame::from_edges(size, edges.iter().copied()).unwrap(),
        }
    }

    #[test]
    fn test_evaluate_counts_and_class() {
        let mut frame = loaded("pair", 3, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        frame.frame.remove_world(2).unwrap();

        let report = FrameReport::evaluate(&frame).unwrap();
        assert_eq!(report.size, 3);
        assert_eq!(report.present, 2);
        assert_eq!(report.edges, 4);
        assert_eq!(report.class, FrameClass::S5);
    }

    #[test]
    fn test_missing_requirements() {
        let report = FrameReport::evaluate(&loaded("chain", 2, &[(0, 1)])).unwrap();
        let required = [FrameProperty::Reflexive, FrameProperty::Transitive];
        assert_eq!(report.missing(&required), vec![FrameProperty::Reflexive]);
        assert!(!report.satisfies(&required));
        assert!(report.satisfies(&[FrameProperty::Transitive]));
        assert!(report.satisfies(&[]));
    }

    #[test]
    fn test_admitted_by_class() {
        let report = FrameReport::evaluate(&loaded("chain", 2, &[(0, 1)])).unwrap();
        assert!(report.admitted_by(FrameClass::K4));
        assert!(report.admitted_by(FrameClass::K));
        assert!(!report.admitted_by(FrameClass::S4));
    }

    #[test]
    fn test_exit_status() {
        let reports = vec![
            FrameReport::evaluate(&loaded("loops", 2, &[(0, 0), (1, 1)])).unwrap(),
            FrameReport::evaluate(&loaded("one-way", 2, &[(0, 1)])).unwrap(),
        ];

        assert_eq!(exit_status(&reports, &[], None, 0, false), EXIT_OK);
        assert_eq!(
            exit_status(&reports, &[FrameProperty::Transitive], None, 0, true),
            EXIT_OK
        );
        assert_eq!(
            exit_status(&reports, &[FrameProperty::Reflexive], None, 0, false),
            EXIT_REQUIREMENT_FAILED
        );
        assert_eq!(
            exit_status(&reports, &[], Some(FrameClass::S4), 0, false),
            EXIT_REQUIREMENT_FAILED
        );
        assert_eq!(
            exit_status(&reports, &[], Some(FrameClass::K4), 0, false),
            EXIT_OK
        );
    }

    #[test]
    fn test_exit_status_unchecked_paths() {
        let reports = vec![FrameReport::evaluate(&loaded("loops", 1, &[(0, 0)])).unwrap()];

        // Without strict, a skipped path does not change the status.
        assert_eq!(exit_status(&reports, &[], None, 1, false), EXIT_OK);
        assert_eq!(exit_status(&reports, &[], None, 1, true), EXIT_UNCHECKED);
        assert_eq!(exit_status(&[], &[], None, 3, true), EXIT_UNCHECKED);

        // Strict failures win over requirement failures, and stay distinct.
        let one_way = vec![FrameReport::evaluate(&loaded("one-way", 2, &[(0, 1)])).unwrap()];
        let required = [FrameProperty::Symmetric];
        assert_eq!(
            exit_status(&one_way, &required, None, 1, true),
            EXIT_UNCHECKED
        );
        assert_eq!(
            exit_status(&one_way, &required, None, 1, false),
            EXIT_REQUIREMENT_FAILED
        );
    }

    #[test]
    fn test_render_text() {
        let reports = vec![
            FrameReport::evaluate(&loaded("loops", 2, &[(0, 0), (1, 1)])).unwrap(),
            FrameReport::evaluate(&loaded("one-way", 2, &[(0, 1)])).unwrap(),
        ];
        let text = render_text(&reports, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Class"));
        assert!(lines[3].starts_with("loops"));
        assert!(lines[3].trim_end().ends_with("S5"));
        assert!(lines[4].starts_with("one-way"));
        assert!(lines[4].trim_end().ends_with("K4"));

        let plain = render_text(&reports, false);
        assert!(!plain.contains("Class"));
    }

    #[test]
    fn test_bundled_sample_frames() {
        let frames_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("frames");
        let files = crate::model::discover_frame_files(&frames_dir).unwrap();
        assert_eq!(files.len(), 3);

        let reports: Vec<FrameReport> = files
            .iter()
            .map(|f| FrameReport::evaluate(&crate::model::load_frame(f).unwrap()).unwrap())
            .collect();
        let class_of = |name: &str| {
            reports
                .iter()
                .find(|r| r.name == name)
                .map(|r| r.class)
                .unwrap()
        };
        assert_eq!(class_of("chain"), FrameClass::K4);
        assert_eq!(class_of("holes"), FrameClass::S5);
        assert_eq!(class_of("s5-pair"), FrameClass::S5);
    }

    #[test]
    fn test_render_json() {
        let reports = vec![FrameReport::evaluate(&loaded("loops", 1, &[(0, 0)])).unwrap()];
        let json = render_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "loops");
        assert_eq!(value[0]["properties"]["reflexive"], true);
        assert_eq!(value[0]["class"], "S5");
    }
}
