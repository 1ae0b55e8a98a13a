//! Duty catalog service (built-in presets + caller-supplied entries)

use crate::error::{AppError, AppResult};
use crate::models::duty::{is_clock_time, DutyCatalog, DutyKind, DutyTemplate};

#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// The duty templates shipped with the server
    pub fn presets(&self) -> Vec<DutyTemplate> {
        builtin_presets()
    }

    /// Build the id-keyed lookup catalog from caller-supplied templates,
    /// preserving order. A duplicate id replaces the earlier entry.
    pub fn catalog_from(&self, entries: &[DutyTemplate]) -> DutyCatalog {
        entries
            .iter()
            .cloned()
            .map(|template| (template.id.clone(), template))
            .collect()
    }

    /// Strict template checks applied at the API boundary. The engine stays
    /// lenient; only submitted catalogs are held to the full shape.
    pub fn check_templates(&self, entries: &[DutyTemplate]) -> AppResult<()> {
        use validator::Validate;
        for template in entries {
            template
                .validate()
                .map_err(|e| AppError::Validation(format!("Template '{}': {}", template.id, e)))?;
            for time in [&template.start_time, &template.end_time].into_iter().flatten() {
                if !is_clock_time(time) {
                    return Err(AppError::Validation(format!(
                        "Template '{}': invalid clock time '{}'",
                        template.id, time
                    )));
                }
            }
        }
        Ok(())
    }
}

fn preset(
    id: &str,
    code: &str,
    name: &str,
    kind: DutyKind,
    times: Option<(&str, &str)>,
) -> DutyTemplate {
    DutyTemplate {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        kind,
        start_time: times.map(|(s, _)| s.to_string()),
        end_time: times.map(|(_, e)| e.to_string()),
    }
}

/// Built-in duty presets. "例" and "休" are the designated weekly rest types
/// the quota rules look for.
pub fn builtin_presets() -> Vec<DutyTemplate> {
    vec![
        preset("recess", "例", "Recess Day", DutyKind::Recess, None),
        preset("rest", "休", "Rest Day", DutyKind::RestDay, None),
        preset("early", "早", "Early Flight", DutyKind::Flight, Some(("06:10", "13:40"))),
        preset("late", "晚", "Late Flight", DutyKind::Flight, Some(("13:10", "22:35"))),
        preset("red-eye", "紅", "Red-eye Flight", DutyKind::Flight, Some(("22:30", "06:50"))),
        preset("office", "辦", "Office Duty", DutyKind::Ground, Some(("09:00", "17:30"))),
        preset("standby", "待", "Standby", DutyKind::Ground, None),
        preset("training", "訓", "Ground Training", DutyKind::Ground, Some(("08:30", "16:30"))),
    ]
}
