//! Validation for loaded tuning values.

use std::collections::HashSet;

use super::data::TuningFile;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a strictly positive value
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: $field.to_string(),
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = file.movement.validate() {
        errors.push(ValidationError {
            section: "movement",
            field: "*".to_string(),
            message: e.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for def in &file.vehicles {
        let field = format!("{}", def.kind);
        if !seen.insert(def.kind) {
            errors.push(ValidationError {
                section: "vehicles",
                field: field.clone(),
                message: "duplicate definition".to_string(),
            });
        }
        check_positive!(errors, "vehicles", format!("{field}.speed_multiplier"), def.speed_multiplier);
        check_positive!(errors, "vehicles", format!("{field}.jump_multiplier"), def.jump_multiplier);
        if !(def.special_ability_cooldown.is_finite() && def.special_ability_cooldown >= 0.0) {
            errors.push(ValidationError {
                section: "vehicles",
                field: format!("{field}.special_ability_cooldown"),
                message: format!("must be non-negative, got {}", def.special_ability_cooldown),
            });
        }
    }

    if file.collection.checked_total().is_none() {
        errors.push(ValidationError {
            section: "collection",
            field: "*".to_string(),
            message: format!(
                "targets sum past {}: {:?}",
                u32::MAX,
                file.collection
            ),
        });
    }

    errors
}
