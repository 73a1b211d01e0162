//! Texture sets need unique keys and two paths each, and `active` must name
//! one of them.

use std::collections::HashSet;

use crate::schema::LenticularConfig;

use super::helpers::Report;

pub(crate) fn check_textures(report: &mut Report, config: &LenticularConfig) {
    let textures = &config.textures;
    if textures.sets.is_empty() {
        report.push("textures.sets must define at least one set");
        return;
    }

    let mut keys = HashSet::new();
    for (i, set) in textures.sets.iter().enumerate() {
        let field = |name: &str| format!("textures.sets[{i}].{name}");
        if set.key.trim().is_empty() {
            report.push(format!("{} must not be empty", field("key")));
        } else if !keys.insert(set.key.as_str()) {
            report.push(format!("{} '{}' is duplicated", field("key"), set.key));
        }
        for (name, path) in [("texture_a", &set.texture_a), ("texture_b", &set.texture_b)] {
            if path.trim().is_empty() {
                report.push(format!("{} must not be empty", field(name)));
            }
        }
    }

    if textures.find(&textures.active).is_none() {
        report.push(format!(
            "textures.active = '{}' does not name a defined set",
            textures.active
        ));
    }
}
