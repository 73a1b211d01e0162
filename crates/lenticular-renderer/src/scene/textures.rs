//! Assignment of configured texture sets to slices.

use lenticular_common::{LenticularError, Result, SliceTexturePair};
use lenticular_config::schema::{TextureSetConfig, TexturesConfig};

/// One texture pair per slice, round-robin over the configured sets starting
/// at the active one. `resolve` turns a set's paths into texture handles.
pub fn pairs_from_config<F>(
    textures: &TexturesConfig,
    slice_count: usize,
    mut resolve: F,
) -> Result<Vec<SliceTexturePair>>
where
    F: FnMut(&TextureSetConfig) -> SliceTexturePair,
{
    let sets = textures.rotated_from_active();
    if sets.is_empty() {
        return Err(LenticularError::Configuration(
            "no texture sets configured".into(),
        ));
    }
    Ok((0..slice_count)
        .map(|i| resolve(sets[i % sets.len()]))
        .collect())
}
