//! Independent variations of one prompt, rendered in parallel

use crate::advisory::service::AdvisoryService;
use crate::engine::synthesizer::{Synthesizer, Texture};
use crate::io::configuration::SynthesisConfig;
use crate::render::Painter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Random source for texture `index`
///
/// With a seed, texture `i` is seeded with `seed + i`; otherwise each texture
/// draws fresh OS entropy.
pub fn rng_for(seed: Option<u64>, index: usize) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |base| {
        StdRng::seed_from_u64(base.wrapping_add(index as u64))
    })
}

/// Generate `config.count` textures for one prompt
///
/// Textures are computed in parallel and returned in index order.
/// `on_complete` is called with each index as its texture finishes, in
/// completion order.
pub fn synthesize_batch<A, P, F>(
    synthesizer: &Synthesizer<A, P>,
    prompt: &str,
    config: &SynthesisConfig,
    on_complete: F,
) -> Vec<Texture>
where
    A: AdvisoryService,
    P: Painter,
    F: Fn(usize) + Sync,
{
    (0..config.count)
        .into_par_iter()
        .map(|index| {
            let mut rng = rng_for(config.seed, index);
            let texture =
                synthesizer.synthesize_with_rng(prompt, config.width, config.height, &mut rng);
            on_complete(index);
            texture
        })
        .collect()
}
