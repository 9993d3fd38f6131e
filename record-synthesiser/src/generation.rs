use common_utils::parsing_utils::{Record, RecordConfig, RecordDuration};
use rand::Rng;
use rand_distr::Uniform;

// Draws a model uniformly from RecordConfig::MODELS together with a uniform score and duration.
pub(crate) fn generate_record<T: Rng>(rng: &mut T) -> Record {
    let model = RecordConfig::MODELS[rng.gen_range(0..RecordConfig::MODELS.len())];
    let distr = Uniform::new_inclusive(RecordConfig::MIN_VALUE, RecordConfig::MAX_VALUE);
    Record {
        model: model.to_string(),
        score: rng.sample(distr),
        duration: RecordDuration(rng.sample(distr)),
    }
}
