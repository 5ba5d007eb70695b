use crate::field::{FieldId, OptionId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of fresh field and option identifiers.
///
/// Generators only need to make collisions unlikely; the reducers re-draw an
/// id that is already taken in the current state.
pub trait IdGenerator: Send {
    fn field_id(&mut self) -> FieldId;
    fn option_id(&mut self) -> OptionId;
}

/// Random hexadecimal tokens drawn from a non-cryptographic generator.
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible generator, for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn token(&mut self) -> String {
        format!("{:016x}", self.rng.random::<u64>())
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn field_id(&mut self) -> FieldId {
        FieldId::new(self.token())
    }

    fn option_id(&mut self) -> OptionId {
        OptionId::new(self.token())
    }
}

/// Counter-based ids: `field-1`, `field-2`, … and `option-1`, `option-2`, …
///
/// Action scripts rely on these to address fields created earlier in the
/// same script.
#[derive(Debug, Default)]
pub struct SequentialIds {
    fields: u64,
    options: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn field_id(&mut self) -> FieldId {
        self.fields += 1;
        FieldId::new(format!("field-{}", self.fields))
    }

    fn option_id(&mut self) -> OptionId {
        self.options += 1;
        OptionId::new(format!("option-{}", self.options))
    }
}
