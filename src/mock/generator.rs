//! Mock payment generation

use crate::config::GeneratorConfig;
use crate::core::{ConfigError, Payment, PaymentStatus};
use crate::storage::RecordCollection;
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds the fixed backing collection of mock payments
///
/// The random source and the reference instant are passed in, so a seeded
/// [`StdRng`] and a fixed `now` reproduce the same collection every time.
///
/// # Example
///
/// ```rust,ignore
/// let generator = PaymentGenerator::new(GeneratorConfig::default())?;
/// let mut rng = StdRng::seed_from_u64(42);
/// let payments = generator.generate(500, &mut rng, Utc::now());
/// assert_eq!(payments[0].id, "PAY-1000");
/// ```
#[derive(Debug, Clone)]
pub struct PaymentGenerator {
    config: GeneratorConfig,
}

impl PaymentGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate `count` payments from `rng`, dated relative to `now`
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> RecordCollection<Payment> {
        (0..count)
            .map(|offset| self.payment_at(offset, &mut *rng, now))
            .collect()
    }

    /// Generate the configured number of payments
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    pub fn generate_with_entropy(&self) -> RecordCollection<Payment> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let payments = self.generate(self.config.record_count, &mut rng, Utc::now());

        tracing::info!(
            count = payments.len(),
            seeded = self.config.seed.is_some(),
            "Generated mock payments"
        );

        payments
    }

    fn payment_at<R: Rng>(&self, offset: usize, rng: &mut R, now: DateTime<Utc>) -> Payment {
        let ordinal = offset as u64;
        let status = PaymentStatus::ALL[rng.random_range(0..PaymentStatus::ALL.len())];
        let amount = rng.random_range(self.config.amount_min..=self.config.amount_max);
        let age_days = rng.random_range(0..=self.config.max_age_days);

        Payment {
            id: format!("{}-{}", self.config.id_prefix, ordinal + self.config.id_base),
            amount,
            status,
            email: format!("user{}@example.com", ordinal + 1),
            date: now
                .checked_sub_signed(TimeDelta::days(i64::from(age_days)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
                .date_naive(),
        }
    }
}
