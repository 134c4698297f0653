//! Customer and address generators.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::batch::BatchBuffer;
use crate::config;
use crate::error::PipelineError;
use crate::model::{Address, Customer};
use crate::provider;
use crate::sampling::{chance, pick, pick_weighted};
use crate::sink::BatchSink;

/// Generate `n` customers in batches. Returns the customer id pool
/// (ids are assigned 1..=n).
pub async fn generate_customers(
    n: u64,
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<Vec<i64>, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let today = now.date_naive();

    for customer_id in 1..=n as i64 {
        let first_name = provider::first_name(rng);
        let last_name = provider::last_name(rng);
        let domain = *pick(rng, config::EMAIL_DOMAINS);
        let email = format!(
            "{}.{}{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            rng.gen_range(1..=999),
            domain
        );

        buffer.push(Customer {
            customer_id,
            first_name,
            last_name,
            email,
            phone: provider::phone_number(rng),
            date_of_birth: provider::date_between(
                rng,
                today - Duration::days(80 * 365),
                today - Duration::days(18 * 365),
            ),
            gender: pick_weighted(
                rng,
                &[
                    ("Male", 45),
                    ("Female", 45),
                    ("Non-binary", 5),
                    ("Prefer not to say", 5),
                ],
            )
            .to_string(),
            signup_date: provider::date_between(rng, today - Duration::days(5 * 365), today),
            is_active: chance(rng, 0.9),
            loyalty_points: rng.gen_range(0..=50_000),
            preferred_language: pick(rng, config::PREFERRED_LANGUAGES).to_string(),
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("customers: {} rows", buffer.written());
    Ok((1..=n as i64).collect())
}

/// Generate 1-3 addresses per customer. Returns the maximum address id
/// (address ids are assigned globally from 1).
pub async fn generate_addresses(
    customer_ids: &[i64],
    batch_size: usize,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<i64, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut address_id = 0i64;

    for &customer_id in customer_ids {
        let count = *pick_weighted(rng, &[(1, 60), (2, 30), (3, 10)]);
        for slot in 0..count {
            address_id += 1;
            // The first address is always the default billing address.
            let address_type = if slot == 0 {
                "billing"
            } else {
                *pick(rng, &["shipping", "billing"])
            };

            buffer.push(Address {
                address_id,
                customer_id,
                address_type: address_type.to_string(),
                street_address: provider::street_address(rng),
                city: provider::city(rng),
                state: provider::state_abbr(rng),
                postal_code: provider::postal_code(rng),
                country: pick_weighted(
                    rng,
                    &[
                        ("USA", 70),
                        ("Canada", 10),
                        ("UK", 5),
                        ("Germany", 5),
                        ("France", 5),
                        ("Australia", 5),
                    ],
                )
                .to_string(),
                is_default: slot == 0,
            });
        }

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("addresses: {} rows", buffer.written());
    Ok(address_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_customer_ids_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();

        let ids = generate_customers(25, 10, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();

        assert_eq!(ids, (1..=25).collect::<Vec<i64>>());
        assert_eq!(sink.row_count("customers"), 25);
        assert_eq!(sink.batch_sizes("customers"), vec![10, 10, 5]);

        let row_ids: Vec<i64> = sink
            .rows("customers")
            .iter()
            .filter_map(|r| r[0].as_int())
            .collect();
        assert_eq!(row_ids, ids);
    }

    #[tokio::test]
    async fn test_every_customer_gets_default_billing_address() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let customer_ids: Vec<i64> = (1..=50).collect();

        let max_id = generate_addresses(&customer_ids, 1000, &mut rng, &mut sink)
            .await
            .unwrap();

        let rows = sink.rows("addresses");
        assert_eq!(rows.len() as i64, max_id);
        assert!(max_id >= 50); // at least one address each

        // Address ids are dense 1..=max.
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0].as_int().unwrap(), i as i64 + 1);
        }

        // Per customer, exactly one default and it is billing.
        for &customer_id in &customer_ids {
            let defaults: Vec<_> = rows
                .iter()
                .filter(|r| r[1].as_int() == Some(customer_id))
                .filter(|r| r[8] == crate::table::Value::Bool(true))
                .collect();
            assert_eq!(defaults.len(), 1, "customer {customer_id}");
            assert_eq!(defaults[0][2].as_text(), Some("billing"));
        }
    }
}
