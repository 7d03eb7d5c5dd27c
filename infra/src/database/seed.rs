//! Startup seeders
//!
//! Positions are upserted by identifier so seeding is repeatable. Synthetic
//! users get random names, unique `example.com` emails, `+380` phones and
//! the default photo.

use rand::seq::SliceRandom;
use rand::Rng;

use ud_core::domain::entities::position::Position;
use ud_core::domain::entities::user::{NewUser, DEFAULT_PHOTO};
use ud_core::errors::DomainError;
use ud_core::repositories::{PositionRepository, UserRepository};

const FIRST_NAMES: &[&str] = &[
    "Olena", "Taras", "Iryna", "Andrii", "Mariia", "Dmytro", "Kateryna", "Oleksii", "Sofiia",
    "Yurii", "Nataliia", "Bohdan",
];

const LAST_NAMES: &[&str] = &[
    "Shevchenko", "Kovalenko", "Bondarenko", "Tkachenko", "Kravchenko", "Melnyk", "Boiko",
    "Savchenko", "Rudenko", "Moroz",
];

/// Attempts per user before giving up on finding a free email and phone
const MAX_ATTEMPTS: usize = 16;

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub positions: usize,
    pub users: usize,
}

/// Insert or rename the fixed set of positions
pub async fn seed_positions(positions: &dyn PositionRepository) -> Result<usize, DomainError> {
    let defaults = Position::defaults();
    let total = defaults.len();
    for position in defaults {
        positions.upsert(position).await?;
    }
    tracing::info!(count = total, "Positions seeded");
    Ok(total)
}

/// Insert `count` synthetic users spread over the existing positions
pub async fn seed_users(
    users: &dyn UserRepository,
    positions: &dyn PositionRepository,
    count: u32,
) -> Result<usize, DomainError> {
    if count == 0 {
        return Ok(0);
    }

    let position_ids: Vec<i64> = positions.list_all().await?.into_iter().map(|p| p.id).collect();
    if position_ids.is_empty() {
        return Err(DomainError::internal(
            "Cannot seed users before any position exists",
        ));
    }

    let mut created = 0;
    for _ in 0..count {
        let candidate = free_candidate(users, &position_ids).await?;
        users.create(candidate).await?;
        created += 1;
    }

    tracing::info!(count = created, "Users seeded");
    Ok(created)
}

async fn free_candidate(
    users: &dyn UserRepository,
    position_ids: &[i64],
) -> Result<NewUser, DomainError> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = random_user(position_ids);
        if users.exists_by_email(&candidate.email).await?
            || users.exists_by_phone(&candidate.phone).await?
        {
            continue;
        }
        return Ok(candidate);
    }
    Err(DomainError::internal(
        "Could not generate a unique seed user",
    ))
}

fn random_user(position_ids: &[i64]) -> NewUser {
    let mut rng = rand::thread_rng();

    let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Olena");
    let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Melnyk");
    let tag: u32 = rng.gen_range(0..1_000_000);
    let email = format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        tag
    );
    let phone = format!("+380{:09}", rng.gen_range(0..1_000_000_000u32));
    let position_id = position_ids.choose(&mut rng).copied().unwrap_or(1);

    NewUser::new(
        format!("{} {}", first, last),
        email,
        phone,
        position_id,
        DEFAULT_PHOTO,
    )
}
