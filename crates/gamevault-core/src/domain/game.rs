//! Game catalog entity.
//!
//! All field invariants are enforced identically at construction and on
//! every update: validation runs before any field is assigned, so a failed
//! update leaves the previous state untouched.

use crate::{Entity, GameId, VaultError, VaultResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted price for a catalog entry.
pub const MAX_PRICE: f64 = 999_999.99;

/// Game entity representing a catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier, assigned at creation and never reassigned.
    id: GameId,
    /// Display name (trimmed length must be >3 and <=200).
    name: String,
    /// Description (trimmed length must be >10 and <=1000).
    description: String,
    /// Category (trimmed length must be >3 and <=50).
    category: String,
    /// Price, strictly positive and at most [`MAX_PRICE`].
    price: f64,
    /// Release date; the minimum and maximum representable instants are
    /// both treated as invalid sentinels.
    release_date: DateTime<Utc>,
    /// Creation timestamp, set once at construction.
    created_at: DateTime<Utc>,
    /// Last-update timestamp, `None` until the first update.
    updated_at: Option<DateTime<Utc>>,
    /// Soft-delete flag. Soft-deleted games stay in the store.
    deleted: bool,
}

impl Game {
    /// Creates a new game, validating every field first.
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        release_date: DateTime<Utc>,
    ) -> VaultResult<Self> {
        let name = name.into();
        let description = description.into();
        let category = category.into();

        validate_fields(id, &name, &description, &category, price, release_date)?;

        Ok(Self {
            id,
            name,
            description,
            category,
            price,
            release_date,
            created_at: Utc::now(),
            updated_at: None,
            deleted: false,
        })
    }

    /// Rehydrates a game from stored state without re-validation.
    ///
    /// Only the repository layer should use this; rows were validated when
    /// they were written.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: GameId,
        name: String,
        description: String,
        category: String,
        price: f64,
        release_date: DateTime<Utc>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
            release_date,
            created_at,
            updated_at,
            deleted,
        }
    }

    /// Applies new field values, re-running all invariants first.
    ///
    /// On failure no field is assigned and `updated_at` is untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        release_date: DateTime<Utc>,
    ) -> VaultResult<()> {
        let name = name.into();
        let description = description.into();
        let category = category.into();

        validate_fields(self.id, &name, &description, &category, price, release_date)?;

        self.name = name;
        self.description = description;
        self.category = category;
        self.price = price;
        self.release_date = release_date;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Marks the game as soft-deleted. The row is never removed.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Clears the soft-delete flag.
    pub fn reactivate(&mut self) {
        self.deleted = false;
        self.updated_at = Some(Utc::now());
    }

    /// Checks if the game is active (not soft-deleted).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Checks if the release date has passed.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.release_date <= Utc::now()
    }

    /// Days since the last update, or since creation if never updated.
    #[must_use]
    pub fn days_since_update(&self) -> i64 {
        let reference = self.updated_at.unwrap_or(self.created_at);
        (Utc::now() - reference).num_days()
    }

    #[must_use]
    pub const fn game_id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Entity<GameId> for Game {
    fn id(&self) -> &GameId {
        &self.id
    }
}

fn validate_fields(
    id: GameId,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    release_date: DateTime<Utc>,
) -> VaultResult<()> {
    validate_id(id)?;
    validate_name(name)?;
    validate_description(description)?;
    validate_category(category)?;
    validate_price(price)?;
    validate_release_date(release_date)?;
    Ok(())
}

fn validate_id(id: GameId) -> VaultResult<()> {
    if id.is_nil() {
        return Err(VaultError::validation("id must not be empty"));
    }
    Ok(())
}

fn validate_name(name: &str) -> VaultResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VaultError::validation("name must not be blank"));
    }
    if name.chars().count() <= 3 {
        return Err(VaultError::validation(
            "name must be longer than 3 characters",
        ));
    }
    if name.chars().count() > 200 {
        return Err(VaultError::validation(
            "name must be at most 200 characters",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> VaultResult<()> {
    let description = description.trim();
    if description.is_empty() {
        return Err(VaultError::validation("description must not be blank"));
    }
    if description.chars().count() <= 10 {
        return Err(VaultError::validation(
            "description must be longer than 10 characters",
        ));
    }
    if description.chars().count() > 1000 {
        return Err(VaultError::validation(
            "description must be at most 1000 characters",
        ));
    }
    Ok(())
}

fn validate_category(category: &str) -> VaultResult<()> {
    let category = category.trim();
    if category.is_empty() {
        return Err(VaultError::validation("category must not be blank"));
    }
    if category.chars().count() <= 3 {
        return Err(VaultError::validation(
            "category must be longer than 3 characters",
        ));
    }
    if category.chars().count() > 50 {
        return Err(VaultError::validation(
            "category must be at most 50 characters",
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> VaultResult<()> {
    if price <= 0.0 {
        return Err(VaultError::validation("price must be greater than zero"));
    }
    if price > MAX_PRICE {
        return Err(VaultError::validation("price must not exceed 999999.99"));
    }
    Ok(())
}

fn validate_release_date(release_date: DateTime<Utc>) -> VaultResult<()> {
    if release_date == DateTime::<Utc>::MIN_UTC {
        return Err(VaultError::validation("release date is invalid (too old)"));
    }
    if release_date == DateTime::<Utc>::MAX_UTC {
        return Err(VaultError::validation(
            "release date is invalid (too distant)",
        ));
    }
    Ok(())
}
