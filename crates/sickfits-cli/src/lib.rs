//! # Sick Fits CLI
//!
//! Seeding and account utilities shared by the `sickfits-cli` binary and the
//! server's `--seed-data` startup hook.
//!
//! ```ignore
//! use sickfits_cli::seeder::insert_seed_data;
//!
//! let inserted = insert_seed_data(&pool).await?;
//! ```

pub mod accounts;
pub mod seeder;
