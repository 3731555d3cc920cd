// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # fleetdns - Tag-driven DNS reconciliation for a compute fleet
//!
//! fleetdns converges the address records in Route 53 hosted zones to
//! match the live membership of an EC2 fleet, driven by a `hostnames` tag
//! on running instances. It is invoked periodically by a scheduler; each
//! invocation diffs desired records against published ones and applies
//! only real changes, so an unchanged fleet produces zero mutations.
//!
//! ## Overview
//!
//! One run flows strictly one direction:
//!
//! inventory + zone list → classified hostnames → desired state → diff
//! against current records → applied mutations + change summary
//!
//! ## Modules
//!
//! - [`zones`] - Hosted zone index and hostname-to-zone resolution
//! - [`inventory`] - Raw inventory rows to instance descriptors
//! - [`hostnames`] - Cluster-member hostname classification
//! - [`desired`] - Desired-state construction (individual + cluster records)
//! - [`diff`] - Minimal-change computation against published records
//! - [`reconcile`] - The run driver: orchestration, dry-run gate, apply
//! - [`providers`] - Collaborator traits and their Route 53/EC2 backends
//! - [`config`] - Typed configuration with an optional JSON override file
//! - [`report`] - The end-of-run change summary table
//!
//! ## Example
//!
//! ```rust,no_run
//! use fleetdns::config::Config;
//! use fleetdns::constants::HOSTNAMES_TAG_KEY;
//! use fleetdns::providers::aws::AwsCloud;
//! use fleetdns::reconcile::run_reconciliation;
//!
//! # async fn example() -> Result<(), fleetdns::errors::ReconcileError> {
//! let config = Config::default();
//! let cloud = AwsCloud::connect(&config.aws.region).await;
//!
//! let outcome =
//!     run_reconciliation(&cloud, &cloud, &cloud, &cloud, &config, HOSTNAMES_TAG_KEY, true)
//!         .await?;
//! println!("{} change(s) pending", outcome.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod desired;
pub mod diff;
pub mod errors;
pub mod hostnames;
pub mod inventory;
pub mod providers;
pub mod reconcile;
pub mod records;
pub mod report;
pub mod zones;
