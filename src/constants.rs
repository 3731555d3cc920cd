// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for fleetdns.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// AWS Constants
// ============================================================================

/// Default AWS region for all service calls
pub const DEFAULT_AWS_REGION: &str = "ap-southeast-1";

/// EC2 filter name for tag-key presence
pub const FILTER_TAG_KEY: &str = "tag-key";

/// EC2 filter name for instance state
pub const FILTER_INSTANCE_STATE: &str = "instance-state-name";

/// Instance state an inventory row must be in to be reconciled
pub const INSTANCE_STATE_RUNNING: &str = "running";

// ============================================================================
// DNS Constants
// ============================================================================

/// Default TTL for emitted record mutations (5 minutes)
pub const DEFAULT_DNS_RECORD_TTL_SECS: i64 = 300;

/// Tag whose comma-separated value lists an instance's hostnames
pub const HOSTNAMES_TAG_KEY: &str = "hostnames";

/// Prefix for records that carry an instance's private address
pub const PRIVATE_RECORD_PREFIX: &str = "private.";

/// Number of leading digits that mark a hostname as a cluster member
pub const CLUSTER_ORDINAL_DIGITS: usize = 4;

/// Record type managed by the reconciler
pub const ADDRESS_RECORD_TYPE: &str = "A";

// ============================================================================
// Process Constants
// ============================================================================

/// Environment variable that suppresses record application when set
pub const DRY_RUN_ENV_VAR: &str = "DRY_RUN";

/// Default path of the optional JSON override config file
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Number of worker threads for the Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 4;
