//! Closed string sets used by ElastiCache members.
//!
//! None of these are validated locally: a value outside the documented set
//! deserializes (or converts from a string) into the `Unknown` variant and is
//! sent back unchanged.

use crate::elasticache_enum;

elasticache_enum! {
    /// Whether Memcached nodes are created in one or several Availability Zones.
    pub enum AZMode {
        /// All nodes in a single Availability Zone.
        SingleAz => "single-az",
        /// Nodes spread across the zones of the region.
        CrossAz => "cross-az",
    }
}

elasticache_enum! {
    /// How a new `AuthToken` is applied by a modify request.
    pub enum AuthTokenUpdateStrategyType {
        /// Replace the current token.
        Set => "SET",
        /// Add the token alongside the current one.
        Rotate => "ROTATE",
    }
}

elasticache_enum! {
    /// Pending auth token change on a cluster or replication group.
    pub enum AuthTokenUpdateStatus {
        Setting => "SETTING",
        Rotating => "ROTATING",
    }
}

elasticache_enum! {
    /// Automatic failover state of a replication group or snapshot source.
    pub enum AutomaticFailoverStatus {
        Enabled => "enabled",
        Disabled => "disabled",
        Enabling => "enabling",
        Disabling => "disabling",
    }
}

elasticache_enum! {
    /// Multi-AZ state of a replication group.
    pub enum MultiAZStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

elasticache_enum! {
    /// Automatic failover state staged for the next maintenance window.
    pub enum PendingAutomaticFailoverStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

elasticache_enum! {
    /// When a parameter change takes effect.
    pub enum ChangeType {
        /// Applied without a reboot.
        Immediate => "immediate",
        /// Applied after the nodes are rebooted.
        RequiresReboot => "requires-reboot",
    }
}
