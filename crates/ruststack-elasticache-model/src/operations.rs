//! ElastiCache operation enum.

use std::fmt;

/// The ElastiCache API version every operation belongs to.
pub const API_VERSION: &str = "2015-02-02";

macro_rules! operations {
    ($($(#[$meta:meta])* $variant:ident,)*) => {
        /// All ElastiCache operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ElastiCacheOperation {
            $($(#[$meta])* $variant,)*
        }

        impl ElastiCacheOperation {
            /// Every operation, in alphabetical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the AWS operation name string (the `Action` parameter).
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Parse an operation name string into an `ElastiCacheOperation`.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| op.as_str() == name)
            }
        }
    };
}

operations! {
    /// Add cost allocation tags to a cluster or snapshot.
    AddTagsToResource,
    /// Allow an EC2 security group to reach a cache security group.
    AuthorizeCacheSecurityGroupIngress,
    BatchApplyUpdateAction,
    BatchStopUpdateAction,
    /// Finish an online migration into a replication group.
    CompleteMigration,
    CopySnapshot,
    /// Create a cluster.
    CreateCacheCluster,
    CreateCacheParameterGroup,
    CreateCacheSecurityGroup,
    CreateCacheSubnetGroup,
    CreateGlobalReplicationGroup,
    /// Create a Redis replication group.
    CreateReplicationGroup,
    /// Take a manual snapshot of a cluster or replication group.
    CreateSnapshot,
    DecreaseNodeGroupsInGlobalReplicationGroup,
    DecreaseReplicaCount,
    DeleteCacheCluster,
    DeleteCacheParameterGroup,
    DeleteCacheSecurityGroup,
    DeleteCacheSubnetGroup,
    DeleteGlobalReplicationGroup,
    DeleteReplicationGroup,
    DeleteSnapshot,
    DescribeCacheClusters,
    DescribeCacheEngineVersions,
    DescribeCacheParameterGroups,
    DescribeCacheParameters,
    DescribeCacheSecurityGroups,
    DescribeCacheSubnetGroups,
    /// Describe the default parameters of a parameter group family.
    DescribeEngineDefaultParameters,
    DescribeEvents,
    DescribeGlobalReplicationGroups,
    DescribeReplicationGroups,
    DescribeReservedCacheNodes,
    DescribeReservedCacheNodesOfferings,
    DescribeServiceUpdates,
    DescribeSnapshots,
    DescribeUpdateActions,
    DisassociateGlobalReplicationGroup,
    FailoverGlobalReplicationGroup,
    IncreaseNodeGroupsInGlobalReplicationGroup,
    IncreaseReplicaCount,
    ListAllowedNodeTypeModifications,
    ListTagsForResource,
    /// Change the settings of a cluster.
    ModifyCacheCluster,
    ModifyCacheParameterGroup,
    ModifyCacheSubnetGroup,
    ModifyGlobalReplicationGroup,
    /// Change the settings of a replication group.
    ModifyReplicationGroup,
    ModifyReplicationGroupShardConfiguration,
    PurchaseReservedCacheNodesOffering,
    RebalanceSlotsInGlobalReplicationGroup,
    RebootCacheCluster,
    RemoveTagsFromResource,
    ResetCacheParameterGroup,
    RevokeCacheSecurityGroupIngress,
    StartMigration,
    /// Fail over the primary of one node group to test application behaviour.
    TestFailover,
}

impl fmt::Display for ElastiCacheOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request shape that is the input of a single ElastiCache operation.
pub trait ElastiCacheInput {
    /// The operation this request is sent as.
    const OPERATION: ElastiCacheOperation;
}
