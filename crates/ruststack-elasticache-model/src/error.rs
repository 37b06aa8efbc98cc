//! ElastiCache error types.
//!
//! ElastiCache (an `awsQuery` service) reports faults as an `<Error>` element
//! carrying a `<Code>`, a `<Message>` and the request id. The code is usually
//! the fault name, but a few faults use a different wire code (for example
//! `QuotaExceeded.CacheSecurityGroup`), so the mapping is spelled out per
//! variant.

use std::fmt;

macro_rules! error_codes {
    ($($(#[$meta:meta])* $variant:ident => $code:literal, $status:ident;)*) => {
        /// Well-known ElastiCache error codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ElastiCacheErrorCode {
            $($(#[$meta])* $variant,)*
        }

        impl ElastiCacheErrorCode {
            /// Every error code, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the wire error code string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Parses a wire error code string.
            #[must_use]
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the default HTTP status code for this error.
            #[must_use]
            pub fn default_status_code(&self) -> http::StatusCode {
                match self {
                    $(Self::$variant => http::StatusCode::$status,)*
                }
            }
        }
    };
}

error_codes! {
    /// The customer has exceeded the allowed rate of API calls.
    APICallRateForCustomerExceeded => "APICallRateForCustomerExceeded", BAD_REQUEST;
    /// The EC2 security group is already authorized for the cache security group.
    AuthorizationAlreadyExists => "AuthorizationAlreadyExists", BAD_REQUEST;
    /// The EC2 security group is not authorized for the cache security group.
    AuthorizationNotFound => "AuthorizationNotFound", NOT_FOUND;
    CacheClusterAlreadyExists => "CacheClusterAlreadyExists", BAD_REQUEST;
    CacheClusterNotFound => "CacheClusterNotFound", NOT_FOUND;
    CacheParameterGroupAlreadyExists => "CacheParameterGroupAlreadyExists", BAD_REQUEST;
    CacheParameterGroupNotFound => "CacheParameterGroupNotFound", NOT_FOUND;
    CacheParameterGroupQuotaExceeded => "CacheParameterGroupQuotaExceeded", BAD_REQUEST;
    CacheSecurityGroupAlreadyExists => "CacheSecurityGroupAlreadyExists", BAD_REQUEST;
    CacheSecurityGroupNotFound => "CacheSecurityGroupNotFound", NOT_FOUND;
    CacheSecurityGroupQuotaExceeded => "QuotaExceeded.CacheSecurityGroup", BAD_REQUEST;
    CacheSubnetGroupAlreadyExists => "CacheSubnetGroupAlreadyExists", BAD_REQUEST;
    CacheSubnetGroupInUse => "CacheSubnetGroupInUse", BAD_REQUEST;
    CacheSubnetGroupNotFound => "CacheSubnetGroupNotFoundFault", NOT_FOUND;
    CacheSubnetGroupQuotaExceeded => "CacheSubnetGroupQuotaExceeded", BAD_REQUEST;
    /// The request would exceed the allowed number of subnets in a subnet group.
    CacheSubnetQuotaExceeded => "CacheSubnetQuotaExceededFault", BAD_REQUEST;
    ClusterQuotaForCustomerExceeded => "ClusterQuotaForCustomerExceeded", BAD_REQUEST;
    GlobalReplicationGroupAlreadyExists => "GlobalReplicationGroupAlreadyExistsFault", BAD_REQUEST;
    GlobalReplicationGroupNotFound => "GlobalReplicationGroupNotFoundFault", NOT_FOUND;
    /// No capacity of the requested node type in the requested zone.
    InsufficientCacheClusterCapacity => "InsufficientCacheClusterCapacity", BAD_REQUEST;
    InvalidARN => "InvalidARN", BAD_REQUEST;
    InvalidCacheClusterState => "InvalidCacheClusterState", BAD_REQUEST;
    InvalidCacheParameterGroupState => "InvalidCacheParameterGroupState", BAD_REQUEST;
    InvalidCacheSecurityGroupState => "InvalidCacheSecurityGroupState", BAD_REQUEST;
    InvalidGlobalReplicationGroupState => "InvalidGlobalReplicationGroupState", BAD_REQUEST;
    InvalidKMSKey => "InvalidKMSKeyFault", BAD_REQUEST;
    /// Two or more incompatible parameters were specified.
    InvalidParameterCombination => "InvalidParameterCombination", BAD_REQUEST;
    InvalidParameterValue => "InvalidParameterValue", BAD_REQUEST;
    InvalidReplicationGroupState => "InvalidReplicationGroupState", BAD_REQUEST;
    InvalidSnapshotState => "InvalidSnapshotState", BAD_REQUEST;
    InvalidSubnet => "InvalidSubnet", BAD_REQUEST;
    InvalidVPCNetworkState => "InvalidVPCNetworkStateFault", BAD_REQUEST;
    /// The modify request would not change anything.
    NoOperation => "NoOperationFault", BAD_REQUEST;
    NodeGroupNotFound => "NodeGroupNotFoundFault", NOT_FOUND;
    NodeGroupsPerReplicationGroupQuotaExceeded => "NodeGroupsPerReplicationGroupQuotaExceeded", BAD_REQUEST;
    NodeQuotaForClusterExceeded => "NodeQuotaForClusterExceeded", BAD_REQUEST;
    NodeQuotaForCustomerExceeded => "NodeQuotaForCustomerExceeded", BAD_REQUEST;
    ReplicationGroupAlreadyExists => "ReplicationGroupAlreadyExists", BAD_REQUEST;
    ReplicationGroupAlreadyUnderMigration => "ReplicationGroupAlreadyUnderMigrationFault", BAD_REQUEST;
    ReplicationGroupNotFound => "ReplicationGroupNotFoundFault", NOT_FOUND;
    ReplicationGroupNotUnderMigration => "ReplicationGroupNotUnderMigrationFault", BAD_REQUEST;
    ReservedCacheNodeAlreadyExists => "ReservedCacheNodeAlreadyExists", BAD_REQUEST;
    ReservedCacheNodeNotFound => "ReservedCacheNodeNotFound", NOT_FOUND;
    ReservedCacheNodeQuotaExceeded => "ReservedCacheNodeQuotaExceeded", BAD_REQUEST;
    ReservedCacheNodesOfferingNotFound => "ReservedCacheNodesOfferingNotFound", NOT_FOUND;
    ServiceLinkedRoleNotFound => "ServiceLinkedRoleNotFoundFault", NOT_FOUND;
    ServiceUpdateNotFound => "ServiceUpdateNotFoundFault", NOT_FOUND;
    SnapshotAlreadyExists => "SnapshotAlreadyExistsFault", BAD_REQUEST;
    /// Snapshots are not supported for the engine or node type.
    SnapshotFeatureNotSupported => "SnapshotFeatureNotSupportedFault", BAD_REQUEST;
    SnapshotNotFound => "SnapshotNotFoundFault", NOT_FOUND;
    SnapshotQuotaExceeded => "SnapshotQuotaExceededFault", BAD_REQUEST;
    SubnetInUse => "SubnetInUse", BAD_REQUEST;
    TagNotFound => "TagNotFound", NOT_FOUND;
    /// The resource already has the maximum of 50 tags.
    TagQuotaPerResourceExceeded => "TagQuotaPerResourceExceeded", BAD_REQUEST;
    TestFailoverNotAvailable => "TestFailoverNotAvailableFault", BAD_REQUEST;
}

impl fmt::Display for ElastiCacheErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ElastiCache fault response.
#[derive(Debug, thiserror::Error)]
#[error("ElastiCacheError({code}): {message}")]
pub struct ElastiCacheError {
    /// The error code.
    pub code: ElastiCacheErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The request id reported alongside the fault, if any.
    pub request_id: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ElastiCacheError {
    /// Create a new `ElastiCacheError` from an error code.
    #[must_use]
    pub fn new(code: ElastiCacheErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `ElastiCacheError` with a custom message.
    #[must_use]
    pub fn with_message(code: ElastiCacheErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            request_id: None,
            code,
            source: None,
        }
    }

    /// Set the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Override the HTTP status code.
    #[must_use]
    pub fn with_status_code(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds an error from a wire code, or `None` if the code is not a known
    /// ElastiCache fault.
    #[must_use]
    pub fn from_code(code: &str, message: impl Into<String>) -> Option<Self> {
        ElastiCacheErrorCode::from_code(code).map(|code| Self::with_message(code, message))
    }

    /// Returns `true` if the fault reports a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code.default_status_code() == http::StatusCode::NOT_FOUND
    }
}

/// Create an `ElastiCacheError` from an error code.
///
/// # Examples
///
/// ```
/// use ruststack_elasticache_model::elasticache_error;
/// use ruststack_elasticache_model::error::ElastiCacheErrorCode;
///
/// let err = elasticache_error!(InvalidParameterValue);
/// assert_eq!(err.code, ElastiCacheErrorCode::InvalidParameterValue);
///
/// let err = elasticache_error!(CacheClusterNotFound, "Cluster mem-1 not found");
/// assert_eq!(err.message, "Cluster mem-1 not found");
/// assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
/// ```
#[macro_export]
macro_rules! elasticache_error {
    ($code:ident) => {
        $crate::error::ElastiCacheError::new($crate::error::ElastiCacheErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::ElastiCacheError::with_message(
            $crate::error::ElastiCacheErrorCode::$code,
            $msg,
        )
    };
}
