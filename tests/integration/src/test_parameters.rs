//! Engine default parameter integration tests.

#[cfg(test)]
mod tests {
    use ruststack_elasticache_model::input::DescribeEngineDefaultParametersRequest;
    use ruststack_elasticache_model::output::DescribeEngineDefaultParametersResult;
    use ruststack_elasticache_model::types::{ChangeType, EngineDefaults, Parameter};

    use crate::{decode, encode};

    const FIRST_PAGE: &str = r#"{
        "EngineDefaults": {
            "CacheParameterGroupFamily": "redis6.x",
            "Marker": "page-2",
            "Parameters": [
                {
                    "ParameterName": "activedefrag",
                    "ParameterValue": "no",
                    "Source": "system",
                    "DataType": "string",
                    "AllowedValues": "yes,no",
                    "IsModifiable": true,
                    "MinimumEngineVersion": "4.0.10",
                    "ChangeType": "immediate"
                },
                {
                    "ParameterName": "databases",
                    "ParameterValue": "16",
                    "IsModifiable": true,
                    "ChangeType": "requires-reboot"
                }
            ],
            "CacheNodeTypeSpecificParameters": [
                {
                    "ParameterName": "maxmemory",
                    "IsModifiable": false,
                    "ChangeType": "immediate",
                    "CacheNodeTypeSpecificValues": [
                        {"CacheNodeType": "cache.t3.micro", "Value": "536870912"},
                        {"CacheNodeType": "cache.r6g.large", "Value": "14037181030"}
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_should_page_through_engine_defaults() -> anyhow::Result<()> {
        let request = DescribeEngineDefaultParametersRequest::default()
            .with_cache_parameter_group_family("redis6.x")
            .with_max_records(20);
        assert!(encode(&request)?.get("Marker").is_none());

        let result: DescribeEngineDefaultParametersResult = decode(FIRST_PAGE)?;
        let defaults = result
            .engine_defaults
            .ok_or_else(|| anyhow::anyhow!("missing EngineDefaults"))?;

        let next = request.clone().with_marker(defaults.marker.clone().unwrap_or_default());
        assert_eq!(encode(&next)?["Marker"], "page-2");
        assert_ne!(next, request);
        Ok(())
    }

    #[test]
    fn test_should_read_parameter_change_types() -> anyhow::Result<()> {
        let result: DescribeEngineDefaultParametersResult = decode(FIRST_PAGE)?;
        let defaults = result.engine_defaults.unwrap_or_default();

        let needs_reboot: Vec<&str> = defaults
            .parameters
            .iter()
            .flatten()
            .filter(|p| p.change_type == Some(ChangeType::RequiresReboot))
            .filter_map(|p| p.parameter_name.as_deref())
            .collect();
        assert_eq!(needs_reboot, ["databases"]);

        let activedefrag = defaults
            .parameter("activedefrag")
            .ok_or_else(|| anyhow::anyhow!("missing activedefrag"))?;
        assert_eq!(activedefrag.allowed_values.as_deref(), Some("yes,no"));
        assert_eq!(activedefrag.description, None);
        Ok(())
    }

    #[test]
    fn test_should_read_node_type_specific_values() -> anyhow::Result<()> {
        let result: DescribeEngineDefaultParametersResult = decode(FIRST_PAGE)?;
        let defaults = result.engine_defaults.unwrap_or_default();
        let maxmemory = defaults
            .cache_node_type_specific_parameters
            .iter()
            .flatten()
            .find(|p| p.parameter_name.as_deref() == Some("maxmemory"))
            .ok_or_else(|| anyhow::anyhow!("missing maxmemory"))?;

        assert_eq!(maxmemory.is_modifiable, Some(false));
        let micro = maxmemory
            .cache_node_type_specific_values
            .iter()
            .flatten()
            .find(|v| v.cache_node_type.as_deref() == Some("cache.t3.micro"))
            .and_then(|v| v.value.as_deref());
        assert_eq!(micro, Some("536870912"));
        Ok(())
    }

    #[test]
    fn test_should_compare_decoded_and_built_defaults() -> anyhow::Result<()> {
        let decoded: EngineDefaults = decode(
            r#"{"CacheParameterGroupFamily": "memcached1.6", "Parameters": []}"#,
        )?;
        let built = EngineDefaults::default()
            .with_cache_parameter_group_family("memcached1.6")
            .with_parameters(Vec::<Parameter>::new());

        assert_eq!(decoded, built);
        assert_ne!(
            decoded,
            EngineDefaults::default().with_cache_parameter_group_family("memcached1.6")
        );
        Ok(())
    }
}
