//! Tests for configuration-declared containers

#[cfg(feature = "config")]
mod config {
    use optionals::prelude::*;

    struct Logger {
        name: String,
    }

    fn registry() -> InitializerRegistry {
        let mut registry = InitializerRegistry::new();
        registry
            .register_factory("initLogger", || Logger {
                name: "console".to_string(),
            })
            .unwrap();
        registry
            .register_factory("initPostgres", || "postgres://localhost/test".to_string())
            .unwrap();
        registry
    }

    #[test]
    fn test_config_loading() {
        let config_toml = r#"
            kind = "injectables"

            [[slots]]
            name = "logger"

            [[slots]]
            name = "database"
            initializer = "initPostgres"
        "#;

        let config = ContainerConfig::from_toml(config_toml).unwrap();

        assert_eq!(config.kind, ContainerKind::Injectables);
        assert_eq!(config.slots.len(), 2);
        assert_eq!(config.slots[0].name, "logger");
        assert_eq!(config.slots[0].initializer, None);
        assert_eq!(config.slots[1].initializer.as_deref(), Some("initPostgres"));
    }

    #[test]
    fn test_configured_container_validates() {
        let mut config = ConfigBuilder::new(ContainerKind::Injectables);
        config.add_slot("logger").add_slot_from("database", "initPostgres");
        let config = config.build();

        let mut injectables: Injectables = config.build(&registry()).unwrap();
        injectables.require_valid_injectables().unwrap();

        let logger = injectables.slots().initializer("initLogger").unwrap();
        assert!(logger.produces.ends_with("Logger"));
        let database = injectables.slots().initializer("initDatabase").unwrap();
        assert_eq!(database.produces, std::any::type_name::<String>());

        injectables.call("initLogger").unwrap();
        injectables.call("initDatabase").unwrap();

        assert_eq!(injectables.get_as::<Logger>("logger").unwrap().name, "console");
        assert_eq!(
            injectables.get_as::<String>("database").unwrap().as_str(),
            "postgres://localhost/test"
        );
    }

    #[test]
    fn test_missing_factory_fails_validation() {
        let config = ContainerConfig::from_json(
            r#"{"kind": "optionals", "slots": [{"name": "logger"}, {"name": "cache"}]}"#,
        )
        .unwrap();

        let optionals: Optionals = config.build(&registry()).unwrap();
        assert!(optionals.get("cache").is_none());

        let error = optionals.require_valid_optionals().unwrap_err();
        assert_eq!(error.property(), Some("cache"));
    }

    #[test]
    fn test_kind_mismatch() {
        let config = ConfigBuilder::new(ContainerKind::Optionals).build();
        let result = config.build::<Injectables>(&registry());

        assert!(matches!(result, Err(DiError::ConfigError(_))));
    }

    #[test]
    fn test_bad_slot_name_in_config() {
        let mut config = ConfigBuilder::new(ContainerKind::Optionals);
        config.add_slot("2fast");

        let result = config.build().build::<Optionals>(&registry());
        assert!(matches!(result, Err(DiError::InvalidSlotName(name)) if name == "2fast"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ContainerConfig::from_toml("kind = 42"),
            Err(DiError::ConfigError(_))
        ));
        assert!(matches!(
            ContainerConfig::from_json(r#"{"kind": "services"}"#),
            Err(DiError::ConfigError(_))
        ));
    }
}
