#[cfg(test)]
mod tests {
    use fourps::libs::config::{Config, CONFIG_FILE_NAME};
    use fourps::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base_path(temp_dir.path().join("fourps"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database, "4psDB.db");
        assert_eq!(config.max_login_attempts, 3);
        assert!(!config.enforce_foreign_keys);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        let config = Config {
            database: "records.db".to_string(),
            max_login_attempts: 5,
            enforce_foreign_keys: true,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_falls_back_to_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "max_login_attempts": 4 }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.max_login_attempts, 4);
        assert_eq!(config.database, "4psDB.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let config = Config::default();
        let path = config.database_path(&ctx.storage).unwrap();
        assert_eq!(path, ctx.storage.base_path().join("4psDB.db"));

        let absolute = ctx.storage.base_path().join("elsewhere.db");
        let config = Config {
            database: absolute.display().to_string(),
            ..Config::default()
        };
        assert_eq!(config.database_path(&ctx.storage).unwrap(), absolute);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_open_db_with_override(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path("override.db").unwrap();

        let mut db = Config::default().open_db(Some(path.clone())).unwrap();
        assert!(db.is_connected());
        assert_eq!(db.path(), path.as_path());
        db.close().unwrap();
    }
}
