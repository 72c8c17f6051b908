#[cfg(test)]
mod tests {
    use fourps::db::db::Db;
    use fourps::db::users::{UserProfile, Users};
    use fourps::libs::auth::AuthService;
    use fourps::libs::error::AppError;
    use fourps::libs::hasher;
    use fourps::libs::session::{Session, SessionStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AccountTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for AccountTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("4psDB.db")).unwrap();
            AccountTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn profile(name: &str, email: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            gender: "F".to_string(),
            year_level: "Grade 10".to_string(),
            email: email.to_string(),
        }
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_register_assigns_sequential_ids(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);

        assert_eq!(auth.next_user_id().unwrap(), 1);
        assert_eq!(auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap(), 1);
        assert_eq!(auth.register(&profile("Ben", "ben@example.com"), "secret").unwrap(), 2);
        assert_eq!(auth.next_user_id().unwrap(), 3);
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_register_stores_digest_not_password(ctx: &mut AccountTestContext) {
        AuthService::new(&ctx.db).register(&profile("Ana", "ana@example.com"), "secret").unwrap();

        let result = ctx.db.query("SELECT password FROM user WHERE user_id = 1", &[]).unwrap();
        let stored = result.first().unwrap().get_string("password").unwrap();
        assert_eq!(stored, hasher::hash("secret"));
        assert_eq!(stored.len(), hasher::DIGEST_LEN);
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_duplicate_email_is_rejected(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);
        auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap();

        let err = auth.register(&profile("Another Ana", "ana@example.com"), "other").unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail(ref email) if email == "ana@example.com"));
        assert_eq!(Users::new(&ctx.db).count().unwrap(), 1);
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_login_with_valid_credentials(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);
        let user_id = auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap();

        let outcome = auth.login("ana@example.com", "secret", 2).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.user_id, Some(user_id));
        assert_eq!(outcome.user_name.as_deref(), Some("Ana"));
        assert_eq!(outcome.attempts, 0);
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_wrong_password_counts_an_attempt(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);
        auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap();

        let outcome = auth.login("ana@example.com", "wrong", 0).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert!(outcome.user_id.is_none());

        let outcome = auth.login("nobody@example.com", "secret", 0).unwrap();
        assert!(!outcome.success);
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_three_failed_logins_terminate_session(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);
        auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap();
        let mut session = Session::default();

        for expected_remaining in [2, 1] {
            let outcome = auth.login("ana@example.com", "wrong", session.login_attempts()).unwrap();
            assert_eq!(session.apply(&outcome), SessionStatus::Active);
            assert_eq!(session.remaining_attempts(), expected_remaining);
        }

        let outcome = auth.login("ana@example.com", "wrong", session.login_attempts()).unwrap();
        assert!(outcome.is_terminal(session.max_login_attempts()));
        assert_eq!(session.apply(&outcome), SessionStatus::Terminated);
        assert!(!session.is_logged_in());
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_login_then_logout(ctx: &mut AccountTestContext) {
        let auth = AuthService::new(&ctx.db);
        let user_id = auth.register(&profile("Ana", "ana@example.com"), "secret").unwrap();
        let mut session = Session::default();

        let failed = auth.login("ana@example.com", "wrong", session.login_attempts()).unwrap();
        session.apply(&failed);
        let outcome = auth.login("ana@example.com", "secret", session.login_attempts()).unwrap();
        assert_eq!(session.apply(&outcome), SessionStatus::Active);
        assert_eq!(session.current_user(), Some((user_id, "Ana")));
        assert_eq!(session.login_attempts(), 0);

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
    }

    #[test_context(AccountTestContext)]
    #[test]
    fn test_user_listing_hides_password(ctx: &mut AccountTestContext) {
        AuthService::new(&ctx.db).register(&profile("Ana", "ana@example.com"), "secret").unwrap();

        let view = Users::new(&ctx.db).view().unwrap();
        assert_eq!(view.len(), 1);
        assert!(!view.columns().iter().any(|column| column == "password"));

        let users = Users::new(&ctx.db).list().unwrap();
        assert_eq!(users[0].profile, profile("Ana", "ana@example.com"));
    }
}
