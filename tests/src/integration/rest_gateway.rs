//! # REST Adapters Against a Live Server
//!
//! `RestGateway` and `AccountApi` talking HTTP to [`FakeLedger`]: submission,
//! the status long-poll loop, state views and the account endpoints.
//!
//! [`FakeLedger`]: crate::fake_ledger::FakeLedger

#[cfg(test)]
mod tests {
    use crate::fake_ledger::{FakeLedger, Reply};
    use shared_crypto::Secp256k1Signer;
    use std::sync::Arc;
    use tnt_02_payloads::{CreateRecordTypeBody, DataType, PropertySchema};
    use tnt_04_submission::{BatchSubmitter, GatewayError, RestGateway};
    use tnt_05_services::{
        AccountApi, AccountGateway, ApiError, ClientConfig, LedgerQueries, NewUser, ServiceError,
        Session, TrackAndTraceApi, TrackAndTraceService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service(config: &ClientConfig) -> TrackAndTraceService<BatchSubmitter<RestGateway>> {
        let gateway = Arc::new(RestGateway::new(&config.gateway).unwrap());
        let session = Session::new(config.clone())
            .with_signer(Arc::new(Secp256k1Signer::from_bytes(&[0x07; 32]).unwrap()));
        TrackAndTraceService::new(
            session,
            Arc::new(BatchSubmitter::from_config(gateway, &config.gateway)),
        )
    }

    fn record_type() -> CreateRecordTypeBody {
        CreateRecordTypeBody {
            name: "fish".into(),
            description: "Catch lots".into(),
            properties: vec![
                PropertySchema::new("species", DataType::String).required(),
                PropertySchema::new("weight", DataType::Number),
            ],
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: "hunter2".into(),
            encrypted_private_key: "sealed".into(),
            public_key: "02abcdef".into(),
            username: Some("skipper".into()),
            name: None,
        }
    }

    // =============================================================================
    // SUBMISSION AND COMMIT WATCHING
    // =============================================================================

    #[tokio::test]
    async fn test_pending_pending_committed_over_http() {
        let ledger = FakeLedger::start().await.unwrap();
        ledger.script([Reply::Pending, Reply::Pending, Reply::Committed]);
        let service = service(&ledger.client_config());

        let ids = service.create_schema(record_type()).await.unwrap();
        let lists = ledger.batch_lists();
        let queries = ledger.status_queries();

        assert_eq!(lists.len(), 1);
        let batch = &lists[0].batches[0];
        assert_eq!(ids, vec![batch.transactions[0].header_signature.clone()]);

        assert_eq!(queries.len(), 3);
        for query in &queries {
            assert_eq!(query["id"], batch.header_signature);
            assert_eq!(query["wait"], "60");
        }
    }

    #[tokio::test]
    async fn test_invalid_batch_reports_ledger_message() {
        let ledger = FakeLedger::start().await.unwrap();
        ledger.script([Reply::Pending, Reply::Invalid("bad schema".into())]);
        let service = service(&ledger.client_config());

        let err = service.create_schema(record_type()).await.unwrap_err();

        assert_eq!(err.rejection(), Some("bad schema"));
        assert_eq!(err.to_string(), "bad schema");
        assert_eq!(ledger.status_queries().len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_gateway_fails_fast() {
        let ledger = FakeLedger::start().await.unwrap();
        let mut config = ledger.client_config();
        config.gateway.gateway_url = "http://127.0.0.1:1/grid".into();
        let service = service(&config);

        let err = service.create_agent("Alice", "").await.unwrap_err();

        assert!(matches!(err, ServiceError::Submit(_)));
        assert!(ledger.batch_lists().is_empty());
    }

    // =============================================================================
    // STATE VIEWS
    // =============================================================================

    #[tokio::test]
    async fn test_queries_read_state_views() {
        let ledger = FakeLedger::start().await.unwrap();
        let document = serde_json::json!({ "record_id": "rec-1", "schema": "fish", "final": false });
        ledger.insert_document("record/rec-1", document.clone());
        let gateway = RestGateway::new(&ledger.client_config().gateway).unwrap();
        let queries = LedgerQueries::new(Arc::new(gateway));

        assert_eq!(queries.record("rec-1").await.unwrap(), document);

        let missing = queries.agent("02ff").await.unwrap_err();
        assert!(matches!(
            missing,
            ServiceError::Gateway(GatewayError::Status { status: 404, .. })
        ));
    }

    // =============================================================================
    // ACCOUNT API
    // =============================================================================

    #[tokio::test]
    async fn test_account_round_trip() {
        let ledger = FakeLedger::start().await.unwrap();
        let accounts = AccountApi::new(&ledger.client_config()).unwrap();

        let reply = accounts.create_user(&new_user("ops@example.com")).await.unwrap();
        assert!(reply.is_ok());
        assert_eq!(reply.authorization.as_deref(), Some("token-1"));

        let users = ledger.users();
        let stored = &users["ops@example.com"];
        assert_eq!(stored["encryptedPrivateKey"], "sealed");
        assert_eq!(stored["publicKey"], "02abcdef");

        let auth = accounts.authorize("ops@example.com", "hunter2").await.unwrap();
        assert_eq!(auth.authorization, "session-token");
        assert_eq!(auth.user["publicKey"], "02abcdef");
        assert!(auth.user.get("password").is_none());
    }

    #[tokio::test]
    async fn test_account_errors() {
        let ledger = FakeLedger::start().await.unwrap();
        let accounts = AccountApi::new(&ledger.client_config()).unwrap();
        accounts.create_user(&new_user("ops@example.com")).await.unwrap();

        let duplicate = accounts.create_user(&new_user("ops@example.com")).await;
        assert!(matches!(duplicate, Err(ApiError::Rejected(ref m)) if m == "Email already in use"));

        let wrong = accounts.authorize("ops@example.com", "nope").await;
        assert!(matches!(wrong, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_server_info_unavailable_then_ready() {
        let ledger = FakeLedger::start().await.unwrap();
        ledger.unavailable_for(1);
        let accounts = AccountApi::new(&ledger.client_config()).unwrap();

        let first = accounts.server_info().await;
        let second = accounts.server_info().await.unwrap();

        assert!(matches!(first, Err(ApiError::Status { status: 503, .. })));
        assert_eq!(second["pubkey"], "fake-ledger");
        assert_eq!(ledger.info_probes(), 2);
    }
}
