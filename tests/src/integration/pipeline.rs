//! # Operation to Batch Pipeline
//!
//! Drives `TrackAndTraceService` over an `InMemoryGateway` and decodes what
//! reached the gateway, layer by layer:
//!
//! ```text
//! BatchList ─► Batch ─► Transaction ─► TransactionHeader (sabre, full scope)
//!                                   └► SabrePayload ─► contract payload
//! ```

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shared_crypto::{verify_signature, Secp256k1Signer, Signer};
    use shared_protos::{
        BatchHeader, BatchList, Message, PikePayload, Transaction, TrackAndTracePayload,
    };
    use std::sync::Arc;
    use tnt_01_addressing::{
        agent_address, contract_registry_address, property_address, record_address,
        schema_address, CURRENT_PAGE, HISTORY_PAGE, PIKE, SCHEMA, TRACK_AND_TRACE,
    };
    use tnt_02_payloads::{
        encode_key, CreateRecordBody, CreateRecordTypeBody, DataType, PayloadError, PropertyData,
        PropertyInput, PropertySchema,
    };
    use tnt_03_transactions::{decode_header, dispatch_addresses, unwrap_dispatch};
    use tnt_04_submission::{BatchStatusKind, BatchSubmitter, InMemoryGateway, ScriptedStatus};
    use tnt_05_services::{
        create_record_transaction, create_schema_transaction, Session, TrackAndTraceApi,
        TrackAndTraceService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Service = TrackAndTraceService<BatchSubmitter<InMemoryGateway>>;

    fn signer() -> Arc<Secp256k1Signer> {
        Arc::new(Secp256k1Signer::from_bytes(&[0x42; 32]).unwrap())
    }

    fn committing_gateway(batches: usize) -> Arc<InMemoryGateway> {
        Arc::new(InMemoryGateway::default().with_statuses(vec![
            ScriptedStatus::Status(BatchStatusKind::Committed);
            batches
        ]))
    }

    fn service(gateway: Arc<InMemoryGateway>) -> Service {
        let session = Session::default().with_signer(signer());
        TrackAndTraceService::new(session, Arc::new(BatchSubmitter::new(gateway, 60)))
    }

    fn batch_lists(gateway: &InMemoryGateway) -> Vec<BatchList> {
        gateway
            .submitted_batch_lists()
            .iter()
            .map(|bytes| BatchList::decode(bytes.as_slice()).unwrap())
            .collect()
    }

    fn only_transaction(gateway: &InMemoryGateway) -> Transaction {
        let mut lists = batch_lists(gateway);
        assert_eq!(lists.len(), 1);
        let mut batches = lists.remove(0).batches;
        assert_eq!(batches.len(), 1);
        let mut transactions = batches.remove(0).transactions;
        assert_eq!(transactions.len(), 1);
        transactions.remove(0)
    }

    fn asset_properties() -> Vec<PropertyInput> {
        vec![
            PropertyInput::new("serialNumber", PropertyData::String("SN-0001".into())),
            PropertyInput::new("type", PropertyData::String("pallet".into())),
            PropertyInput::new("weight", PropertyData::Number(12_500)),
            PropertyInput::new(
                "location",
                PropertyData::LatLong {
                    latitude: 44.98,
                    longitude: -93.26,
                },
            ),
        ]
    }

    // =============================================================================
    // AGENTS
    // =============================================================================

    #[tokio::test]
    async fn test_create_agent_end_to_end() {
        let gateway = committing_gateway(1);
        let service = service(Arc::clone(&gateway));
        let public_key = signer().public_key_hex();

        let ids = service.create_agent("Alice", "org-1").await.unwrap();
        let transaction = only_transaction(&gateway);
        let header = decode_header(&transaction).unwrap();
        let dispatch = unwrap_dispatch(&transaction).unwrap();
        let payload = PikePayload::decode(dispatch.payload.as_slice()).unwrap();

        assert_eq!(ids, vec![transaction.header_signature.clone()]);
        assert_eq!(header.family_name, "sabre");
        assert_eq!(header.signer_public_key, public_key);
        assert_eq!(header.batcher_public_key, public_key);

        let agent = agent_address(&public_key).into_string();
        assert_eq!(header.inputs, dispatch_addresses(&[&PIKE], &[agent.clone()]));
        assert_eq!(header.outputs, header.inputs);
        assert_eq!(dispatch.name, "pike");
        assert_eq!(dispatch.inputs, vec![agent]);

        let action = payload.create_agent.unwrap();
        assert_eq!(action.public_key, public_key);
        assert_eq!(action.org_id, "org-1");
        assert!(action.active);
        assert_eq!(action.metadata[0].key, "name");
        assert_eq!(action.metadata[0].value, "Alice");
    }

    #[tokio::test]
    async fn test_batch_and_transaction_signatures_verify() {
        let gateway = committing_gateway(1);
        let service = service(Arc::clone(&gateway));

        service.create_agent("Alice", "").await.unwrap();
        let batch = batch_lists(&gateway).remove(0).batches.remove(0);
        let batch_header = BatchHeader::decode(batch.header.as_slice()).unwrap();
        let transaction = &batch.transactions[0];
        let public_key = signer().public_key_hex();

        assert_eq!(batch_header.transaction_ids, vec![transaction.header_signature.clone()]);
        verify_signature(&public_key, &batch.header, &batch.header_signature).unwrap();
        verify_signature(&public_key, &transaction.header, &transaction.header_signature).unwrap();
    }

    // =============================================================================
    // RECORDS
    // =============================================================================

    #[tokio::test]
    async fn test_create_record_declares_property_pages() {
        let gateway = committing_gateway(1);
        let service = service(Arc::clone(&gateway));
        let names = ["serialNumber", "type", "weight", "location"];

        let created = service.create_record("asset", asset_properties()).await.unwrap();
        let transaction = only_transaction(&gateway);
        let header = decode_header(&transaction).unwrap();
        let dispatch = unwrap_dispatch(&transaction).unwrap();
        let id = created.record_id.as_str();

        // record plus a current and a history page per property
        assert_eq!(dispatch.outputs.len(), 9);
        assert_eq!(dispatch.outputs[0], record_address(id).into_string());
        for name in names {
            for page in [CURRENT_PAGE, HISTORY_PAGE] {
                let address = property_address(id, name, page).into_string();
                assert!(dispatch.outputs.contains(&address), "{name} page {page}");
                assert!(dispatch.inputs.contains(&address), "{name} page {page}");
            }
        }
        assert!(dispatch.inputs.contains(&schema_address("asset").into_string()));
        assert!(dispatch
            .inputs
            .contains(&agent_address(&signer().public_key_hex()).into_string()));
        assert_eq!(dispatch.inputs.len(), 11);

        assert_eq!(dispatch.name, "grid_track_and_trace");
        assert_eq!(
            &header.inputs[..3],
            &[
                contract_registry_address(PIKE.name).into_string(),
                contract_registry_address(TRACK_AND_TRACE.name).into_string(),
                contract_registry_address(SCHEMA.name).into_string(),
            ]
        );

        let payload = TrackAndTracePayload::decode(dispatch.payload.as_slice()).unwrap();
        let action = payload.create_record.unwrap();
        assert!(payload.timestamp > 0);
        assert_eq!(action.record_id, created.record_id);
        assert_eq!(action.schema, "asset");
        assert_eq!(action.properties.len(), 4);
    }

    #[tokio::test]
    async fn test_schema_and_record_in_one_batch() {
        let gateway = committing_gateway(1);
        let service = service(Arc::clone(&gateway));
        let schema = create_schema_transaction(
            service.session(),
            CreateRecordTypeBody {
                name: "asset".into(),
                description: "Tracked goods".into(),
                properties: vec![PropertySchema::new("type", DataType::String).required()],
            },
        )
        .unwrap();
        let record = create_record_transaction(
            service.session(),
            CreateRecordBody {
                record_id: "rec-1".into(),
                schema: "asset".into(),
                properties: vec![PropertyInput::new("type", PropertyData::String("crate".into()))],
            },
        )
        .unwrap();
        let expected = vec![schema.header_signature.clone(), record.header_signature.clone()];

        let ids = service.submit(vec![schema, record]).await.unwrap();
        let lists = batch_lists(&gateway);

        assert_eq!(ids, expected);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].batches.len(), 1);
        let order: Vec<_> = lists[0].batches[0]
            .transactions
            .iter()
            .map(|txn| txn.header_signature.clone())
            .collect();
        assert_eq!(order, expected);
    }

    // =============================================================================
    // PAYLOAD KEYS
    // =============================================================================

    #[test]
    fn test_unknown_action_key() {
        let result = encode_key("launchRocket", serde_json::json!({ "recordId": "r" }));

        assert_eq!(result, Err(PayloadError::UnknownAction("launchRocket".into())));
    }

    #[test]
    fn test_known_key_with_bad_body() {
        let result = encode_key("finalizeRecord", serde_json::json!({ "record": 7 }));

        assert!(matches!(result, Err(PayloadError::InvalidActionData { .. })));
    }

    proptest! {
        #[test]
        fn prop_record_scope_grows_two_pages_per_property(
            names in proptest::collection::btree_set("[a-zA-Z]{1,12}", 0..8)
        ) {
            let session = Session::default().with_signer(signer());
            let properties = names
                .iter()
                .map(|name| PropertyInput::new(name.clone(), PropertyData::Boolean(true)))
                .collect();
            let transaction = create_record_transaction(
                &session,
                CreateRecordBody {
                    record_id: "rec-prop".into(),
                    schema: "asset".into(),
                    properties,
                },
            )
            .unwrap();
            let dispatch = unwrap_dispatch(&transaction).unwrap();

            prop_assert_eq!(dispatch.outputs.len(), 1 + 2 * names.len());
            prop_assert_eq!(dispatch.inputs.len(), 3 + 2 * names.len());
        }
    }
}
