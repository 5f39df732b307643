//! # Seeding Over HTTP
//!
//! `tnt-seed` against [`FakeLedger`] with the bundled sample data: readiness
//! retries, user registration, organization and role batches, record types.
//!
//! [`FakeLedger`]: crate::fake_ledger::FakeLedger

#[cfg(test)]
mod tests {
    use crate::fake_ledger::{FakeLedger, Reply};
    use shared_crypto::{open_private_key, Secp256k1Signer, Signer};
    use shared_protos::Message;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;
    use tnt_04_submission::{BatchSubmitter, RestGateway};
    use tnt_05_services::{AccountApi, AccountGateway};
    use tnt_seed::{load_organizations, load_record_types, Seeder};

    type HttpSeeder = Seeder<AccountApi, BatchSubmitter<RestGateway>>;

    fn sample(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../tools/tnt-seed/data")
            .join(name)
    }

    fn seeder(ledger: &FakeLedger) -> HttpSeeder {
        let config = ledger.client_config();
        let gateway = Arc::new(RestGateway::new(&config.gateway).unwrap());
        let submitter = BatchSubmitter::from_config(gateway, &config.gateway);
        let accounts = AccountApi::new(&config).unwrap();
        Seeder::new(Arc::new(accounts), Arc::new(submitter), config)
            .with_retry_wait(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_seed_sample_organizations() {
        let ledger = FakeLedger::start().await.unwrap();
        ledger.unavailable_for(2);
        let seeder = seeder(&ledger);
        let organizations = load_organizations(Some(&sample("core_data.json"))).unwrap();

        let info = seeder.await_server_ready().await;
        let report = seeder.seed_organizations(&organizations).await;

        assert_eq!(info["pubkey"], "fake-ledger");
        assert_eq!(ledger.info_probes(), 3);
        assert!(report.is_success());
        assert_eq!(report.seeded, vec!["acme-logistics", "north-fisheries"]);
        assert_eq!(ledger.users().len(), 2);
        // organization, admin roles, record types: one batch each per org
        assert_eq!(ledger.batch_lists().len(), 6);
    }

    #[tokio::test]
    async fn test_seeded_admin_can_recover_signing_key() {
        let ledger = FakeLedger::start().await.unwrap();
        let seeder = seeder(&ledger);
        let organizations = load_organizations(Some(&sample("core_data.json"))).unwrap();
        seeder.seed_organizations(&organizations[..1]).await;

        let accounts = AccountApi::new(&ledger.client_config()).unwrap();
        let auth = accounts
            .authorize("admin@acme-logistics.example", "acme-seed-password")
            .await
            .unwrap();
        let sealed = auth.user["encryptedPrivateKey"].as_str().unwrap();
        let private_key = open_private_key("acme-seed-password", sealed).unwrap();
        let signer = Secp256k1Signer::from_hex(&private_key).unwrap();

        assert_eq!(auth.user["publicKey"], signer.public_key_hex());
        let batches = ledger.batch_lists();
        let org_batch = &batches[0].batches[0];
        let header = shared_protos::BatchHeader::decode(org_batch.header.as_slice()).unwrap();
        assert_eq!(header.signer_public_key, signer.public_key_hex());
    }

    #[tokio::test]
    async fn test_rejected_organization_is_reported() {
        let ledger = FakeLedger::start().await.unwrap();
        ledger.script([Reply::Invalid("Organization already exists".into())]);
        let seeder = seeder(&ledger);
        let organizations = load_organizations(Some(&sample("core_data.json"))).unwrap();

        let report = seeder.seed_organizations(&organizations).await;

        assert!(!report.is_success());
        assert_eq!(report.seeded, vec!["north-fisheries"]);
        assert_eq!(report.failed[0].0, "acme-logistics");
        assert_eq!(
            report.failed[0].1.rejection(),
            Some("Organization already exists")
        );
        // acme stopped after its organization batch
        assert_eq!(ledger.batch_lists().len(), 4);
    }

    #[tokio::test]
    async fn test_seed_record_types_in_one_batch() {
        let ledger = FakeLedger::start().await.unwrap();
        let seeder = seeder(&ledger);
        let record_types = load_record_types(Some(&sample("core_types.json"))).unwrap();

        let ids = seeder.seed_record_types(&record_types).await.unwrap();
        let lists = ledger.batch_lists();

        assert_eq!(ids.len(), 2);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].batches[0].transactions.len(), 2);
    }
}
