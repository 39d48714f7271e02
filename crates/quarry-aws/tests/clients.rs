use quarry_aws::config::NetworkConfiguration;
use quarry_aws::{AwsClients, AwsError, CallerIdentity};

#[test]
fn valid_region_constructs_a_context() {
    let clients = AwsClients::from_default_credential_chain("us-east-1").unwrap();
    assert_eq!(clients.region(), "us-east-1");
}

#[test]
fn unknown_region_is_rejected_at_construction() {
    let err = AwsClients::from_default_credential_chain("not-a-region").unwrap_err();
    match err {
        AwsError::UnknownRegion(region) => assert_eq!(region, "not-a-region"),
        other => panic!("expected UnknownRegion, got {other:?}"),
    }
}

#[test]
fn basic_credentials_are_stored_without_validation() {
    let clients =
        AwsClients::from_basic_credentials("AKIDEXAMPLE", "wrong-on-purpose", "eu-west-1").unwrap();
    assert_eq!(clients.region(), "eu-west-1");
}

#[tokio::test]
async fn sdk_config_carries_region_and_app_name() {
    let clients = AwsClients::from_basic_credentials("AKIDEXAMPLE", "secret", "us-east-1")
        .unwrap()
        .with_network_configuration(NetworkConfiguration::new(None, "1.2.3"));

    let config = clients.sdk_config().await.unwrap();
    assert_eq!(config.region().map(|r| r.as_ref()), Some("us-east-1"));
    assert_eq!(config.app_name().map(|a| a.to_string()), Some("quarry-1.2.3".to_string()));
}

#[test]
fn caller_identity_round_trips_through_json() {
    let identity = CallerIdentity {
        account_id: "123456789012".to_string(),
        arn: "arn:aws:iam::123456789012:user/deploy".to_string(),
        user_id: "AIDAEXAMPLE".to_string(),
    };

    let json = serde_json::to_string(&identity).unwrap();
    let parsed: CallerIdentity = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.account_id, identity.account_id);
    assert_eq!(parsed.arn, identity.arn);
}

#[tokio::test]
async fn clients_build_without_touching_the_network() {
    let clients = AwsClients::from_basic_credentials("AKIDEXAMPLE", "secret", "us-west-2")
        .unwrap()
        .with_network_configuration(NetworkConfiguration::new(None, "0.0.0"));

    clients.cloudformation_client().await.unwrap();
    clients.sts_client().await.unwrap();
}
