use kubenet_common::network::Network;
use kubenet_common::network::addresses::AddressError;
use kubenet_core::load_yaml;
use kubenet_integration_tests::{DUAL_STACK_CALICO_YAML, SINGLE_STACK_YAML};

fn with_service_cidr(cidr: &str) -> Network {
    let doc: String = SINGLE_STACK_YAML.replace("10.96.0.0/12", cidr);
    load_yaml(&doc).unwrap()
}

/*************************************************************
                        DNS address
**************************************************************/

#[test]
fn dns_address_uses_offset_ten() {
    assert_eq!(with_service_cidr("10.96.0.0/12").dns_address().unwrap(), "10.96.0.10");
    assert_eq!(with_service_cidr("172.16.32.0/24").dns_address().unwrap(), "172.16.32.10");
}

#[test]
fn dns_address_uses_offset_two_in_tight_blocks() {
    assert_eq!(with_service_cidr("10.96.0.0/29").dns_address().unwrap(), "10.96.0.2");
    assert_eq!(with_service_cidr("10.96.0.8/30").dns_address().unwrap(), "10.96.0.10");
}

#[test]
fn dns_address_never_leaves_the_block() {
    for cidr in ["10.96.0.0/31", "10.96.0.0/32", "10.96.0.254/31"] {
        let err = with_service_cidr(cidr).dns_address().unwrap_err();
        assert!(matches!(err, AddressError::DnsAddress { .. }), "{cidr}: {err}");
    }
}

/*************************************************************
                     API server addresses
**************************************************************/

#[test]
fn internal_api_addresses_follow_cidr_order() {
    let single: Network = load_yaml(SINGLE_STACK_YAML).unwrap();
    assert_eq!(single.internal_api_addresses().unwrap(), vec!["10.96.0.1"]);

    let dual: Network = load_yaml(DUAL_STACK_CALICO_YAML).unwrap();
    assert_eq!(
        dual.internal_api_addresses().unwrap(),
        vec!["10.96.0.1", "fd01::1"]
    );
}

/*************************************************************
                        CIDR arguments
**************************************************************/

#[test]
fn single_stack_arguments_are_verbatim() {
    let network: Network = load_yaml(SINGLE_STACK_YAML).unwrap();
    assert_eq!(network.build_pod_cidr(), "10.244.0.0/16");
    assert_eq!(network.build_service_cidr("10.0.0.1"), "10.96.0.0/12");
    assert_eq!(network.build_service_cidr("2001:db8::1"), "10.96.0.0/12");
}

#[test]
fn dual_stack_arguments() {
    let network: Network = load_yaml(DUAL_STACK_CALICO_YAML).unwrap();

    assert_eq!(
        network.build_service_cidr("2001:db8::1"),
        "fd01::/108,10.96.0.0/12"
    );
    assert_eq!(
        network.build_service_cidr("10.0.0.1"),
        "10.96.0.0/12,fd01::/108"
    );
    assert_eq!(network.build_pod_cidr(), "fd00::/108,10.244.0.0/16");
}

#[test]
fn derived_values_of_defaults() {
    let network: Network = Network::default();
    assert_eq!(network.dns_address().unwrap(), "10.96.0.10");
    assert_eq!(network.internal_api_addresses().unwrap(), vec!["10.96.0.1"]);
    assert_eq!(network.build_service_cidr("0.0.0.0"), "10.96.0.0/12");
    assert_eq!(network.build_pod_cidr(), "10.244.0.0/16");
}
