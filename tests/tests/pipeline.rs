use kubenet_common::field::ErrorKind;
use kubenet_common::network::{Calico, KubeRouter, Network, Provider};
use kubenet_core::{LoadError, Validate, load_and_validate, load_file, load_json, load_yaml, validated};
use kubenet_integration_tests::{
    DUAL_STACK_CALICO_JSON, DUAL_STACK_CALICO_YAML, SINGLE_STACK_YAML, write_temp,
};

/*************************************************************
                     Defaults and loading
**************************************************************/

#[test]
fn default_configuration_is_valid() {
    assert!(Network::default().validate().is_empty());
    assert!(validated(Network::default()).is_ok());
}

#[test]
fn default_configuration_round_trips_through_yaml() {
    let yaml: String = serde_yaml::to_string(&Network::default()).unwrap();
    let network: Network = load_yaml(&yaml).unwrap();
    assert_eq!(network, Network::default());
}

#[test]
fn single_stack_document_is_valid() {
    let network: Network = load_yaml(SINGLE_STACK_YAML).unwrap();
    assert!(network.validate().is_empty());
    assert_eq!(network.provider, Provider::KubeRouter(KubeRouter::default()));
}

#[test]
fn yaml_and_json_documents_agree() {
    let from_yaml: Network = load_yaml(DUAL_STACK_CALICO_YAML).unwrap();
    let from_json: Network = load_json(DUAL_STACK_CALICO_JSON).unwrap();
    assert_eq!(from_yaml, from_json);
    assert!(from_yaml.validate().is_empty());
}

#[test]
fn calico_provider_gets_calico_settings_only() {
    let network: Network = load_yaml("provider: calico").unwrap();
    assert_eq!(network.provider.calico(), Some(&Calico::default()));
    assert!(network.provider.kube_router().is_none());
}

#[test]
fn kube_router_provider_gets_kube_router_settings_only() {
    let network: Network = load_yaml("provider: kuberouter\ncalico:\n  mode: bird").unwrap();
    assert_eq!(network.provider.kube_router(), Some(&KubeRouter::default()));
    assert!(network.provider.calico().is_none());
}

#[test]
fn kube_proxy_sections_always_present() {
    let network: Network = load_yaml("kubeProxy:\n  mode: ipvs\n  ipvs:\n    scheduler: lc").unwrap();
    assert_eq!(network.kube_proxy.mode, "ipvs");
    assert_eq!(network.kube_proxy.ipvs.scheduler, "lc");
    assert_eq!(network.kube_proxy.iptables.sync_period, "0s");
}

/*************************************************************
                          Validation
**************************************************************/

#[test]
fn provider_enumeration() {
    for name in ["flannel", "cilium", "KUBEROUTER", "calico "] {
        let doc: String = SINGLE_STACK_YAML.replace("provider: kuberouter", &format!("provider: {name:?}"));
        let errors = load_yaml(&doc).unwrap().validate();
        assert_eq!(errors.len(), 1, "provider {name:?}: {errors:?}");
        assert_eq!(errors[0].kind, ErrorKind::NotSupported);
        assert_eq!(errors[0].path.to_string(), "provider");
    }

    let network: Network = load_yaml(&SINGLE_STACK_YAML.replace("kuberouter", "\"\"")).unwrap();
    let errors = network.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Required);
}

#[test]
fn dual_stack_calico_requires_bird_mode() {
    let doc: String = DUAL_STACK_CALICO_YAML.replace("mode: bird", "mode: vxlan");
    let errors = load_yaml(&doc).unwrap().validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Forbidden);
    assert_eq!(errors[0].path.to_string(), "calico.mode");

    let without_block: String = DUAL_STACK_CALICO_YAML.replace("calico:\n  mode: bird\n", "");
    let errors = load_yaml(&without_block).unwrap().validate();
    assert_eq!(errors.len(), 1, "default calico mode is vxlan: {errors:?}");
}

#[test]
fn every_problem_is_reported_at_once() {
    let doc: &str = r#"
provider: weave
podCIDR: 10.244.0.0
serviceCIDR: 10.96.0.0/40
clusterDomain: "cluster local"
dualStack:
  enabled: true
  IPv6podCIDR: "fd00::"
kubeProxy:
  mode: nftables
"#;
    let errors = load_yaml(doc).unwrap().validate();
    let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "provider",
            "podCIDR",
            "serviceCIDR",
            "clusterDomain",
            "dualStack.IPv6podCIDR",
            "dualStack.IPv6serviceCIDR",
            "kubeProxy.mode",
        ]
    );
}

#[test]
fn absent_configuration_is_valid() {
    let network: Option<Network> = None;
    assert!(network.validate().is_empty());
}

/*************************************************************
                            Files
**************************************************************/

#[test]
fn load_yaml_and_json_files() {
    let yaml = write_temp("network.yaml", DUAL_STACK_CALICO_YAML);
    let json = write_temp("network.json", DUAL_STACK_CALICO_JSON);

    let from_yaml: Network = load_and_validate(yaml.path()).unwrap();
    let from_json: Network = load_and_validate(json.path()).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn invalid_file_fails_validation() {
    let fixture = write_temp("invalid.yaml", "provider: calico\npodCIDR: nope");

    assert!(load_file(fixture.path()).is_ok());
    let Err(LoadError::Validation(errors)) = load_and_validate(fixture.path()) else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 3);
}

#[test]
fn malformed_file_fails_to_parse() {
    let fixture = write_temp("malformed.json", "{\"podCIDR\": ");
    assert!(matches!(load_file(fixture.path()), Err(LoadError::Json(_))));
}

#[test]
fn fixture_files_are_removed_on_drop() {
    let fixture = write_temp("network.yaml", SINGLE_STACK_YAML);
    let path = fixture.path().to_path_buf();
    let dir = path.parent().unwrap().to_path_buf();
    assert!(path.exists());

    drop(fixture);
    assert!(!path.exists());
    assert!(!dir.exists());
}
