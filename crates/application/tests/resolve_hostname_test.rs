mod helpers;

use helpers::MockHostnameResolver;
use pacrunch_application::use_cases::ResolveHostnameUseCase;
use pacrunch_domain::{DomainError, Resolution};
use std::sync::Arc;

fn make_use_case(resolver: &MockHostnameResolver) -> ResolveHostnameUseCase {
    ResolveHostnameUseCase::new(Arc::new(resolver.clone()))
}

#[tokio::test]
async fn test_ipv4_resolves_through_port() {
    let resolver = MockHostnameResolver::new().with_answer("8.8.8.8", "dns.google");
    let use_case = make_use_case(&resolver);

    let result = use_case.execute("8.8.8.8").await;

    assert_eq!(result, Resolution::Resolved("dns.google".to_string()));
    assert_eq!(resolver.calls(), vec!["8.8.8.8".parse::<std::net::Ipv4Addr>().unwrap()]);
}

#[tokio::test]
async fn test_not_ip_makes_no_network_call() {
    let resolver = MockHostnameResolver::new();
    let use_case = make_use_case(&resolver);

    for input in ["not-an-ip", "", "999.999.999.999", "dns.google"] {
        assert_eq!(use_case.execute(input).await, Resolution::NotIpv4);
    }

    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_ipv6_makes_no_network_call() {
    let resolver = MockHostnameResolver::new();
    let use_case = make_use_case(&resolver);

    let result = use_case.execute("2001:4860:4860::8888").await;

    assert_eq!(result, Resolution::Ipv6Unsupported);
    assert_eq!(result.display_value(), "Unable to Resolve IPv6");
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_no_ptr_record_is_lookup_failure() {
    let resolver = MockHostnameResolver::new();
    let use_case = make_use_case(&resolver);

    let result = use_case.execute("10.1.2.3").await;

    assert_eq!(result, Resolution::LookupFailed);
    assert_eq!(result.display_value(), "Unable to Resolve");
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn test_transport_error_is_contained() {
    let resolver = MockHostnameResolver::new().with_failure("10.1.2.3", DomainError::QueryTimeout);
    let use_case = make_use_case(&resolver);

    assert_eq!(use_case.execute("10.1.2.3").await, Resolution::LookupFailed);
}

#[tokio::test]
async fn test_one_query_per_call() {
    let resolver = MockHostnameResolver::new().with_answer("1.1.1.1", "one.one.one.one");
    let use_case = make_use_case(&resolver);

    use_case.execute("1.1.1.1").await;
    use_case.execute("1.1.1.1").await;

    assert_eq!(resolver.call_count(), 2);
}
