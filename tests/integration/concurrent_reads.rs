//! Integration tests for sharing a registry across threads

use service_config::{BearerToken, ServiceConfig, ServiceDiscoveryConfig};
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_registry_reads_from_many_threads() {
    let mut builder = ServiceDiscoveryConfig::builder().default_api_token("shared");
    for i in 0..32 {
        let mut service = ServiceConfig::new(vec![format!("http://svc-{}", i)]);
        if i % 2 == 0 {
            service = service.with_api_token(format!("token-{}", i));
        }
        builder = builder.service(format!("svc-{}", i), service);
    }
    let registry = Arc::new(builder.build().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..32 {
                    let name = format!("svc-{}", i);
                    let expected = if i % 2 == 0 {
                        BearerToken::new(format!("token-{}", i))
                    } else {
                        BearerToken::new("shared")
                    };
                    assert_eq!(registry.api_token(&name).unwrap(), Some(&expected));
                    assert_eq!(registry.uris(&name).unwrap(), &[format!("http://svc-{}", i)]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
