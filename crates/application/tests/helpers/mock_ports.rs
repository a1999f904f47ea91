#![allow(dead_code)]

use async_trait::async_trait;
use pacrunch_application::ports::{
    DatasetReader, DatasetWriter, HostnameResolver, ResolverInstaller,
};
use pacrunch_domain::{ActiveResolver, Config, Dataset, DomainError, ResolverWarning};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockHostnameResolver {
    answers: Arc<Mutex<HashMap<Ipv4Addr, String>>>,
    failures: Arc<Mutex<HashMap<Ipv4Addr, DomainError>>>,
    calls: Arc<Mutex<Vec<Ipv4Addr>>>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(self, ip: &str, hostname: &str) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), hostname.to_string());
        self
    }

    pub fn with_failure(self, ip: &str, error: DomainError) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), error);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Ipv4Addr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError> {
        self.calls.lock().unwrap().push(ip);

        if let Some(error) = self.failures.lock().unwrap().remove(&ip) {
            return Err(error);
        }

        Ok(self.answers.lock().unwrap().get(&ip).cloned())
    }
}

pub struct MockResolverInstaller {
    system: Vec<SocketAddr>,
    reject_with: Option<String>,
    installs: AtomicUsize,
}

impl MockResolverInstaller {
    pub fn new() -> Self {
        Self {
            system: vec!["192.168.1.1:53".parse().unwrap()],
            reject_with: None,
            installs: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            reject_with: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub fn system_nameservers(&self) -> &[SocketAddr] {
        &self.system
    }

    pub fn install_count(&self) -> usize {
        self.installs.load(Ordering::Relaxed)
    }
}

impl ResolverInstaller for MockResolverInstaller {
    fn system_default(&self) -> ActiveResolver {
        ActiveResolver::system(self.system.clone())
    }

    fn install(&self, address: Ipv4Addr) -> Result<ActiveResolver, ResolverWarning> {
        self.installs.fetch_add(1, Ordering::Relaxed);
        match &self.reject_with {
            Some(reason) => Err(ResolverWarning::InstallFailed {
                address: address.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(ActiveResolver::custom(address)),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDatasets {
    files: Arc<Mutex<HashMap<String, Dataset>>>,
}

impl InMemoryDatasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, name: &str, dataset: Dataset) {
        self.files.lock().unwrap().insert(name.to_string(), dataset);
    }

    pub fn get(&self, name: &str) -> Option<Dataset> {
        self.files.lock().unwrap().get(name).cloned()
    }
}

impl DatasetReader for InMemoryDatasets {
    fn read(&self, source: &str) -> Result<Dataset, DomainError> {
        self.get(source).ok_or_else(|| {
            DomainError::DatasetRead(source.to_string(), "No such file".to_string())
        })
    }
}

impl DatasetWriter for InMemoryDatasets {
    fn write(&self, dataset: &Dataset, destination: &str) -> Result<(), DomainError> {
        self.put(destination, dataset.clone());
        Ok(())
    }
}

/// Config with every stage disabled.
pub fn base_config() -> Config {
    Config::parse(
        r#"
        input = "in.csv"
        output = "out.csv"

        [dedupe]
        enabled = false

        [drop]
        empty_enabled = false
        columns_enabled = false

        [dns_lookup]
        enabled = false
    "#,
    )
    .unwrap()
}

pub fn values(dataset: &Dataset, column: &str) -> Vec<Option<String>> {
    dataset
        .column_values(column)
        .unwrap()
        .map(|value| value.map(str::to_string))
        .collect()
}

pub fn text(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}
