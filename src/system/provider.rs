use std::fmt;
use std::time::Duration;

use sysinfo::{
    MINIMUM_CPU_UPDATE_INTERVAL, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users,
};

use super::host::HostIdentity;

/// Raw memory figures as reported by the OS, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    Unavailable(String),
    NoData,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(reason) => write!(f, "metrics unavailable: {reason}"),
            ProviderError::NoData => write!(f, "metrics provider returned no data"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of host metrics consumed by the sampler.
///
/// `cpu_utilization` may block for the whole measurement window.
pub trait MetricsProvider {
    fn cpu_utilization(&mut self, window: Duration) -> Result<f64, ProviderError>;
    fn memory_info(&mut self) -> Result<MemoryInfo, ProviderError>;
    fn uptime(&mut self) -> Result<u64, ProviderError>;
    fn host_identity(&mut self) -> HostIdentity;
}

/// `MetricsProvider` backed by `sysinfo`.
pub struct SysinfoProvider {
    sys: System,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        SysinfoProvider { sys }
    }

    fn current_username(&mut self) -> Option<String> {
        let pid = sysinfo::get_current_pid().ok()?;
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            false,
            ProcessRefreshKind::nothing().with_user(UpdateKind::Always),
        );
        let uid = self.sys.process(pid)?.user_id()?.clone();
        let users = Users::new_with_refreshed_list();
        users.get_user_by_id(&uid).map(|u| u.name().to_string())
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_utilization(&mut self, window: Duration) -> Result<f64, ProviderError> {
        // sysinfo needs two refreshes at least MINIMUM_CPU_UPDATE_INTERVAL apart
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();

        if self.sys.cpus().is_empty() {
            return Err(ProviderError::NoData);
        }
        let usage = self.sys.global_cpu_usage();
        if usage.is_finite() {
            Ok(f64::from(usage))
        } else {
            Err(ProviderError::Unavailable(format!(
                "non-finite cpu usage {usage}"
            )))
        }
    }

    fn memory_info(&mut self) -> Result<MemoryInfo, ProviderError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::NoData);
        }
        Ok(MemoryInfo {
            total,
            available: self.sys.available_memory(),
        })
    }

    fn uptime(&mut self) -> Result<u64, ProviderError> {
        match System::uptime() {
            0 => Err(ProviderError::NoData),
            secs => Ok(secs),
        }
    }

    fn host_identity(&mut self) -> HostIdentity {
        let username = self
            .current_username()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok());
        let version = System::os_version().unwrap_or_default();
        let platform = format!("{} {}", System::distribution_id(), version)
            .trim()
            .to_string();

        HostIdentity {
            username,
            hostname: System::host_name(),
            os: Some(std::env::consts::OS.to_string()),
            platform: (!platform.is_empty()).then_some(platform),
        }
    }
}
