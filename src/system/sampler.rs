use std::time::Duration;

use tracing::{debug, warn};

use super::host::HostIdentity;
use super::provider::MetricsProvider;
use super::snapshot::{MemoryReading, Snapshot};

/// Length of the CPU measurement window.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(200);

/// Turns provider reads into snapshot values. Provider failures never escape:
/// every read degrades to a zero reading instead.
pub struct Sampler<P> {
    provider: P,
    cpu_window: Duration,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P) -> Self {
        Self::with_window(provider, CPU_SAMPLE_WINDOW)
    }

    pub fn with_window(provider: P, cpu_window: Duration) -> Self {
        Sampler {
            provider,
            cpu_window,
        }
    }

    /// Blocks for the measurement window. Returns a value in `[0, 100]`.
    pub fn sample_cpu(&mut self) -> f64 {
        match self.provider.cpu_utilization(self.cpu_window) {
            Ok(percent) if percent.is_finite() => percent.clamp(0.0, 100.0),
            Ok(percent) => {
                warn!(percent, "discarding non-finite cpu reading");
                0.0
            }
            Err(err) => {
                warn!(error = %err, "cpu sample failed");
                0.0
            }
        }
    }

    pub fn sample_memory(&mut self) -> MemoryReading {
        match self.provider.memory_info() {
            Ok(info) => {
                // cache and buffers count as available, not used
                let used = info.total.saturating_sub(info.available);
                MemoryReading {
                    total: info.total,
                    used,
                    available: info.available.min(info.total),
                    used_percent: used_percent(used, info.total),
                }
            }
            Err(err) => {
                warn!(error = %err, "memory sample failed");
                MemoryReading::default()
            }
        }
    }

    pub fn sample_uptime(&mut self) -> u64 {
        self.provider.uptime().unwrap_or_else(|err| {
            warn!(error = %err, "uptime sample failed");
            0
        })
    }

    pub fn host_identity(&mut self) -> HostIdentity {
        self.provider.host_identity()
    }

    pub fn sample(&mut self) -> Snapshot {
        let cpu = self.sample_cpu();
        let memory = self.sample_memory();
        let uptime = self.sample_uptime();
        debug!(
            cpu,
            memory_total = memory.total,
            memory_used = memory.used,
            memory_available = memory.available,
            uptime,
            "sampled"
        );
        Snapshot::from_readings(cpu, memory, uptime)
    }
}

pub fn used_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::provider::{MemoryInfo, ProviderError};
    use proptest::prelude::*;

    const GIB: u64 = 1 << 30;

    struct FakeProvider {
        cpu: Result<f64, ProviderError>,
        memory: Result<MemoryInfo, ProviderError>,
        uptime: Result<u64, ProviderError>,
        last_window: Option<Duration>,
    }

    impl FakeProvider {
        fn healthy() -> Self {
            FakeProvider {
                cpu: Ok(42.5),
                memory: Ok(MemoryInfo {
                    total: 16 * GIB,
                    available: 8 * GIB,
                }),
                uptime: Ok(90_061),
                last_window: None,
            }
        }

        fn failing() -> Self {
            FakeProvider {
                cpu: Err(ProviderError::Unavailable("no /proc".to_string())),
                memory: Err(ProviderError::NoData),
                uptime: Err(ProviderError::NoData),
                last_window: None,
            }
        }
    }

    impl MetricsProvider for FakeProvider {
        fn cpu_utilization(&mut self, window: Duration) -> Result<f64, ProviderError> {
            self.last_window = Some(window);
            self.cpu.clone()
        }

        fn memory_info(&mut self) -> Result<MemoryInfo, ProviderError> {
            self.memory.clone()
        }

        fn uptime(&mut self) -> Result<u64, ProviderError> {
            self.uptime.clone()
        }

        fn host_identity(&mut self) -> HostIdentity {
            HostIdentity::default()
        }
    }

    #[test]
    fn healthy_provider_readings() {
        let mut sampler = Sampler::new(FakeProvider::healthy());
        assert_eq!(sampler.sample_cpu(), 42.5);
        assert_eq!(sampler.provider.last_window, Some(CPU_SAMPLE_WINDOW));

        let memory = sampler.sample_memory();
        assert_eq!(memory.total, 17_179_869_184);
        assert_eq!(memory.used, 8_589_934_592);
        assert_eq!(memory.available, 8_589_934_592);
        assert!((memory.used_percent - 50.0).abs() < 1e-9);
        assert_eq!(sampler.sample_uptime(), 90_061);
    }

    #[test]
    fn failing_provider_degrades_to_zero() {
        let mut sampler = Sampler::new(FakeProvider::failing());
        assert_eq!(sampler.sample_cpu(), 0.0);
        assert_eq!(sampler.sample_memory(), MemoryReading::default());
        assert_eq!(sampler.sample_uptime(), 0);
        assert_eq!(sampler.sample(), Snapshot::default());
    }

    #[test]
    fn out_of_range_cpu_is_clamped() {
        let mut provider = FakeProvider::healthy();
        provider.cpu = Ok(140.0);
        let mut sampler = Sampler::new(provider);
        assert_eq!(sampler.sample_cpu(), 100.0);

        sampler.provider.cpu = Ok(f64::NAN);
        assert_eq!(sampler.sample_cpu(), 0.0);
    }

    #[test]
    fn zero_total_memory_has_zero_percent() {
        let mut provider = FakeProvider::healthy();
        provider.memory = Ok(MemoryInfo {
            total: 0,
            available: 0,
        });
        let mut sampler = Sampler::new(provider);
        let memory = sampler.sample_memory();
        assert_eq!(memory.used, 0);
        assert_eq!(memory.used_percent, 0.0);
    }

    #[test]
    fn custom_window_is_forwarded() {
        let mut sampler = Sampler::with_window(FakeProvider::healthy(), Duration::from_millis(5));
        sampler.sample_cpu();
        assert_eq!(sampler.provider.last_window, Some(Duration::from_millis(5)));
    }

    proptest! {
        #[test]
        fn used_percent_matches_ratio(total in 1u64..=u64::MAX / 2, frac in 0.0f64..=1.0) {
            let used = (total as f64 * frac) as u64;
            let used = used.min(total);
            let pct = used_percent(used, total);
            prop_assert!((0.0..=100.0).contains(&pct));
            let expected = used as f64 / total as f64 * 100.0;
            prop_assert!((pct - expected).abs() < 1e-9);
        }

        #[test]
        fn sampled_memory_respects_invariant(total in 0u64..=1 << 40, available in 0u64..=1 << 41) {
            let mut provider = FakeProvider::healthy();
            provider.memory = Ok(MemoryInfo { total, available });
            let mut sampler = Sampler::new(provider);
            let memory = sampler.sample_memory();
            prop_assert!(memory.used + memory.available <= memory.total);
            prop_assert!((0.0..=100.0).contains(&memory.used_percent));
        }
    }
}
