//! Test doubles for providers.

use timezone_provider::{ResolvedZone, TimeZoneProvider, TimeZoneProviderError, ZoneRules};

use crate::TimeZone;

/// A provider that only knows a fixed list of identifiers.
///
/// Rules are loaded from the bundled tzdb, so every listed name must exist
/// there.
pub(crate) struct NamesProvider {
    names: Vec<&'static str>,
    named_utc: bool,
}

impl NamesProvider {
    pub(crate) fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            named_utc: false,
        }
    }

    /// Answers `"UTC"` with named rules instead of the UTC sentinel.
    pub(crate) fn named_utc(mut self) -> Self {
        self.named_utc = true;
        self
    }
}

impl TimeZoneProvider for NamesProvider {
    fn resolve(&self, identifier: &str) -> Result<ResolvedZone, TimeZoneProviderError> {
        let reserved = ResolvedZone::from_reserved(identifier)
            .filter(|zone| !(self.named_utc && *zone == ResolvedZone::Utc && !identifier.is_empty()));
        if let Some(zone) = reserved {
            return Ok(zone);
        }
        if !self.names.contains(&identifier) {
            return Err(TimeZoneProviderError::NotFound("not in the test provider"));
        }
        let (_, data) = jiff_tzdb::get(identifier).expect("test zones exist in the tzdb");
        ZoneRules::from_tzif_bytes(identifier, data).map(ResolvedZone::Named)
    }
}

pub(crate) fn tokyo() -> TimeZone {
    TimeZone::try_from_str_with_provider("Asia/Tokyo", &NamesProvider::new(&["Asia/Tokyo"]))
        .unwrap()
}

/// Collects the records logged on the current thread while `f` runs.
#[cfg(feature = "log")]
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<(log::Level, String)> {
    use std::cell::RefCell;

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    struct ThreadLogger;

    impl log::Log for ThreadLogger {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()));
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: ThreadLogger = ThreadLogger;
    // Another test may already have installed it.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);

    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.take())
}
