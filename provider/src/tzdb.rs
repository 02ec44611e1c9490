//! Caching providers backed by TZif data.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::provider::{ResolvedZone, TimeZoneProvider, TimeZoneProviderResult};
use crate::{tzif::ZoneRules, TimeZoneProviderError};

/// The environment variable naming a zoneinfo directory to search first.
pub const ZONEINFO_ENV: &str = "ZONEINFO";

/// The directories searched for TZif files after `$ZONEINFO`.
pub const SYSTEM_ZONEINFO_DIRS: [&str; 4] = [
    "/usr/share/zoneinfo/",
    "/usr/share/lib/zoneinfo/",
    "/usr/lib/locale/TZ/",
    "/etc/zoneinfo/",
];

/// Timezone provider that uses compiled data.
///
/// This provider includes raw tzdata in the application binary and parses that data into
/// a TZif format, which incurs a runtime cost; however, parsed TZifs are cached, which
/// offsets the runtime cost on repeated requests.
#[cfg(feature = "tzdb")]
pub type CompiledTzdbProvider = TzdbProvider<CompiledTzdbBackend>;

/// Timezone provider that uses filesystem based tzif data.
///
/// This provider parses tzdata into a TZif format, which incurs a runtime cost; however,
/// parsed TZifs are cached, which offsets the runtime cost on repeated requests.
pub type FsTzdbProvider = TzdbProvider<FsTzdbBackend>;

mod sealed {
    pub trait Sealed {}
}

/// A source of TZif data for a [`TzdbProvider`].
pub trait TzdbBackend: sealed::Sealed {
    /// Loads the rules for `identifier`, which is never a reserved identifier.
    fn load(&self, identifier: &str) -> TimeZoneProviderResult<ZoneRules>;
}

/// A [`TimeZoneProvider`] that caches the rules loaded by its backend.
///
/// Lookups take a read lock on the cache; only the first lookup of an
/// identifier takes the write lock.
#[derive(Debug, Default)]
pub struct TzdbProvider<Kind> {
    cache: RwLock<FxHashMap<String, ZoneRules>>,
    kind: Kind,
}

impl<Kind> TzdbProvider<Kind> {
    fn with_backend(kind: Kind) -> Self {
        Self {
            cache: RwLock::default(),
            kind,
        }
    }

    /// Returns the backend of this provider.
    pub fn backend(&self) -> &Kind {
        &self.kind
    }
}

impl<Kind: TzdbBackend> TzdbProvider<Kind> {
    /// Get the rules for a single identifier
    fn get(&self, identifier: &str) -> TimeZoneProviderResult<ZoneRules> {
        if let Some(rules) = self
            .cache
            .read()
            .map_err(|_| TimeZoneProviderError::Assert("poisoned RWLock"))?
            .get(identifier)
        {
            return Ok(rules.clone());
        }

        let rules = self.kind.load(identifier)?;

        #[cfg(feature = "log")]
        log::trace!("caching time zone rules for {identifier}");

        Ok(self
            .cache
            .write()
            .map_err(|_| TimeZoneProviderError::Assert("poisoned RWLock"))?
            .entry(identifier.into())
            .or_insert(rules)
            .clone())
    }
}

impl<Kind: TzdbBackend> TimeZoneProvider for TzdbProvider<Kind> {
    fn resolve(&self, identifier: &str) -> TimeZoneProviderResult<ResolvedZone> {
        if let Some(zone) = ResolvedZone::from_reserved(identifier) {
            return Ok(zone);
        }
        self.get(identifier).map(ResolvedZone::Named)
    }
}

/// [`TzdbBackend`] over the tzdb bundled by `jiff-tzdb`.
#[cfg(feature = "tzdb")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CompiledTzdbBackend;

#[cfg(feature = "tzdb")]
impl sealed::Sealed for CompiledTzdbBackend {}

#[cfg(feature = "tzdb")]
impl TzdbBackend for CompiledTzdbBackend {
    fn load(&self, identifier: &str) -> TimeZoneProviderResult<ZoneRules> {
        let Some((canonical_name, data)) = jiff_tzdb::get(identifier) else {
            return Err(TimeZoneProviderError::NotFound(
                "Time zone identifier does not exist.",
            ));
        };
        // `jiff_tzdb` ignores ASCII case, identifiers here do not.
        if canonical_name != identifier {
            return Err(TimeZoneProviderError::NotFound(
                "Time zone identifier does not exist.",
            ));
        }
        ZoneRules::from_tzif_bytes(canonical_name, data)
    }
}

#[cfg(feature = "tzdb")]
impl CompiledTzdbProvider {
    /// Creates a provider over the bundled tzdb.
    pub fn new() -> Self {
        Self::with_backend(CompiledTzdbBackend)
    }
}

/// [`TzdbBackend`] over zoneinfo directories on the file system.
///
/// Directories are searched in order; the first one containing a file for
/// the identifier wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTzdbBackend {
    directories: Vec<PathBuf>,
}

impl FsTzdbBackend {
    /// Returns the directories searched by this backend, in order.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// The `$ZONEINFO` directory, when set, followed by the system
    /// directories.
    pub fn from_env() -> Self {
        Self::from_zoneinfo(std::env::var_os(ZONEINFO_ENV))
    }

    /// Like [`Self::from_env`], with `zoneinfo` standing in for the value
    /// of `$ZONEINFO`. An empty value is ignored.
    pub fn from_zoneinfo(zoneinfo: Option<OsString>) -> Self {
        let mut directories = Vec::with_capacity(SYSTEM_ZONEINFO_DIRS.len() + 1);
        if let Some(dir) = zoneinfo.filter(|dir| !dir.is_empty()) {
            directories.push(PathBuf::from(dir));
        }
        directories.extend(SYSTEM_ZONEINFO_DIRS.iter().map(PathBuf::from));
        Self { directories }
    }
}

impl Default for FsTzdbBackend {
    fn default() -> Self {
        Self::from_env()
    }
}

impl sealed::Sealed for FsTzdbBackend {}

impl TzdbBackend for FsTzdbBackend {
    fn load(&self, identifier: &str) -> TimeZoneProviderResult<ZoneRules> {
        check_relative_identifier(identifier)?;

        // An unreadable file does not stop the search; its error is only
        // reported when no later directory has usable data.
        let mut first_err = None;
        for directory in &self.directories {
            let path = directory.join(identifier);
            if !path.is_file() {
                continue;
            }
            let loaded = std::fs::read(&path)
                .map_err(|_| TimeZoneProviderError::Data("Unable to read Tzif file."))
                .and_then(|bytes| ZoneRules::from_tzif_bytes(identifier, &bytes));
            match loaded {
                Ok(rules) => return Ok(rules),
                Err(err) => {
                    #[cfg(feature = "log")]
                    log::debug!("skipping {}: {err}", path.display());
                    first_err.get_or_insert(err);
                }
            }
        }

        Err(first_err.unwrap_or(TimeZoneProviderError::NotFound(
            "Time zone identifier does not exist.",
        )))
    }
}

// Protect from path traversal attacks
fn check_relative_identifier(identifier: &str) -> TimeZoneProviderResult<()> {
    let escapes = identifier.starts_with(['/', '\\'])
        || identifier.contains('\0')
        || identifier.split(['/', '\\']).any(|part| part == "..")
        || Path::new(identifier).is_absolute();
    if escapes {
        return Err(TimeZoneProviderError::InvalidIdentifier(
            "Ill-formed timezone identifier",
        ));
    }
    Ok(())
}

impl FsTzdbProvider {
    /// Creates a provider reading TZif files from `directory` only.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_directories([directory.into()])
    }

    /// Creates a provider searching `directories` in order.
    pub fn with_directories(directories: impl IntoIterator<Item = PathBuf>) -> Self {
        Self::with_backend(FsTzdbBackend {
            directories: directories.into_iter().collect(),
        })
    }

    /// Creates a provider searching `$ZONEINFO` and then the system
    /// zoneinfo directories.
    pub fn from_env() -> Self {
        Self::with_backend(FsTzdbBackend::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_zone(dir: &Path, identifier: &str) {
        let (_, data) = jiff_tzdb::get(identifier).unwrap();
        let path = dir.join(identifier);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, data).unwrap();
    }

    fn named(zone: ResolvedZone) -> ZoneRules {
        match zone {
            ResolvedZone::Named(rules) => rules,
            other => panic!("expected a named zone, got {other:?}"),
        }
    }

    #[cfg(feature = "tzdb")]
    #[test]
    fn compiled_resolves_exact_names() {
        let provider = CompiledTzdbProvider::new();
        for id in ["America/New_York", "Asia/Tokyo", "Etc/UTC", "Europe/London"] {
            assert_eq!(named(provider.resolve(id).unwrap()).name(), id);
        }
        assert_eq!(provider.resolve(""), Ok(ResolvedZone::Utc));
        assert_eq!(provider.resolve("UTC"), Ok(ResolvedZone::Utc));
        assert_eq!(provider.resolve("Local"), Ok(ResolvedZone::Local));
    }

    #[cfg(feature = "tzdb")]
    #[test]
    fn compiled_rejects_case_mismatch() {
        let provider = CompiledTzdbProvider::new();
        assert!(provider.resolve("america/new_york").unwrap_err().is_not_found());
        assert!(provider.resolve("uTc").unwrap_err().is_not_found());
        assert!(provider.resolve("local").unwrap_err().is_not_found());
        assert!(provider.resolve("not-a-real-zone").unwrap_err().is_not_found());
    }

    #[cfg(feature = "tzdb")]
    #[test]
    fn compiled_concurrent_lookups() {
        let provider = CompiledTzdbProvider::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for id in ["America/New_York", "Asia/Tokyo", "Australia/Sydney"] {
                        assert_eq!(named(provider.resolve(id).unwrap()).name(), id);
                    }
                });
            }
        });
    }

    #[test]
    fn fs_resolves_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_zone(dir.path(), "America/New_York");

        let provider = FsTzdbProvider::new(dir.path());
        let rules = named(provider.resolve("America/New_York").unwrap());
        assert_eq!(rules.name(), "America/New_York");
        assert!(!rules.transition_times().is_empty());

        assert!(provider.resolve("Asia/Tokyo").unwrap_err().is_not_found());
        assert!(provider.resolve("America").unwrap_err().is_not_found());
        assert_eq!(provider.resolve("UTC"), Ok(ResolvedZone::Utc));
        assert_eq!(provider.resolve("Local"), Ok(ResolvedZone::Local));
    }

    #[test]
    fn fs_caches_loaded_rules() {
        let dir = tempfile::tempdir().unwrap();
        write_zone(dir.path(), "Asia/Tokyo");

        let provider = FsTzdbProvider::new(dir.path());
        assert!(provider.check_identifier("Asia/Tokyo"));

        fs::remove_file(dir.path().join("Asia/Tokyo")).unwrap();
        assert!(provider.check_identifier("Asia/Tokyo"));
        assert!(!FsTzdbProvider::new(dir.path()).check_identifier("Asia/Tokyo"));
    }

    #[test]
    fn fs_searches_directories_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_zone(second.path(), "Europe/Paris");
        fs::create_dir_all(first.path().join("Europe")).unwrap();
        fs::write(first.path().join("Europe/Berlin"), b"garbage").unwrap();
        write_zone(second.path(), "Europe/Berlin");
        fs::write(first.path().join("Europe/Madrid"), b"garbage").unwrap();

        let provider =
            FsTzdbProvider::with_directories([first.path().into(), second.path().into()]);
        assert_eq!(provider.backend().directories().len(), 2);
        assert!(provider.check_identifier("Europe/Paris"));

        // A corrupt file is skipped in favor of a later directory.
        let rules = named(provider.resolve("Europe/Berlin").unwrap());
        assert!(!rules.transition_times().is_empty());

        // With no usable copy anywhere, the first error is reported.
        assert_eq!(
            provider.resolve("Europe/Madrid"),
            Err(TimeZoneProviderError::Data("Illformed Tzif data."))
        );
    }

    #[test]
    fn fs_first_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        // Same name, different data: the copy in `first` must be used.
        let (_, tokyo) = jiff_tzdb::get("Asia/Tokyo").unwrap();
        fs::create_dir_all(first.path().join("Europe")).unwrap();
        fs::write(first.path().join("Europe/Rome"), tokyo).unwrap();
        write_zone(second.path(), "Europe/Rome");

        let provider =
            FsTzdbProvider::with_directories([first.path().into(), second.path().into()]);
        let rules = named(provider.resolve("Europe/Rome").unwrap());
        let expected = ZoneRules::from_tzif_bytes("Asia/Tokyo", tokyo).unwrap();
        assert_eq!(
            rules.transition_times().len(),
            expected.transition_times().len()
        );
    }

    #[test]
    fn fs_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FsTzdbProvider::new(dir.path().join("zoneinfo"));
        for id in ["../secret", "/etc/passwd", "\\windows", "America/../../secret"] {
            assert_eq!(
                provider.resolve(id),
                Err(TimeZoneProviderError::InvalidIdentifier(
                    "Ill-formed timezone identifier"
                )),
                "{id}"
            );
        }
    }

    #[test]
    fn zoneinfo_directory_is_searched_first() {
        let system = SYSTEM_ZONEINFO_DIRS.map(PathBuf::from);

        let backend = FsTzdbBackend::from_zoneinfo(Some("/opt/zoneinfo".into()));
        let dirs = backend.directories();
        assert_eq!(dirs.len(), system.len() + 1);
        assert_eq!(dirs[0], Path::new("/opt/zoneinfo"));
        assert_eq!(&dirs[1..], &system[..]);

        let backend = FsTzdbBackend::from_zoneinfo(Some(OsString::new()));
        assert_eq!(backend.directories(), &system[..]);

        let backend = FsTzdbBackend::from_zoneinfo(None);
        assert_eq!(backend.directories(), &system[..]);

        assert!(FsTzdbBackend::from_env().directories().ends_with(&system));
    }

    #[test]
    fn zoneinfo_directory_resolves_zones() {
        let dir = tempfile::tempdir().unwrap();
        write_zone(dir.path(), "Pacific/Kiritimati");

        let backend = FsTzdbBackend::from_zoneinfo(Some(dir.path().into()));
        let rules = backend.load("Pacific/Kiritimati").unwrap();
        assert_eq!(rules.name(), "Pacific/Kiritimati");
        assert!(backend.load("Mars/Olympus_Mons").unwrap_err().is_not_found());
    }
}
