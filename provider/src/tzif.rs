//! Parsed TZif rules for a named time zone.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use combine::Parser;

use ::tzif::data::{
    posix::PosixTzString,
    time::Seconds,
    tzif::{DataBlock, TzifData},
};

use crate::{provider::TimeZoneProviderResult, TimeZoneProviderError};

/// `TZif` stands for Time zone information format is laid out by [RFC 8536][rfc8536] and
/// laid out by the [tzdata manual][tzif-manual]
///
/// Only the pieces of the parsed file that describe the zone's rules are
/// kept; the headers are validated by the parser and then dropped.
///
/// [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
/// [tzif-manual]: https://man7.org/linux/man-pages/man5/tzfile.5.html
#[derive(Debug, Clone)]
struct Tzif {
    data_block1: DataBlock,
    data_block2: Option<DataBlock>,
    footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            data_block1,
            data_block2,
            footer,
            ..
        } = value;

        Self {
            data_block1,
            data_block2,
            footer,
        }
    }
}

impl Tzif {
    fn from_bytes(data: &[u8]) -> TimeZoneProviderResult<Self> {
        let Ok((parse_result, _)) = ::tzif::parse::tzif::tzif().parse(data) else {
            return Err(TimeZoneProviderError::Data("Illformed Tzif data."));
        };
        Ok(Self::from(parse_result))
    }

    /// Prefers the 64-bit data block, which every v2+ file carries.
    fn data_block(&self) -> &DataBlock {
        self.data_block2.as_ref().unwrap_or(&self.data_block1)
    }
}

/// The rules of a named time zone, as loaded from TZif data.
///
/// `ZoneRules` is cheap to clone; the parsed data is shared and never
/// mutated after loading. Two values are equal when they carry the same
/// zone name.
#[derive(Clone)]
pub struct ZoneRules {
    name: Arc<str>,
    tzif: Arc<Tzif>,
}

impl ZoneRules {
    /// Parses the TZif `data` for the zone called `name`.
    pub fn from_tzif_bytes(name: &str, data: &[u8]) -> Result<Self, TimeZoneProviderError> {
        let tzif = Tzif::from_bytes(data)?;
        Ok(Self {
            name: name.into(),
            tzif: Arc::new(tzif),
        })
    }

    /// Returns the identifier these rules were loaded for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the UTC transition times recorded in the TZif data.
    pub fn transition_times(&self) -> &[Seconds] {
        &self.tzif.data_block().transition_times
    }

    /// Returns the POSIX TZ string that describes transitions after the
    /// last recorded one, if the data has a footer.
    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.tzif.footer.as_ref()
    }
}

impl PartialEq for ZoneRules {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ZoneRules {}

impl Hash for ZoneRules {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ZoneRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneRules")
            .field("name", &self.name)
            .field("transitions", &self.transition_times().len())
            .finish()
    }
}
