//! Conversions between wire messages, domain ports and decoded entries.

use crate::application::CreatePortCommand;
use crate::domain::port::Port;
use crate::ports::PortEntry;
use crate::proto::v1 as proto;

impl From<&Port> for proto::Port {
    fn from(port: &Port) -> Self {
        Self {
            id: port.id().to_string(),
            name: port.name().to_string(),
            city: port.city().to_string(),
            country: port.country().to_string(),
            alias: port.alias().to_vec(),
            regions: port.regions().to_vec(),
            coordinates: port.coordinates().to_vec(),
            province: port.province().to_string(),
            timezone: port.timezone().to_string(),
            unlocs: port.unlocs().to_vec(),
            code: port.code().to_string(),
        }
    }
}

impl From<proto::Port> for CreatePortCommand {
    fn from(port: proto::Port) -> Self {
        Self {
            id: port.id,
            name: port.name,
            city: port.city,
            country: port.country,
            alias: port.alias,
            regions: port.regions,
            coordinates: port.coordinates,
            province: port.province,
            timezone: port.timezone,
            unlocs: port.unlocs,
            code: port.code,
        }
    }
}

impl From<PortEntry> for proto::Port {
    fn from(entry: PortEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            city: entry.city,
            country: entry.country,
            alias: entry.alias,
            regions: entry.regions,
            coordinates: entry.coordinates,
            province: entry.province,
            timezone: entry.timezone,
            unlocs: entry.unlocs,
            code: entry.code,
        }
    }
}

impl From<proto::Port> for PortEntry {
    fn from(port: proto::Port) -> Self {
        Self {
            id: port.id,
            name: port.name,
            city: port.city,
            country: port.country,
            alias: port.alias,
            regions: port.regions,
            coordinates: port.coordinates,
            province: port.province,
            timezone: port.timezone,
            unlocs: port.unlocs,
            code: port.code,
        }
    }
}
