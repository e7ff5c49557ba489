use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// UPS track response (the `TrackResponse` object of a successful reply)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub response: ResponseHeader,
    #[serde(deserialize_with = "null_as_default")]
    pub shipment: Shipment,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResponseHeader {
    #[serde(deserialize_with = "null_as_default")]
    pub response_status: CodeDescr,
}

/// A `(code, description)` pair, used by UPS for every classification field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CodeDescr {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_province_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UnitOfMeasurement {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
}

/// Weight exactly as reported by the service; the value is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Weight {
    #[serde(deserialize_with = "null_as_default")]
    pub unit_of_measurement: UnitOfMeasurement,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActivityLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActivityStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Status classifier, e.g. "I" (in transit), "D" (delivered), "M" (manifest)
    #[serde(rename = "Type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// One scan/status event in a package's transit history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Activity {
    #[serde(deserialize_with = "null_as_default")]
    pub activity_location: ActivityLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ActivityStatus,
    /// `YYYYMMDD`
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// `HHMMSS`
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    /// `date` and `time` combined; `None` when they could not be parsed.
    #[serde(skip)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PackageServiceOption {
    #[serde(rename = "Type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: CodeDescr,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Package {
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_number: String,
    /// Ordered as returned by the service.
    #[serde(deserialize_with = "one_or_many")]
    pub activity: Vec<Activity>,
    #[serde(deserialize_with = "one_or_many")]
    pub package_service_option: Vec<PackageServiceOption>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: CodeDescr,
    #[serde(deserialize_with = "null_as_default")]
    pub package_weight: Weight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ShipmentAddress {
    #[serde(rename = "Type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: CodeDescr,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeliveryDetail {
    #[serde(rename = "Type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: CodeDescr,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Shipment {
    #[serde(deserialize_with = "null_as_default")]
    pub package: Package,
    #[serde(deserialize_with = "null_as_default")]
    pub shipper_number: String,
    #[serde(deserialize_with = "one_or_many")]
    pub shipment_address: Vec<ShipmentAddress>,
    #[serde(deserialize_with = "null_as_default")]
    pub shipment_weight: Weight,
    #[serde(deserialize_with = "null_as_default")]
    pub service: CodeDescr,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_detail: DeliveryDetail,
}

/// Accepts either a JSON array or a bare object; UPS collapses one-element
/// lists into the element itself.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Combine a `YYYYMMDD` date and an `HHMMSS` time into a UTC instant.
///
/// Returns `None` for anything that does not form a valid RFC3339 timestamp.
/// Leap seconds (`SS == 60`) are rejected.
pub fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    if time.get(4..6)? == "60" {
        return None;
    }

    let rfc3339 = format!(
        "{}-{}-{}T{}:{}:{}Z",
        date.get(0..4)?,
        date.get(4..6)?,
        date.get(6..8)?,
        time.get(0..2)?,
        time.get(2..4)?,
        time.get(4..6)?,
    );

    DateTime::parse_from_rfc3339(&rfc3339)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

impl Activity {
    /// Fill `timestamp` from `date` and `time`, leaving it unset on failure.
    pub fn parse_timestamp(&mut self) {
        self.timestamp = parse_timestamp(&self.date, &self.time);
        if self.timestamp.is_none() {
            tracing::trace!(
                "Unparseable activity timestamp: date={:?} time={:?}",
                self.date,
                self.time
            );
        }
    }
}

pub fn normalize_timestamps(activities: &mut [Activity]) {
    for activity in activities.iter_mut() {
        activity.parse_timestamp();
    }
}

impl fmt::Display for CodeDescr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.is_empty(), self.description.is_empty()) {
            (true, _) => write!(f, "{}", self.description),
            (false, true) => write!(f, "{}", self.code),
            (false, false) => write!(f, "{} ({})", self.description, self.code),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.city.as_str(),
            self.state_province_code.as_str(),
            self.country_code.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

        write!(f, "{}", parts.join(", "))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit_of_measurement.code.is_empty() {
            write!(f, "{}", self.weight)
        } else {
            write!(f, "{} {}", self.weight, self.unit_of_measurement.code)
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(timestamp) => writeln!(f, "{}", timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?,
            None => writeln!(f, "{} {}", self.date, self.time)?,
        }

        if self.status.code.is_empty() {
            write!(f, "{}", self.status.description)?;
        } else {
            write!(f, "{} ({})", self.status.description, self.status.code)?;
        }

        let location = self.activity_location.address.to_string();
        if !location.is_empty() {
            write!(f, "\n{}", location)?;
        }

        Ok(())
    }
}
