//! Request/response records exchanged with the FloorEase backend.
//!
//! DESIGN
//! ======
//! Outgoing bodies are plain `Serialize` structs in the backend's camelCase.
//! Incoming records are decoded leniently from `serde_json::Value`: the
//! backend mixes `id`/`_id`, `phone`/`phoneNumber` and wraps payloads in
//! `data`, `user` or `booking` depending on the endpoint, and a single odd
//! row must not fail a whole admin list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;
use serde_json::Value;

/// Placeholder rendered for absent display fields.
pub const EMPTY_CELL: &str = "—";

// =============================================================================
// FIELD HELPERS
// =============================================================================

/// First non-empty string among `keys`. Numbers are rendered as strings.
fn text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Unwrap a record from the usual envelopes: first matching key in `keys`
/// holding an object, else the payload itself.
#[must_use]
pub fn unwrap_record<'a>(payload: &'a Value, keys: &[&str]) -> &'a Value {
    keys.iter()
        .find_map(|key| payload.get(*key).filter(|v| v.is_object()))
        .unwrap_or(payload)
}

/// Resolve a list from a bare array, `{data: [...]}`, or `{<key>: [...]}`.
#[must_use]
pub fn resolve_list<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    if let Some(items) = payload.as_array() {
        return items;
    }
    ["data", key]
        .iter()
        .find_map(|k| payload.get(*k).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

// =============================================================================
// USER
// =============================================================================

/// A user account as returned by `/api/auth/me` and `/api/admin/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Decode a user, looking through `data` / `user` envelopes.
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        let v = unwrap_record(payload, &["data", "user"]);
        let v = unwrap_record(v, &["data", "user"]);
        Self {
            id: text(v, &["id", "_id"]).unwrap_or_default(),
            email: text(v, &["email"]),
            first_name: text(v, &["firstName"]),
            last_name: text(v, &["lastName"]),
            full_name: text(v, &["fullName"]),
            mobile_number: text(v, &["mobileNumber", "phone"]),
            gender: text(v, &["gender"]),
            address: text(v, &["address"]),
            avatar_url: text(v, &["avatarUrl", "avatar", "profileImage", "image", "photo"]),
            role: text(v, &["role"]),
            created_at: text(v, &["createdAt"]),
        }
    }

    /// First + last name, else full name, else email, else `"Unknown"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        if !joined.is_empty() {
            return joined.to_owned();
        }
        self.full_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Unknown".to_owned())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

// =============================================================================
// BOOKING
// =============================================================================

/// Lifecycle status of a booking. Unknown server values are preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl BookingStatus {
    /// Statuses offered in the admin select.
    pub const CHOICES: [Self; 2] = [Self::Pending, Self::Completed];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("pending") || trimmed.is_empty() {
            Self::Pending
        } else if trimmed.eq_ignore_ascii_case("completed") {
            Self::Completed
        } else {
            Self::Other(trimmed.to_owned())
        }
    }

    /// Wire value sent in `PATCH .../status`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A customer service request as listed in the admin console.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub city_address: String,
    pub service_type: String,
    pub flooring_type: String,
    pub area_size: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: Option<String>,
    pub room_photo: Option<String>,
    pub status: BookingStatus,
    pub created_at: Option<String>,
}

impl Booking {
    /// Decode a booking row; missing display fields become [`EMPTY_CELL`].
    #[must_use]
    pub fn from_value(v: &Value) -> Self {
        let cell = |keys: &[&str]| text(v, keys).unwrap_or_else(|| EMPTY_CELL.to_owned());
        Self {
            id: text(v, &["id", "_id"]).unwrap_or_default(),
            full_name: cell(&["fullName"]),
            phone_number: cell(&["phoneNumber", "phone"]),
            email: text(v, &["email"]),
            city_address: cell(&["cityAddress", "address"]),
            service_type: cell(&["serviceType"]),
            flooring_type: cell(&["flooringType"]),
            area_size: text(v, &["areaSize"]),
            preferred_date: cell(&["preferredDate"]),
            preferred_time: cell(&["preferredTime"]),
            notes: text(v, &["notes"]),
            room_photo: text(v, &["roomPhoto"]),
            status: text(v, &["status"]).map(|s| BookingStatus::parse(&s)).unwrap_or_default(),
            created_at: text(v, &["createdAt"]),
        }
    }

    /// Overlay detail-endpoint fields onto this row, keeping row values the
    /// detail payload does not carry.
    #[must_use]
    pub fn merged_with(&self, detail: &Value) -> Self {
        let d = unwrap_record(detail, &["data", "booking"]);
        let or = |keys: &[&str], fallback: &String| text(d, keys).unwrap_or_else(|| fallback.clone());
        let or_opt = |keys: &[&str], fallback: &Option<String>| text(d, keys).or_else(|| fallback.clone());
        Self {
            id: self.id.clone(),
            full_name: or(&["fullName"], &self.full_name),
            phone_number: or(&["phoneNumber", "phone"], &self.phone_number),
            email: or_opt(&["email"], &self.email),
            city_address: or(&["cityAddress", "address"], &self.city_address),
            service_type: or(&["serviceType"], &self.service_type),
            flooring_type: or(&["flooringType"], &self.flooring_type),
            area_size: or_opt(&["areaSize"], &self.area_size),
            preferred_date: or(&["preferredDate"], &self.preferred_date),
            preferred_time: or(&["preferredTime"], &self.preferred_time),
            notes: or_opt(&["notes"], &self.notes),
            room_photo: or_opt(&["roomPhoto"], &self.room_photo),
            status: text(d, &["status"]).map_or_else(|| self.status.clone(), |s| BookingStatus::parse(&s)),
            created_at: or_opt(&["createdAt"], &self.created_at),
        }
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile_number: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Body of `PUT /api/auth/me` and `PUT /api/admin/users/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub gender: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Body of `POST /api/bookings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub city_address: String,
    pub service_type: String,
    pub flooring_type: String,
    pub area_size: f64,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
}

impl BookingRequest {
    /// Prefer the server's echo of the created booking, falling back to what
    /// was submitted for any field it leaves out.
    #[must_use]
    pub fn resolved_from(&self, response: &Value) -> Self {
        let c = unwrap_record(response, &["booking", "data"]);
        let or = |keys: &[&str], fallback: &String| text(c, keys).unwrap_or_else(|| fallback.clone());
        let area_size = match c.get("areaSize") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(self.area_size),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| *n != 0.0).unwrap_or(self.area_size),
            _ => self.area_size,
        };
        Self {
            full_name: or(&["fullName"], &self.full_name),
            phone: or(&["phone"], &self.phone),
            email: or(&["email"], &self.email),
            city_address: or(&["cityAddress", "address"], &self.city_address),
            service_type: or(&["serviceType"], &self.service_type),
            flooring_type: or(&["flooringType"], &self.flooring_type),
            area_size,
            preferred_date: or(&["preferredDate"], &self.preferred_date),
            preferred_time: or(&["preferredTime"], &self.preferred_time),
            notes: or(&["notes"], &self.notes),
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Session material extracted from a login response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginResult {
    pub token: Option<String>,
    pub user: Option<User>,
    pub role: Option<String>,
}

impl LoginResult {
    /// Token at `data.token` or `token`; user at `data.user` or `user`;
    /// role at `data.role`, `role`, or on the user record.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let data = body.get("data").filter(|d| d.is_object());
        let lookup = |key: &str| data.and_then(|d| d.get(key)).or_else(|| body.get(key));
        let token = lookup("token")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        let user = lookup("user").filter(|u| u.is_object()).map(User::from_value);
        let role = lookup("role")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| user.as_ref().and_then(|u| u.role.clone()));
        Self { token, user, role }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

/// Optional `message` carried by a successful mutation response.
#[must_use]
pub fn success_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
