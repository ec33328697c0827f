//! Booking request form state, validation, and summary preview.
//!
//! DESIGN
//! ======
//! Field errors are recomputed for the whole form on every blur and on
//! submit, but only shown for fields the visitor has touched. A submit marks
//! every required field touched. The sidebar summary prefers the server's
//! echo of the last created booking and otherwise mirrors the live form.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::{BookingRequest, EMPTY_CELL};
use crate::util::validate::is_valid_booking_phone;

pub const SERVICE_TYPES: [&str; 4] = ["Installation", "Repair", "Polish", "Inspection"];
pub const FLOORING_TYPES: [&str; 6] = ["Homogeneous", "Heterogeneous", "SPC", "Vinyl", "Carpet", "Wooden"];
pub const TIME_SLOTS: [&str; 3] = ["Morning 8-12", "Afternoon 12-4", "Evening 4-8"];

pub const SESSION_EXPIRED: &str = "Session expired, please login again";
/// Pause before sending an expired session to `/login`.
pub const SESSION_REDIRECT_MS: u64 = 300;

/// NPR per square foot used for the rough estimate.
const PRICE_PER_SQFT: f64 = 45.0;
const PRICE_SPREAD: f64 = 1.2;

pub struct FaqItem {
    pub title: &'static str,
    pub content: &'static str,
}

pub const FAQ_ITEMS: [FaqItem; 4] = [
    FaqItem {
        title: "How soon can I book a visit?",
        content: "Most visits are scheduled within 24–48 hours, depending on technician availability in your area.",
    },
    FaqItem {
        title: "Is there a site inspection before final pricing?",
        content: "Yes. We confirm measurements and site conditions before sharing the final quotation.",
    },
    FaqItem {
        title: "Do you bring flooring samples?",
        content: "We can bring curated samples on request. Mention it in your notes for a tailored selection.",
    },
    FaqItem {
        title: "Can I reschedule the appointment?",
        content: "Absolutely. You can reschedule up to 24 hours before the visit by contacting support.",
    },
];

/// Raw form inputs as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub service_type: String,
    pub flooring_type: String,
    pub area_size: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
    pub room_photo_name: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            service_type: SERVICE_TYPES[0].to_owned(),
            flooring_type: FLOORING_TYPES[0].to_owned(),
            area_size: String::new(),
            preferred_date: String::new(),
            preferred_time: TIME_SLOTS[0].to_owned(),
            notes: String::new(),
            room_photo_name: String::new(),
        }
    }
}

impl BookingForm {
    fn area_value(&self) -> f64 {
        self.area_size.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Trimmed request body.
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            full_name: self.full_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            city_address: self.address.trim().to_owned(),
            service_type: self.service_type.clone(),
            flooring_type: self.flooring_type.clone(),
            area_size: self.area_value(),
            preferred_date: self.preferred_date.clone(),
            preferred_time: self.preferred_time.clone(),
            notes: self.notes.trim().to_owned(),
        }
    }
}

/// Required fields that carry validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    FullName,
    Phone,
    Address,
    AreaSize,
    PreferredDate,
}

impl BookingField {
    pub const ALL: [Self; 5] = [Self::FullName, Self::Phone, Self::Address, Self::AreaSize, Self::PreferredDate];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub area_size: String,
    pub preferred_date: String,
}

impl BookingErrors {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FullName => &self.full_name,
            BookingField::Phone => &self.phone,
            BookingField::Address => &self.address,
            BookingField::AreaSize => &self.area_size,
            BookingField::PreferredDate => &self.preferred_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        BookingField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

pub fn validate_booking(form: &BookingForm) -> BookingErrors {
    let mut errors = BookingErrors::default();
    if form.full_name.trim().is_empty() {
        errors.full_name = "Full name is required.".to_owned();
    }
    let phone = form.phone.trim();
    if phone.is_empty() {
        errors.phone = "Phone number is required.".to_owned();
    } else if !is_valid_booking_phone(phone) {
        errors.phone = "Enter a valid 10-digit number or +977XXXXXXXXXX.".to_owned();
    }
    if form.address.trim().is_empty() {
        errors.address = "City/Address is required.".to_owned();
    }
    let area = form.area_size.trim();
    if area.is_empty() {
        errors.area_size = "Area size is required.".to_owned();
    } else if area.parse::<f64>().map_or(true, |n| n <= 0.0) {
        errors.area_size = "Area size must be greater than 0.".to_owned();
    }
    if form.preferred_date.trim().is_empty() {
        errors.preferred_date = "Preferred date is required.".to_owned();
    }
    errors
}

/// What the page should do after a submit attempt completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    SessionExpired,
    Failed,
}

#[derive(Clone, Debug)]
pub struct BookingFormState {
    pub form: BookingForm,
    pub touched: Vec<BookingField>,
    pub errors: BookingErrors,
    pub submitting: bool,
    pub success: String,
    pub error: String,
    pub modal_open: bool,
    pub open_faq: Option<usize>,
    pub submitted: Option<BookingRequest>,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self {
            form: BookingForm::default(),
            touched: Vec::new(),
            errors: BookingErrors::default(),
            submitting: false,
            success: String::new(),
            error: String::new(),
            modal_open: false,
            open_faq: Some(0),
            submitted: None,
        }
    }
}

impl BookingFormState {
    pub fn blur(&mut self, field: BookingField) {
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
        self.errors = validate_booking(&self.form);
    }

    /// Error to display for a field: only once it has been touched.
    pub fn visible_error(&self, field: BookingField) -> &str {
        if self.touched.contains(&field) { self.errors.get(field) } else { "" }
    }

    /// Validate everything; `Some(body)` when the request should be sent.
    pub fn begin_submit(&mut self) -> Option<BookingRequest> {
        if self.submitting {
            return None;
        }
        self.errors = validate_booking(&self.form);
        self.touched = BookingField::ALL.to_vec();
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        self.success.clear();
        self.error.clear();
        Some(self.form.to_request())
    }

    /// No stored token: nothing is sent and the visitor is told to log in.
    pub fn session_missing(&mut self) {
        self.submitting = false;
        self.error = SESSION_EXPIRED.to_owned();
    }

    pub fn finish_submit(&mut self, sent: &BookingRequest, result: Result<Value, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(body) => {
                self.submitted = Some(sent.resolved_from(&body));
                self.success = "Booking created successfully".to_owned();
                self.modal_open = true;
                self.form = BookingForm::default();
                self.touched.clear();
                self.errors = BookingErrors::default();
                SubmitOutcome::Created
            }
            Err(err) if err.is_unauthorized() => {
                self.error = SESSION_EXPIRED.to_owned();
                SubmitOutcome::SessionExpired
            }
            Err(err) => {
                self.error = err.message_or("Failed to create booking");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self { open_faq: self.open_faq, ..Self::default() };
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Accordion: opening one item closes the other; clicking the open one closes it.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) { None } else { Some(index) };
    }

    /// Source for the summary card.
    pub fn summary(&self) -> BookingRequest {
        self.submitted.clone().unwrap_or_else(|| self.form.to_request())
    }
}

/// `NPR low - NPR high` for a positive area, else a prompt.
pub fn price_estimate(area: f64) -> String {
    if area <= 0.0 {
        return "Add area size to estimate".to_owned();
    }
    let low = area * PRICE_PER_SQFT;
    let high = (low * PRICE_SPREAD).round();
    format!("NPR {} - NPR {}", group_thousands(low), group_thousands(high))
}

/// `12345.5` → `"12,345.5"`; at most three fraction digits.
fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{rounded}");
    let (int_part, frac_part) = text.split_once('.').map_or((text.as_str(), None), |(i, f)| (i, Some(f)));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// Summary value or the empty-cell placeholder.
pub fn or_empty(value: &str) -> String {
    if value.trim().is_empty() { EMPTY_CELL.to_owned() } else { value.to_owned() }
}

/// `"1200 sq.ft"` for a positive area.
pub fn area_label(area: f64) -> String {
    if area > 0.0 { format!("{area} sq.ft") } else { EMPTY_CELL.to_owned() }
}

/// `"<date> • <time>"` once a date is chosen.
pub fn schedule_label(summary: &BookingRequest) -> String {
    if summary.preferred_date.is_empty() {
        EMPTY_CELL.to_owned()
    } else {
        format!("{} • {}", summary.preferred_date, summary.preferred_time)
    }
}

/// Label/value rows for the summary card and the confirmation modal.
pub fn summary_rows(summary: &BookingRequest) -> [(&'static str, String); 7] {
    [
        ("Name", or_empty(&summary.full_name)),
        ("Phone", or_empty(&summary.phone)),
        ("Service", or_empty(&summary.service_type)),
        ("Flooring", or_empty(&summary.flooring_type)),
        ("Area", area_label(summary.area_size)),
        ("Schedule", schedule_label(summary)),
        ("Address", or_empty(&summary.city_address)),
    ]
}
