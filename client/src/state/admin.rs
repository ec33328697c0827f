//! Admin console list state for bookings and users.
//!
//! DESIGN
//! ======
//! [`AdminTable`] is shared by both admin panels. Rows only change after the
//! backend confirms a mutation: every `apply_*` takes the call's `Result` and
//! either patches the list or records the error, leaving rows untouched.
//! Deletes go through a pending-confirmation slot so a cancelled dialog never
//! reaches the network.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::{Booking, BookingStatus, ProfileUpdate, User};
use crate::util::session::merge_user;

/// Delay before the users panel clears its success banner.
pub const SUCCESS_CLEAR_MS: u64 = 2000;

/// A list row addressable by backend id.
pub trait AdminRow: Clone {
    fn row_id(&self) -> &str;
}

impl AdminRow for Booking {
    fn row_id(&self) -> &str {
        &self.id
    }
}

impl AdminRow for User {
    fn row_id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug)]
pub struct AdminTable<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub error: String,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl<T> Default for AdminTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), loading: true, error: String::new(), pending_delete: None }
    }
}

impl<T: AdminRow> AdminTable<T> {
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>, fallback: &str) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error.clear();
            }
            Err(err) => self.error = err.message_or(fallback),
        }
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.row_id() == id)
    }

    // ===== DELETE CONFIRMATION =====

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed row id; the caller issues the delete for it.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Remove the row when the delete succeeded; otherwise keep it and
    /// surface the error. Returns whether the row was removed.
    pub fn apply_delete(&mut self, id: &str, result: Result<(), ApiError>, fallback: &str) -> bool {
        match result {
            Ok(()) => {
                self.rows.retain(|r| r.row_id() != id);
                self.error.clear();
                true
            }
            Err(err) => {
                self.error = err.message_or(fallback);
                false
            }
        }
    }

    /// Patch one row in place.
    pub fn update_row(&mut self, id: &str, patch: impl FnOnce(&mut T)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.row_id() == id) {
            patch(row);
        }
    }
}

impl AdminTable<Booking> {
    /// Set the row's status after a confirmed status change.
    pub fn apply_status(&mut self, id: &str, status: &BookingStatus, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.update_row(id, |row| row.status = status.clone());
                self.error.clear();
                true
            }
            Err(err) => {
                self.error = err.message_or("Failed to update status");
                false
            }
        }
    }
}

// =============================================================================
// BOOKING DETAIL MODAL
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct BookingDetail {
    pub open: bool,
    pub booking: Option<Booking>,
    pub loading: bool,
    pub error: String,
}

impl BookingDetail {
    /// Open on the row's data while the detail request is in flight.
    pub fn open_for(&mut self, row: &Booking) {
        self.open = true;
        self.booking = Some(row.clone());
        self.loading = true;
        self.error.clear();
    }

    /// Merge the detail payload over the row; on failure keep the row data.
    /// A response for a row the modal no longer shows is dropped.
    pub fn finish_load(&mut self, row: &Booking, result: Result<Value, ApiError>) {
        if !self.open || !self.shows(&row.id) {
            return;
        }
        self.loading = false;
        match result {
            Ok(detail) => self.booking = Some(row.merged_with(&detail)),
            Err(err) => {
                self.error = err.message_or("Failed to load booking details");
                self.booking = Some(row.clone());
            }
        }
    }

    pub fn shows(&self, id: &str) -> bool {
        self.booking.as_ref().is_some_and(|b| b.id == id)
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// USER DETAIL / EDIT MODAL
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserModalMode {
    #[default]
    View,
    Edit,
}

#[derive(Clone, Debug, Default)]
pub struct UserEditor {
    pub open: bool,
    pub mode: UserModalMode,
    pub user: Option<User>,
    pub form: ProfileUpdate,
    pub loading: bool,
    pub saving: bool,
    pub error: String,
    pub success: String,
}

/// Editable fields prefilled from a user record.
pub fn form_from(user: &User) -> ProfileUpdate {
    ProfileUpdate {
        first_name: user.first_name.clone().unwrap_or_default(),
        last_name: user.last_name.clone().unwrap_or_default(),
        mobile_number: user.mobile_number.clone().unwrap_or_default(),
        gender: user.gender.clone().unwrap_or_default(),
        address: user.address.clone().unwrap_or_default(),
    }
}

impl UserEditor {
    pub fn open_for(&mut self, id: &str, mode: UserModalMode) {
        *self = Self {
            open: true,
            mode,
            user: Some(User { id: id.to_owned(), ..User::default() }),
            loading: true,
            ..Self::default()
        };
    }

    fn is_open_for(&self, id: &str) -> bool {
        self.open && self.user.as_ref().is_some_and(|u| u.id == id)
    }

    /// Apply the detail response for `id`; ignored once the modal was closed
    /// or reopened for another user.
    pub fn finish_load(&mut self, id: &str, result: Result<User, ApiError>) {
        if !self.is_open_for(id) {
            return;
        }
        self.loading = false;
        match result {
            Ok(mut user) => {
                if user.id.is_empty() {
                    id.clone_into(&mut user.id);
                }
                self.form = form_from(&user);
                self.user = Some(user);
            }
            Err(err) => self.error = err.message_or("Failed to load user details"),
        }
    }

    /// Trimmed body for `PUT /api/admin/users/:id`, or `None` while busy or
    /// before the user loaded.
    pub fn begin_save(&mut self) -> Option<(String, ProfileUpdate)> {
        let id = self.user.as_ref().map(|u| u.id.clone()).filter(|id| !id.is_empty())?;
        if self.saving {
            return None;
        }
        self.saving = true;
        self.success.clear();
        self.error.clear();
        let f = &self.form;
        let body = ProfileUpdate {
            first_name: f.first_name.trim().to_owned(),
            last_name: f.last_name.trim().to_owned(),
            mobile_number: f.mobile_number.trim().to_owned(),
            gender: f.gender.trim().to_owned(),
            address: f.address.trim().to_owned(),
        };
        Some((id, body))
    }

    /// Apply a save outcome. On success returns the updated user so the
    /// caller can patch the list row too.
    pub fn finish_save(&mut self, sent: &ProfileUpdate, result: Result<User, ApiError>) -> Option<User> {
        self.saving = false;
        match result {
            Ok(echo) => {
                let mut base = self.user.clone().unwrap_or_default();
                base.first_name = Some(sent.first_name.clone());
                base.last_name = Some(sent.last_name.clone());
                base.mobile_number = Some(sent.mobile_number.clone());
                base.gender = Some(sent.gender.clone());
                base.address = Some(sent.address.clone());
                let updated = merge_user(Some(base), &echo);
                self.form = form_from(&updated);
                self.user = Some(updated.clone());
                self.success = "Changes saved successfully.".to_owned();
                self.mode = UserModalMode::View;
                Some(updated)
            }
            Err(err) => {
                self.error = err.message_or("Failed to update user");
                None
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Fold an updated user into its list row, keeping row fields the update lacks.
pub fn patch_user_row(row: &mut User, updated: &User) {
    *row = merge_user(Some(row.clone()), updated);
}
