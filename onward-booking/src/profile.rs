use chrono::NaiveDate;
use onward_core::{BookingHistoryEntry, BookingStatus};
use onward_shared::RequestStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const PLACEHOLDER_USER_ID: &str = "mockUser123";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub currency: String,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            currency: "USD".to_string(),
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub theme: Option<Theme>,
    pub currency: Option<String>,
    pub notifications: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub preferences: Preferences,
    pub loyalty_points: u32,
    pub booking_history: Vec<BookingHistoryEntry>,
    pub bookings_status: RequestStatus,
    pub bookings_error: Option<String>,
}

impl ProfileState {
    fn clear_history(&mut self) {
        self.booking_history.clear();
        self.bookings_status = RequestStatus::Idle;
        self.bookings_error = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Login(UserProfile),
    Logout,
    UpdateProfile(ProfilePatch),
    UpdatePreferences(PreferencesPatch),
    AddLoyaltyPoints(u32),
    RedeemLoyaltyPoints(u32),
    AddBookingToHistory(BookingHistoryEntry),
    MarkCancelled(String),
    FetchStarted,
    FetchSucceeded(Vec<BookingHistoryEntry>),
    FetchFailed(String),
}

/// Signed-in traveller, preferences and trip history.
#[derive(Debug, Default)]
pub struct ProfileStore {
    state: ProfileState,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ProfileAction) {
        let state = &mut self.state;
        match action {
            ProfileAction::Login(user) => {
                state.user = Some(user);
                state.is_authenticated = true;
                state.clear_history();
            }
            ProfileAction::Logout => {
                state.user = None;
                state.is_authenticated = false;
                state.clear_history();
            }
            ProfileAction::UpdateProfile(patch) => {
                if let Some(user) = state.user.as_mut() {
                    if let Some(first_name) = patch.first_name {
                        user.first_name = first_name;
                    }
                    if let Some(last_name) = patch.last_name {
                        user.last_name = last_name;
                    }
                    if let Some(email) = patch.email {
                        user.email = email;
                    }
                }
            }
            ProfileAction::UpdatePreferences(patch) => {
                if let Some(theme) = patch.theme {
                    state.preferences.theme = theme;
                }
                if let Some(currency) = patch.currency {
                    state.preferences.currency = currency;
                }
                if let Some(notifications) = patch.notifications {
                    state.preferences.notifications = notifications;
                }
            }
            ProfileAction::AddLoyaltyPoints(points) => {
                state.loyalty_points = state.loyalty_points.saturating_add(points);
            }
            ProfileAction::RedeemLoyaltyPoints(points) => {
                if state.loyalty_points >= points {
                    state.loyalty_points -= points;
                }
            }
            ProfileAction::AddBookingToHistory(entry) => {
                if !state.booking_history.iter().any(|b| b.id == entry.id) {
                    state.booking_history.insert(0, entry);
                }
            }
            ProfileAction::MarkCancelled(reference) => {
                for entry in state.booking_history.iter_mut().filter(|b| b.booking_reference == reference) {
                    entry.status = BookingStatus::Cancelled;
                }
            }
            ProfileAction::FetchStarted => {
                state.bookings_status = RequestStatus::Loading;
                state.bookings_error = None;
            }
            ProfileAction::FetchSucceeded(mut entries) => {
                entries.sort_by(|a, b| b.travel_date.cmp(&a.travel_date));
                state.booking_history = entries;
                state.bookings_status = RequestStatus::Succeeded;
                state.bookings_error = None;
            }
            ProfileAction::FetchFailed(message) => {
                state.bookings_status = RequestStatus::Failed;
                state.bookings_error = Some(message);
            }
        }
        debug!(
            bookings = self.state.booking_history.len(),
            status = %self.state.bookings_status,
            "profile updated"
        );
    }

    pub fn user_id(&self) -> &str {
        self.state.user.as_ref().map(|u| u.id.as_str()).unwrap_or(PLACEHOLDER_USER_ID)
    }

    /// Trips departing today or later.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&BookingHistoryEntry> {
        self.state.booking_history.iter().filter(|b| b.travel_date >= today).collect()
    }

    pub fn past(&self, today: NaiveDate) -> Vec<&BookingHistoryEntry> {
        self.state.booking_history.iter().filter(|b| b.travel_date < today).collect()
    }
}
