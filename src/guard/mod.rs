//! Route guard deciding whether a view may show before its data exists
//!
//! The favorite-gated views must not flash a redirect while authentication
//! or the favorite lookup is still in flight, and must not trap the user
//! behind a redirect the app cannot resolve when either of them fails.

use crate::share::CollectibleRef;

/// Authentication progress as reported by the host handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Pending,
    Authenticated,
    Failed,
}

impl AuthState {
    pub fn is_terminal(self) -> bool {
        matches!(self, AuthState::Authenticated | AuthState::Failed)
    }
}

/// Loading progress of the viewer's chosen favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteState {
    Loading,
    Loaded(Option<CollectibleRef>),
    Failed,
}

impl FavoriteState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FavoriteState::Loaded(_) | FavoriteState::Failed)
    }
}

/// What the owning view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Keep showing the loading state; inputs are still in flight.
    Wait,
    /// Show the view.
    Allow,
    /// Send the user to the favorite picker.
    RedirectToPicker,
}

/// Tracks authentication and favorite-load progress as they arrive and
/// derives the gate decision. The decision is recomputed on every read;
/// only a confirmed missing favorite redirects.
#[derive(Debug, Clone)]
pub struct FavoriteGuard {
    auth: AuthState,
    favorite: FavoriteState,
}

impl FavoriteGuard {
    pub fn new() -> Self {
        Self {
            auth: AuthState::Pending,
            favorite: FavoriteState::Loading,
        }
    }

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn favorite(&self) -> &FavoriteState {
        &self.favorite
    }

    pub fn set_auth(&mut self, auth: AuthState) {
        tracing::debug!(?auth, "auth state updated");
        self.auth = auth;
    }

    pub fn set_favorite(&mut self, favorite: FavoriteState) {
        tracing::debug!(terminal = favorite.is_terminal(), "favorite state updated");
        self.favorite = favorite;
    }

    /// Derive the current gate decision.
    ///
    /// Auth failure and favorite-load failure both allow: those errors
    /// surface through the owning view's own error path, and redirecting
    /// on them would loop the user through a picker that cannot load
    /// either.
    pub fn decision(&self) -> GuardDecision {
        match (self.auth, &self.favorite) {
            (AuthState::Pending, _) => GuardDecision::Wait,
            (AuthState::Failed, _) => GuardDecision::Allow,
            (AuthState::Authenticated, FavoriteState::Loading) => GuardDecision::Wait,
            (AuthState::Authenticated, FavoriteState::Loaded(None)) => {
                GuardDecision::RedirectToPicker
            }
            (AuthState::Authenticated, FavoriteState::Loaded(Some(_))) => GuardDecision::Allow,
            (AuthState::Authenticated, FavoriteState::Failed) => GuardDecision::Allow,
        }
    }
}

impl Default for FavoriteGuard {
    fn default() -> Self {
        Self::new()
    }
}
